use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::algorithm::{is_eligible, unsatisfied_groups, RequirementStore, TopoOrder};
use crate::catalogue::{Catalogue, ParseSummary, UnknownCode};
use crate::config::split_completed;
use crate::error::{PrereqError, Result};
use crate::models::{CourseCode, RequirementGroup, RequirementSet};

/// Cursos aprobados tal como llegan: lista JSON o texto separado por comas.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompletedInput {
	List(Vec<String>),
	Csv(String),
}

impl Default for CompletedInput {
	fn default() -> Self {
		CompletedInput::List(Vec::new())
	}
}

/// Parámetros de entrada para la consulta de elegibilidad
///
/// # Estructura del JSON esperado:
/// ```json
/// { "completed": ["CHEM 102", "BIOCH 200"] }
/// ```
/// o bien `{ "completed": "CHEM 102,BIOCH 200" }`. Los códigos se normalizan.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct EligibilityRequest {
	#[serde(default)]
	pub completed: CompletedInput,
}

impl EligibilityRequest {
	pub fn completed_set(&self) -> HashSet<CourseCode> {
		match &self.completed {
			CompletedInput::List(v) => v
				.iter()
				.filter(|s| !s.trim().is_empty())
				.map(|s| CourseCode::new(s))
				.collect(),
			CompletedInput::Csv(s) => split_completed(s).into_iter().collect(),
		}
	}
}

pub fn parse_json_input(json_str: &str) -> std::result::Result<EligibilityRequest, serde_json::Error> {
	serde_json::from_str::<EligibilityRequest>(json_str)
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
	#[serde(flatten)]
	pub summary: ParseSummary,
	pub nodes: usize,
	pub edges: usize,
	pub has_cycle: bool,
}

impl SummaryResponse {
	pub fn build(cat: &Catalogue) -> Self {
		SummaryResponse {
			summary: cat.summary.clone(),
			nodes: cat.graph.node_count(),
			edges: cat.graph.edge_count(),
			has_cycle: cat.order.has_cycle(),
		}
	}
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderResponse {
	pub order: Vec<CourseCode>,
	pub has_cycle: bool,
	pub remainder: Vec<CourseCode>,
}

impl From<&TopoOrder> for OrderResponse {
	fn from(t: &TopoOrder) -> Self {
		OrderResponse {
			order: t.order.clone(),
			has_cycle: t.has_cycle(),
			remainder: t.remainder.clone(),
		}
	}
}

#[derive(Debug, Serialize)]
pub struct EligibilityResponse {
	pub completed: Vec<CourseCode>,
	pub eligible: Vec<CourseCode>,
	pub count: usize,
	/// Aprobados que el catálogo no conoce (con sugerencia si la hay)
	pub unknown: Vec<UnknownCode>,
}

impl EligibilityResponse {
	pub fn build(cat: &Catalogue, completed: &HashSet<CourseCode>) -> Self {
		let eligible: Vec<CourseCode> = cat.eligible(completed).into_iter().collect();
		let mut done: Vec<CourseCode> = completed.iter().cloned().collect();
		done.sort();
		EligibilityResponse {
			completed: done,
			count: eligible.len(),
			eligible,
			unknown: cat.unknown_codes(completed),
		}
	}
}

/// Detalle de un curso.
#[derive(Debug, Serialize)]
pub struct CourseResponse {
	pub code: CourseCode,
	pub requirements: RequirementSet,
	pub prerequisites: Vec<CourseCode>,
	pub dependents: Vec<CourseCode>,
	pub indegree: usize,
	/// Sólo presente cuando la consulta trae `completed`
	#[serde(skip_serializing_if = "Option::is_none")]
	pub eligible: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub unsatisfied: Option<Vec<RequirementGroup>>,
}

impl CourseResponse {
	/// `None` si el código no es nodo del grafo.
	pub fn build(cat: &Catalogue, code: &CourseCode, completed: Option<&HashSet<CourseCode>>) -> Option<Self> {
		let indegree = cat.graph.indegree(code.as_str())?;
		let requirements: RequirementSet = cat.store.get(code.as_str()).cloned().unwrap_or_default();
		let (eligible, unsatisfied) = match completed {
			Some(done) => (
				Some(is_eligible(&requirements, done)),
				Some(unsatisfied_groups(&requirements, done).into_iter().cloned().collect()),
			),
			None => (None, None),
		};
		Some(CourseResponse {
			code: code.clone(),
			prerequisites: cat.graph.prerequisites(code.as_str()),
			dependents: cat.graph.dependents(code.as_str()),
			indegree,
			requirements,
			eligible,
			unsatisfied,
		})
	}
}

/// Reporte completo que escribe el CLI con `--output`.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
	pub generated_at: DateTime<Utc>,
	pub source: String,
	pub summary: &'a ParseSummary,
	pub order: OrderResponse,
	pub completed: Vec<CourseCode>,
	pub eligible: Vec<CourseCode>,
	pub requirements: &'a RequirementStore,
}

impl<'a> Report<'a> {
	pub fn build(cat: &'a Catalogue, source: &str, completed: &HashSet<CourseCode>) -> Self {
		let mut done: Vec<CourseCode> = completed.iter().cloned().collect();
		done.sort();
		Report {
			generated_at: Utc::now(),
			source: source.to_string(),
			summary: &cat.summary,
			order: OrderResponse::from(&cat.order),
			completed: done,
			eligible: cat.eligible(completed).into_iter().collect(),
			requirements: &cat.store,
		}
	}
}

/// Escribe el reporte en JSON indentado.
pub fn write_report<P: AsRef<Path>>(report: &Report<'_>, path: P) -> Result<()> {
	let path = path.as_ref();
	let text = serde_json::to_string_pretty(report)?;
	std::fs::write(path, text).map_err(|e| PrereqError::io(path.display().to_string(), e))
}
