//! Módulo `catalogue`: lectura del archivo de prerequisitos y el catálogo ya
//! procesado (store + grafo + orden) que consultan el CLI y el server.
//!
//! Submódulos:
//! - `io`: parseo de líneas "CODIGO : texto" y carga desde archivo

/// Lectura y parseo de líneas: `load_and_parse`, `parse_line`
pub mod io;

pub use io::{load_and_parse, load_from_reader, load_from_str, parse_line, ParseSummary};

use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::algorithm::{eligible_courses, run_pipeline, DependencyGraph, RequirementStore, TopoOrder};
use crate::error::Result;
use crate::models::CourseCode;

/// Similitud mínima para sugerir un código conocido.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Resuelve el archivo de prerequisitos: si `name` existe se usa tal cual;
/// si no, se busca dentro de `PREREQ_DATA_DIR` (cuando está definida).
pub fn resolve_catalogue_path(name: &str) -> PathBuf {
    let direct = PathBuf::from(name);
    if direct.exists() {
        return direct;
    }
    if let Ok(dir) = std::env::var("PREREQ_DATA_DIR") {
        let candidate = Path::new(&dir).join(name);
        if candidate.exists() {
            return candidate;
        }
    }
    direct
}

/// Código aprobado que no aparece en el grafo, con la sugerencia más
/// parecida si la hay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnknownCode {
    pub code: CourseCode,
    pub suggestion: Option<CourseCode>,
}

/// Resultado inmutable del pipeline completo.
#[derive(Debug, Clone)]
pub struct Catalogue {
    pub store: RequirementStore,
    pub graph: DependencyGraph,
    pub order: TopoOrder,
    pub summary: ParseSummary,
}

impl Catalogue {
    pub fn from_store(store: RequirementStore, summary: ParseSummary) -> Self {
        let (graph, order) = run_pipeline(&store);
        Catalogue { store, graph, order, summary }
    }

    pub fn from_text(contents: &str) -> Self {
        let (store, summary) = load_from_str(contents);
        Self::from_store(store, summary)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let (store, summary) = load_and_parse(path)?;
        Ok(Self::from_store(store, summary))
    }

    pub fn eligible(&self, completed: &HashSet<CourseCode>) -> BTreeSet<CourseCode> {
        eligible_courses(&self.store, completed)
    }

    /// Códigos aprobados que el grafo no conoce (probables errores de
    /// tipeo). No afectan la elegibilidad, sólo se informan.
    pub fn unknown_codes(&self, completed: &HashSet<CourseCode>) -> Vec<UnknownCode> {
        let mut unknown: Vec<UnknownCode> = completed
            .iter()
            .filter(|c| !self.graph.contains(c.as_str()))
            .map(|c| UnknownCode {
                code: c.clone(),
                suggestion: self.closest_code(c.as_str()),
            })
            .collect();
        unknown.sort_by(|a, b| a.code.cmp(&b.code));
        for u in &unknown {
            warn!(code = %u.code, suggestion = ?u.suggestion.as_ref().map(|s| s.as_str()), "código aprobado desconocido");
        }
        unknown
    }

    fn closest_code(&self, code: &str) -> Option<CourseCode> {
        let mut best: Option<(f64, &CourseCode)> = None;
        for candidate in self.graph.nodes() {
            let score = strsim::normalized_levenshtein(code, candidate.as_str());
            if score >= SUGGESTION_THRESHOLD && best.is_none_or(|(s, _)| score > s) {
                best = Some((score, candidate));
            }
        }
        best.map(|(_, c)| c.clone())
    }
}
