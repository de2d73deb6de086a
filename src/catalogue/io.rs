use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

use crate::algorithm::parser::parse_requirements;
use crate::algorithm::store::RequirementStore;
use crate::error::{PrereqError, Result};
use crate::models::{CourseCode, RequirementSet};

/// Etiquetas que el catálogo antepone al texto de requisitos.
const LABELS: [&str; 2] = ["prerequisites:", "prerequisite:"];

/// Resumen de una lectura de catálogo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseSummary {
    pub lines_read: usize,
    pub lines_skipped: usize,
    pub courses: usize,
    /// Cursos con al menos un requisito explícito parseable
    pub courses_with_requirements: usize,
}

/// Separa "CODIGO : texto" en el primer ':'. `None` si no hay separador.
pub fn split_line(line: &str) -> Option<(&str, &str)> {
    let (left, right) = line.split_once(':')?;
    Some((left.trim(), right.trim()))
}

/// Quita una etiqueta "Prerequisite(s):" inicial (sin distinguir mayúsculas).
pub fn strip_label(text: &str) -> &str {
    let trimmed = text.trim_start();
    for label in LABELS {
        if let Some(head) = trimmed.get(..label.len()) {
            if head.eq_ignore_ascii_case(label) {
                return trimmed[label.len()..].trim_start();
            }
        }
    }
    trimmed
}

/// Parsea una línea del archivo. Líneas vacías, sin ':' o con código o texto
/// vacío se ignoran (`None`), no son errores.
pub fn parse_line(line: &str) -> Option<(CourseCode, RequirementSet)> {
    let (left, right) = split_line(line.trim())?;
    let text = strip_label(right);
    if left.is_empty() || text.is_empty() {
        return None;
    }
    Some((CourseCode::new(left), parse_requirements(text)))
}

/// Acumula líneas en un store y lleva la cuenta del resumen.
#[derive(Debug, Default)]
struct LineAccumulator {
    store: RequirementStore,
    lines_read: usize,
    lines_skipped: usize,
}

impl LineAccumulator {
    fn push(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        self.lines_read += 1;
        match parse_line(line) {
            Some((course, groups)) => self.store.record(course, groups),
            None => {
                self.lines_skipped += 1;
                debug!(line, "línea sin formato 'CODIGO : texto', se ignora");
            }
        }
    }

    fn finish(self) -> (RequirementStore, ParseSummary) {
        let summary = ParseSummary {
            lines_read: self.lines_read,
            lines_skipped: self.lines_skipped,
            courses: self.store.len(),
            courses_with_requirements: self.store.courses_with_requirements(),
        };
        (self.store, summary)
    }
}

/// Parsea un catálogo completo ya en memoria.
pub fn load_from_str(contents: &str) -> (RequirementStore, ParseSummary) {
    let mut acc = LineAccumulator::default();
    for line in contents.lines() {
        acc.push(line);
    }
    acc.finish()
}

/// Igual que `load_from_str` pero leyendo de un `BufRead`. `origin` sólo se
/// usa en los mensajes de error.
pub fn load_from_reader<R: BufRead>(reader: R, origin: &str) -> Result<(RequirementStore, ParseSummary)> {
    let mut acc = LineAccumulator::default();
    for line in reader.lines() {
        let line = line.map_err(|e| PrereqError::io(origin, e))?;
        acc.push(&line);
    }
    Ok(acc.finish())
}

/// Lee y parsea el archivo de prerequisitos.
pub fn load_and_parse<P: AsRef<Path>>(path: P) -> Result<(RequirementStore, ParseSummary)> {
    let path = path.as_ref();
    let origin = path.display().to_string();
    let file = File::open(path).map_err(|e| PrereqError::io(origin.clone(), e))?;
    let (store, summary) = load_from_reader(BufReader::new(file), &origin)?;
    info!(
        file = %origin,
        courses = summary.courses,
        with_requirements = summary.courses_with_requirements,
        skipped = summary.lines_skipped,
        "catálogo parseado"
    );
    Ok((store, summary))
}
