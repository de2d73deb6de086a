// Estructuras de datos principales

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;

/// Código de curso normalizado (ej: "CHEM 102").
///
/// Sólo se construye a través de `algorithm::normalize`, de modo que dos
/// variantes textuales del mismo código ("CHEM102", "chem  102") siempre
/// comparan iguales. Al deserializar también se canoniza.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CourseCode(String);

impl CourseCode {
    /// Construye la clave canónica de `raw` (ver `canonical_code`).
    pub fn new(raw: &str) -> Self {
        crate::algorithm::normalize::canonical_code(raw)
    }

    /// Envuelve un texto que ya pasó por la normalización.
    pub(crate) fn from_normalized(s: String) -> Self {
        CourseCode(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CourseCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<String> for CourseCode {
    fn from(s: String) -> Self {
        CourseCode::new(&s)
    }
}

impl From<&str> for CourseCode {
    fn from(s: &str) -> Self {
        CourseCode::new(s)
    }
}

impl From<CourseCode> for String {
    fn from(c: CourseCode) -> Self {
        c.0
    }
}

/// Grupo de alternativas: se cumple si al menos uno de sus códigos está
/// aprobado. Nunca está vacío y no contiene duplicados.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RequirementGroup(Vec<CourseCode>);

impl RequirementGroup {
    /// Construye el grupo eliminando duplicados (se conserva el primer orden
    /// de aparición). Devuelve `None` si no queda ningún código.
    pub fn new(codes: Vec<CourseCode>) -> Option<Self> {
        let mut seen: HashSet<CourseCode> = HashSet::new();
        let mut out: Vec<CourseCode> = Vec::with_capacity(codes.len());
        for c in codes {
            if seen.insert(c.clone()) {
                out.push(c);
            }
        }
        if out.is_empty() { None } else { Some(RequirementGroup(out)) }
    }

    pub fn alternatives(&self) -> &[CourseCode] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &CourseCode> + '_ {
        self.0.iter()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.0.iter().any(|c| c.as_str() == code)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// AND de grupos (OR dentro de cada grupo). Vacío = sin prerequisitos.
pub type RequirementSet = Vec<RequirementGroup>;

/// Cursos aprobados por un estudiante.
pub type CompletedSet = HashSet<CourseCode>;
