use crate::models::{CourseCode, RequirementSet};
use serde::ser::{Serialize, Serializer};
use std::collections::HashMap;

/// Requisitos por curso, acumulados en orden de primera aparición.
///
/// Registrar de nuevo un curso concatena sus grupos (nunca reemplaza): el
/// catálogo puede repetir o partir la declaración de un mismo código y la
/// unión sigue siendo un AND sobre todos los grupos.
#[derive(Debug, Clone, Default)]
pub struct RequirementStore {
    entries: Vec<(CourseCode, RequirementSet)>,
    index: HashMap<CourseCode, usize>,
}

impl RequirementStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold explícito sobre registros ya parseados.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (CourseCode, RequirementSet)>,
    {
        records.into_iter().fold(Self::new(), |mut store, (course, groups)| {
            store.record(course, groups);
            store
        })
    }

    /// Agrega los grupos de `course`; si ya existía, se anexan al final.
    pub fn record(&mut self, course: CourseCode, groups: RequirementSet) {
        match self.index.get(&course) {
            Some(&pos) => combine(&mut self.entries[pos].1, groups),
            None => {
                self.index.insert(course.clone(), self.entries.len());
                self.entries.push((course, groups));
            }
        }
    }

    /// Une dos stores (p. ej. particiones parseadas por separado) con la
    /// misma semántica de `record`. Los cursos de `self` conservan su orden.
    pub fn merge(mut self, other: RequirementStore) -> Self {
        for (course, groups) in other.entries {
            self.record(course, groups);
        }
        self
    }

    pub fn get(&self, course: &str) -> Option<&RequirementSet> {
        self.index.get(course).map(|&pos| &self.entries[pos].1)
    }

    pub fn contains(&self, course: &str) -> bool {
        self.index.contains_key(course)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CourseCode, &RequirementSet)> + '_ {
        self.entries.iter().map(|(c, g)| (c, g))
    }

    pub fn courses(&self) -> impl Iterator<Item = &CourseCode> + '_ {
        self.entries.iter().map(|(c, _)| c)
    }

    /// Cantidad de cursos con al menos un grupo de requisitos parseable.
    pub fn courses_with_requirements(&self) -> usize {
        self.entries.iter().filter(|(_, g)| !g.is_empty()).count()
    }
}

/// Función de combinación del fold: concatenar.
fn combine(existing: &mut RequirementSet, incoming: RequirementSet) {
    existing.extend(incoming);
}

impl Serialize for RequirementStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(c, g)| (c, g)))
    }
}
