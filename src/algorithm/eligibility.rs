use std::collections::{BTreeSet, HashSet};

use crate::algorithm::store::RequirementStore;
use crate::models::{CourseCode, RequirementGroup, RequirementSet};

/// Un grupo se cumple si alguna alternativa está aprobada.
pub fn is_satisfied(group: &RequirementGroup, completed: &HashSet<CourseCode>) -> bool {
    group.iter().any(|alt| completed.contains(alt))
}

/// AND sobre grupos. Sin grupos = elegible.
pub fn is_eligible(requirements: &RequirementSet, completed: &HashSet<CourseCode>) -> bool {
    requirements.iter().all(|g| is_satisfied(g, completed))
}

/// Elegibilidad de un curso del store. Un código sin entrada no tiene
/// requisitos registrados y por lo tanto es elegible.
pub fn course_is_eligible(
    store: &RequirementStore,
    course: &str,
    completed: &HashSet<CourseCode>,
) -> bool {
    store
        .get(course)
        .is_none_or(|groups| is_eligible(groups, completed))
}

/// Grupos que aún faltan por cumplir.
pub fn unsatisfied_groups<'a>(
    requirements: &'a RequirementSet,
    completed: &HashSet<CourseCode>,
) -> Vec<&'a RequirementGroup> {
    requirements
        .iter()
        .filter(|g| !is_satisfied(g, completed))
        .collect()
}

/// Cursos del store que el estudiante puede tomar: no aprobados y con todos
/// sus grupos cumplidos. Los ya aprobados se excluyen siempre.
pub fn eligible_courses(
    store: &RequirementStore,
    completed: &HashSet<CourseCode>,
) -> BTreeSet<CourseCode> {
    store
        .iter()
        .filter(|(course, _)| !completed.contains(*course))
        .filter(|(_, groups)| is_eligible(groups, completed))
        .map(|(course, _)| course.clone())
        .collect()
}
