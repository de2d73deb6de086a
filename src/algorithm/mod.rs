// Módulo de alto nivel del motor de prerequisitos.
// Flujo: texto -> grupos (parser) -> store -> grafo -> (orden topológico | elegibilidad)
pub mod normalize;
pub mod parser;
pub mod store;
pub mod graph;
pub mod topo;
pub mod eligibility;

// Reexportar la API pública que usan `catalogue`, el server y los tests
pub use normalize::{canonical_code, normalize};
pub use parser::parse_requirements;
pub use store::RequirementStore;
pub use graph::DependencyGraph;
pub use topo::{topological_order, TopoOrder};
pub use eligibility::{course_is_eligible, eligible_courses, is_eligible, is_satisfied, unsatisfied_groups};

use tracing::info;

/// Construye el grafo y su orden topológico a partir de un store ya
/// completo. El store no se modifica.
pub fn run_pipeline(store: &RequirementStore) -> (DependencyGraph, TopoOrder) {
	let graph = DependencyGraph::build(store);
	info!(nodes = graph.node_count(), edges = graph.edge_count(), "grafo de dependencias construido");
	let order = topological_order(&graph);
	(graph, order)
}
