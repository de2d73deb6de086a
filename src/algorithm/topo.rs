use petgraph::Direction;
use serde::Serialize;
use std::collections::VecDeque;
use tracing::warn;

use crate::algorithm::graph::{sorted_neighbors, DependencyGraph};
use crate::models::CourseCode;

/// Resultado del orden topológico. Con ciclos, `order` es el prefijo que sí
/// se pudo ordenar y `remainder` contiene el resto (superconjunto de los
/// nodos en ciclo).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TopoOrder {
    pub order: Vec<CourseCode>,
    pub remainder: Vec<CourseCode>,
}

impl TopoOrder {
    pub fn has_cycle(&self) -> bool {
        !self.remainder.is_empty()
    }
}

/// Algoritmo de Kahn.
///
/// Desempate: la frontera es una cola FIFO sembrada con los nodos de
/// indegree 0 en orden de creación; los dependientes liberados por un nodo
/// se encolan también en orden de creación.
pub fn topological_order(graph: &DependencyGraph) -> TopoOrder {
    let g = graph.inner();

    let mut remaining: Vec<usize> = g
        .node_indices()
        .map(|n| g.neighbors_directed(n, Direction::Incoming).count())
        .collect();
    let mut queue: VecDeque<_> = g
        .node_indices()
        .filter(|n| remaining[n.index()] == 0)
        .collect();

    let mut placed = vec![false; g.node_count()];
    let mut order: Vec<CourseCode> = Vec::with_capacity(g.node_count());

    while let Some(node) = queue.pop_front() {
        placed[node.index()] = true;
        order.push(g[node].clone());
        for dep in sorted_neighbors(g, node, Direction::Outgoing) {
            remaining[dep.index()] -= 1;
            if remaining[dep.index()] == 0 {
                queue.push_back(dep);
            }
        }
    }

    let remainder: Vec<CourseCode> = g
        .node_indices()
        .filter(|n| !placed[n.index()])
        .map(|n| g[n].clone())
        .collect();

    if !remainder.is_empty() {
        warn!(
            ordered = order.len(),
            unordered = remainder.len(),
            "ciclo en el grafo de prerequisitos: orden parcial"
        );
    }

    TopoOrder { order, remainder }
}
