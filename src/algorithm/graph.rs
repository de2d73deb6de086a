use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

use crate::algorithm::store::RequirementStore;
use crate::models::CourseCode;

/// Grafo de dependencias: arista prerequisito -> curso dependiente.
///
/// Todo código que aparece como clave del store o dentro de algún grupo es
/// un nodo. Los nodos se crean en orden de primera aparición (cada curso del
/// store y luego sus prerequisitos en el orden de los grupos); ese orden es
/// el desempate que usa `topo::topological_order`.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    graph: DiGraph<CourseCode, ()>,
    node_map: HashMap<CourseCode, NodeIndex>,
}

impl DependencyGraph {
    pub fn build(store: &RequirementStore) -> Self {
        let mut dg = DependencyGraph::default();
        for (course, groups) in store.iter() {
            let to = dg.ensure_node(course);
            for group in groups {
                for prereq in group.iter() {
                    let from = dg.ensure_node(prereq);
                    // misma arista dos veces = no-op
                    if dg.graph.find_edge(from, to).is_none() {
                        dg.graph.add_edge(from, to, ());
                    }
                }
            }
        }
        dg
    }

    fn ensure_node(&mut self, code: &CourseCode) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(code) {
            return idx;
        }
        let idx = self.graph.add_node(code.clone());
        self.node_map.insert(code.clone(), idx);
        idx
    }

    pub(crate) fn inner(&self) -> &DiGraph<CourseCode, ()> {
        &self.graph
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.node_map.contains_key(code)
    }

    /// Nodos en orden de creación.
    pub fn nodes(&self) -> impl Iterator<Item = &CourseCode> + '_ {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    /// Número de aristas entrantes distintas; `None` si el código no es nodo.
    pub fn indegree(&self, code: &str) -> Option<usize> {
        let idx = *self.node_map.get(code)?;
        Some(self.graph.neighbors_directed(idx, Direction::Incoming).count())
    }

    /// Cursos que dependen directamente de `code`.
    pub fn dependents(&self, code: &str) -> Vec<CourseCode> {
        self.neighbors(code, Direction::Outgoing)
    }

    /// Prerequisitos directos de `code`.
    pub fn prerequisites(&self, code: &str) -> Vec<CourseCode> {
        self.neighbors(code, Direction::Incoming)
    }

    fn neighbors(&self, code: &str, dir: Direction) -> Vec<CourseCode> {
        let Some(&idx) = self.node_map.get(code) else {
            return Vec::new();
        };
        sorted_neighbors(&self.graph, idx, dir)
            .into_iter()
            .map(|n| self.graph[n].clone())
            .collect()
    }
}

/// Vecinos ordenados por orden de creación (petgraph los entrega en orden
/// inverso de inserción de aristas).
pub(crate) fn sorted_neighbors(
    graph: &DiGraph<CourseCode, ()>,
    idx: NodeIndex,
    dir: Direction,
) -> Vec<NodeIndex> {
    let mut out: Vec<NodeIndex> = graph.neighbors_directed(idx, dir).collect();
    out.sort_by_key(|n| n.index());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::parser::parse_requirements;

    fn store_from(lines: &[(&str, &str)]) -> RequirementStore {
        RequirementStore::from_records(
            lines
                .iter()
                .map(|(c, t)| (CourseCode::new(c), parse_requirements(t))),
        )
    }

    #[test]
    fn test_nodos_huerfanos_incluidos() {
        let store = store_from(&[("BIOCH 310", "BIOCH 200 and CHEM 102 or SCI 100")]);
        let g = DependencyGraph::build(&store);
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.indegree("BIOCH 310"), Some(3));
        assert_eq!(g.indegree("SCI 100"), Some(0));
        assert_eq!(g.indegree("NOPE 100"), None);
        let nodes: Vec<&str> = g.nodes().map(|c| c.as_str()).collect();
        assert_eq!(nodes, vec!["BIOCH 310", "BIOCH 200", "CHEM 102", "SCI 100"]);
    }

    #[test]
    fn test_aristas_deduplicadas() {
        let store = store_from(&[
            ("CHEM 200", "CHEM 100"),
            ("CHEM 200", "CHEM 100 or CHEM 101"),
        ]);
        let g = DependencyGraph::build(&store);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.indegree("CHEM 200"), Some(2));
        let deps: Vec<String> = g.dependents("CHEM 100").iter().map(|c| c.to_string()).collect();
        assert_eq!(deps, vec!["CHEM 200"]);
        let pre: Vec<String> = g.prerequisites("CHEM 200").iter().map(|c| c.to_string()).collect();
        assert_eq!(pre, vec!["CHEM 100", "CHEM 101"]);
    }
}
