use prereqshift::algorithm::{parse_requirements, run_pipeline, DependencyGraph, RequirementStore};
use prereqshift::models::CourseCode;
use std::collections::HashMap;

fn store_from(lines: &[(&str, &str)]) -> RequirementStore {
    RequirementStore::from_records(
        lines
            .iter()
            .map(|(course, text)| (CourseCode::new(course), parse_requirements(text))),
    )
}

fn position(order: &[CourseCode]) -> HashMap<&str, usize> {
    order.iter().enumerate().map(|(i, c)| (c.as_str(), i)).collect()
}

#[test]
fn test_orden_respeta_todas_las_aristas() {
    let store = store_from(&[
        ("BIOCH 310", "BIOCH 200, CHEM 102 (or SCI 100) and CHEM 263"),
        ("CHEM 263", "CHEM 102 or CHEM 105"),
        ("BIOCH 200", "CHEM 102"),
        ("CHEM 102", "CHEM 101"),
    ]);
    let (graph, order) = run_pipeline(&store);
    assert!(!order.has_cycle());
    assert_eq!(order.order.len(), graph.node_count());

    let pos = position(&order.order);
    for course in graph.nodes() {
        for dep in graph.dependents(course.as_str()) {
            assert!(
                pos[course.as_str()] < pos[dep.as_str()],
                "❌ {} debería ir antes que {}",
                course,
                dep
            );
        }
    }
    eprintln!("✅ orden: {:?}", order.order.iter().map(|c| c.as_str()).collect::<Vec<_>>());
}

#[test]
fn test_codigos_sin_linea_propia_son_nodos() {
    let store = store_from(&[("BIOCH 310", "BIOCH 200 and CHEM 263")]);
    let graph = DependencyGraph::build(&store);
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.indegree("BIOCH 200"), Some(0));
    assert_eq!(graph.indegree("BIOCH 310"), Some(2));
    assert_eq!(graph.indegree("MATH 100"), None);
}

#[test]
fn test_aristas_duplicadas_no_se_cuentan_dos_veces() {
    // mismo prerequisito en dos grupos y en dos líneas del mismo curso
    let store = store_from(&[
        ("BB 200", "AA 100 or CC 100 and AA 100"),
        ("BB 200", "AA 100"),
    ]);
    let graph = DependencyGraph::build(&store);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.indegree("BB 200"), Some(2));
}

#[test]
fn test_ciclo_se_detecta_y_el_resto_se_ordena() {
    let store = store_from(&[
        ("AA 100", "BB 100"),
        ("BB 100", "AA 100"),
        ("CC 200", "DD 100"),
    ]);
    let (_, order) = run_pipeline(&store);
    assert!(order.has_cycle());

    let listed: Vec<&str> = order.order.iter().map(|c| c.as_str()).collect();
    assert_eq!(listed, vec!["DD 100", "CC 200"]);

    let mut remainder: Vec<&str> = order.remainder.iter().map(|c| c.as_str()).collect();
    remainder.sort();
    assert_eq!(remainder, vec!["AA 100", "BB 100"]);
}

#[test]
fn test_store_vacio() {
    let (graph, order) = run_pipeline(&RequirementStore::new());
    assert_eq!(graph.node_count(), 0);
    assert!(order.order.is_empty());
    assert!(!order.has_cycle());
}
