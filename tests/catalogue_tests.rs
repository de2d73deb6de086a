use prereqshift::api_json::Report;
use prereqshift::catalogue::{load_and_parse, Catalogue};
use prereqshift::models::{CompletedSet, CourseCode};
use prereqshift::PrereqError;
use std::io::Write;

const CATALOGUE: &str = "\
BIOCH 310 : Prerequisites: BIOCH 200, CHEM 102 (or SCI 100) and CHEM 263.
CHEM 263 : CHEM 101
BIOCH 200 : consent of instructor
esta línea no tiene separador
CHEM 263 : MATH 100 or MATH 114
";

fn write_catalogue(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("crear archivo temporal");
    file.write_all(contents.as_bytes()).expect("escribir catálogo");
    file
}

#[test]
fn test_load_desde_archivo() {
    let file = write_catalogue(CATALOGUE);
    let (store, summary) = load_and_parse(file.path()).expect("debe leer el catálogo");

    assert_eq!(summary.lines_read, 5);
    assert_eq!(summary.lines_skipped, 1);
    assert_eq!(summary.courses, 3);
    assert_eq!(summary.courses_with_requirements, 2);

    // dos líneas del mismo curso se concatenan
    let chem263 = store.get("CHEM 263").expect("CHEM 263 registrado");
    assert_eq!(chem263.len(), 2);
    eprintln!("✅ resumen: {:?}", summary);
}

#[test]
fn test_archivo_inexistente_es_error_io() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("no_existe.txt");
    match Catalogue::load(&missing) {
        Err(PrereqError::Io { path, .. }) => assert!(path.ends_with("no_existe.txt")),
        Err(other) => panic!("esperaba error IO, llegó {:?}", other),
        Ok(_) => panic!("no debería cargar un archivo inexistente"),
    }
}

#[test]
fn test_catalogo_completo_y_reporte() {
    let file = write_catalogue(CATALOGUE);
    let cat = Catalogue::load(file.path()).expect("catálogo válido");
    assert!(!cat.order.has_cycle());

    let done: CompletedSet = ["CHEM 101", "MATH 100", "BIOCH 200", "sci  100"]
        .iter()
        .map(|c| CourseCode::new(c))
        .collect();
    let elig: Vec<String> = cat.eligible(&done).iter().map(|c| c.to_string()).collect();
    assert_eq!(elig, vec!["CHEM 263"]);

    let report = Report::build(&cat, "prereq.txt", &done);
    let value = serde_json::to_value(&report).expect("reporte serializable");
    assert_eq!(value["source"], "prereq.txt");
    assert_eq!(value["summary"]["courses"], 3);
    assert_eq!(value["order"]["has_cycle"], false);
    assert_eq!(value["eligible"], serde_json::json!(["CHEM 263"]));
    // el store se serializa como mapa en orden de aparición
    assert_eq!(value["requirements"]["BIOCH 310"][1], serde_json::json!(["CHEM 102", "SCI 100"]));
    assert!(value["generated_at"].is_string());
}

#[test]
fn test_unknown_codes_en_catalogo() {
    let cat = Catalogue::from_text(CATALOGUE);
    let done: CompletedSet = [CourseCode::new("CHEM 263"), CourseCode::new("BIOCH 201")]
        .into_iter()
        .collect();
    let unknown = cat.unknown_codes(&done);
    assert_eq!(unknown.len(), 1);
    assert_eq!(unknown[0].code.as_str(), "BIOCH 201");
    assert!(unknown[0].suggestion.is_some());
}

#[test]
fn test_write_report_a_archivo() {
    let cat = Catalogue::from_text(CATALOGUE);
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("reporte.json");
    let report = Report::build(&cat, "memoria", &CompletedSet::new());
    prereqshift::api_json::write_report(&report, &out).expect("debe escribir el reporte");

    let text = std::fs::read_to_string(&out).expect("leer reporte");
    let value: serde_json::Value = serde_json::from_str(&text).expect("JSON válido");
    assert_eq!(value["summary"]["lines_skipped"], 1);
}

#[test]
fn test_codigos_pegados_y_separados_son_el_mismo_nodo() {
    let cat = Catalogue::from_text("CHEM102 : CHEM101\nCHEM263 : CHEM102\nBIOCH 200 : chem 263 or CHEM 263\n");
    let nodes: Vec<&str> = cat.graph.nodes().map(|c| c.as_str()).collect();
    eprintln!("🔗 nodos: {:?}", nodes);
    assert_eq!(nodes, vec!["CHEM 102", "CHEM 101", "CHEM 263", "BIOCH 200"]);
    assert_eq!(cat.graph.node_count(), 4);
    assert_eq!(cat.graph.indegree("CHEM 263"), Some(1));

    // el aprobado se canoniza igual que claves y referencias
    let done: CompletedSet = [CourseCode::new("CHEM102")].into_iter().collect();
    let elig: Vec<String> = cat.eligible(&done).iter().map(|c| c.to_string()).collect();
    assert_eq!(elig, vec!["CHEM 263"]);
    assert!(cat.unknown_codes(&done).is_empty());

    let done = prereqshift::config::split_completed("chem 102, CHEM263");
    let done: CompletedSet = done.into_iter().collect();
    let elig: Vec<String> = cat.eligible(&done).iter().map(|c| c.to_string()).collect();
    assert_eq!(elig, vec!["BIOCH 200"]);
}
