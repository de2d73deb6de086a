// Biblioteca raíz del crate `prereqshift`.
// Expone el motor (normalizador, parser, store, grafo, orden topológico y
// elegibilidad), la carga del catálogo y la API HTTP.
pub mod algorithm;
pub mod api_json;
pub mod catalogue;
pub mod config;
pub mod error;
pub mod models;
pub mod server;
pub mod server_handlers;

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
pub use catalogue::Catalogue;
pub use error::PrereqError;
