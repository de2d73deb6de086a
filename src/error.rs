//! Errores del crate.
//!
//! El pipeline sobre texto en memoria no falla nunca; sólo la frontera
//! (archivos, JSON de entrada/salida) produce errores.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrereqError {
    /// No se pudo leer el catálogo o escribir el reporte
    #[error("IO error en '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON inválido: {0}")]
    Json(#[from] serde_json::Error),
}

impl PrereqError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        PrereqError::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, PrereqError>;
