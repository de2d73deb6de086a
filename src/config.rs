//! Configuración del binario: flags de línea de comandos con respaldo en
//! variables de entorno (también leídas desde `.env`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::models::CourseCode;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

#[derive(Parser, Debug)]
#[command(name = "prereqshift")]
#[command(about = "Motor de prerequisitos: orden topológico y cursos elegibles")]
#[command(version)]
pub struct Cli {
    /// Archivo de prerequisitos ("CODIGO : texto" por línea)
    #[arg(short, long, env = "PREREQ_FILE", default_value = "prereq.txt", global = true)]
    pub file: String,

    /// Cursos aprobados separados por comas, ej: "CHEM 102,BIOCH 200"
    #[arg(short, long, default_value = "")]
    pub completed: String,

    /// Cuántos elementos mostrar de cada lista en el reporte
    #[arg(long, env = "PREREQ_SAMPLE", default_value_t = 30)]
    pub sample: usize,

    /// Escribe además el reporte completo en JSON
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Levanta la API HTTP de consultas
    Serve {
        #[arg(short, long, env = "PREREQ_BIND", default_value = DEFAULT_BIND)]
        bind: String,
    },
}

/// Carga `.env` si existe; las variables ya definidas no se pisan.
pub fn load_env() {
    let _ = dotenv::dotenv();
}

/// Convierte "a,b,c" en códigos normalizados, ignorando entradas vacías.
pub fn split_completed(list: &str) -> Vec<CourseCode> {
    list.split(',')
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(CourseCode::new)
        .collect()
}
