// --- Motor de prerequisitos - Archivo principal ---

use anyhow::{Context, Result};
use clap::Parser;
use std::collections::HashSet;
use tracing::{info, warn};

use prereqshift::api_json::{write_report, Report};
use prereqshift::catalogue::resolve_catalogue_path;
use prereqshift::config::{load_env, split_completed, Cli, Command};
use prereqshift::models::CourseCode;
use prereqshift::{run_server, Catalogue};

#[tokio::main]
async fn main() -> Result<()> {
    load_env();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let path = resolve_catalogue_path(&cli.file);
    let catalogue = Catalogue::load(&path)
        .with_context(|| format!("no se pudo cargar el catálogo {}", path.display()))?;

    match cli.command {
        Some(Command::Serve { bind }) => {
            println!("=== Motor de prerequisitos (API) ===");
            println!("Iniciando servidor en http://{}", bind);
            run_server(&bind, catalogue).await?;
        }
        None => print_report(&cli, &catalogue, &path.display().to_string())?,
    }
    Ok(())
}

fn print_report(cli: &Cli, catalogue: &Catalogue, source: &str) -> Result<()> {
    let summary = &catalogue.summary;
    println!(
        "Parsed {} courses with explicit prereq patterns ({} courses total, file: {})",
        summary.courses_with_requirements, summary.courses, source
    );

    let order = &catalogue.order;
    if order.has_cycle() {
        println!(
            "Cycle detected in prereq graph (cannot fully topologically sort). Partial order printed; {} courses unordered.",
            order.remainder.len()
        );
    } else {
        println!("Topological ordering computed (one possible valid ordering).");
    }
    let sample: Vec<&str> = order.order.iter().take(cli.sample).map(|c| c.as_str()).collect();
    println!("Sample ordering (first {}): {:?}", cli.sample, sample);

    let completed: HashSet<CourseCode> = split_completed(&cli.completed).into_iter().collect();
    for u in catalogue.unknown_codes(&completed) {
        match &u.suggestion {
            Some(s) => warn!("'{}' no aparece en el catálogo (¿quisiste decir '{}'?)", u.code, s),
            None => warn!("'{}' no aparece en el catálogo", u.code),
        }
    }
    let eligible = catalogue.eligible(&completed);
    let mut done: Vec<&str> = completed.iter().map(|c| c.as_str()).collect();
    done.sort();
    let elig_sample: Vec<&str> = eligible.iter().take(cli.sample).map(|c| c.as_str()).collect();
    println!(
        "Based on completed={:?}, you are eligible for {} courses. Sample: {:?}",
        done,
        eligible.len(),
        elig_sample
    );

    if let Some(out) = &cli.output {
        let report = Report::build(catalogue, source, &completed);
        write_report(&report, out).context("no se pudo escribir el reporte")?;
        info!(file = %out.display(), "reporte JSON escrito");
    }
    Ok(())
}
