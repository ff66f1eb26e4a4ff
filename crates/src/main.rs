// Entry point: program main
// Handles --help and the one-shot listing flags, otherwise runs the TUI

use sash::config::{self, Config, DEFAULT_BASE_URL, Mode};
use sash::logging;
use sash::source::{HttpRecordSource, RecordSource, StaticRecordSource};
use std::env;
use std::process;
use std::sync::Arc;

fn print_help() {
    println!("sash - Sección Amarilla de Super Heroes directory");
    println!();
    println!("Usage:");
    println!("  sash [options]");
    println!();
    println!("Options:");
    println!("  --list              Print every superhero and exit.");
    println!("  --power <name>      Print the superheroes with the given power and exit.");
    println!("  --base-url <url>    Directory backend to query (default {DEFAULT_BASE_URL}).");
    println!("  --demo              Use the built-in placeholder roster instead of the backend.");
    println!("  --log-file <path>   Where the interactive screen writes diagnostics.");
    println!("  --help              Show this help message.");
    println!();
    println!("Keys:");
    println!("  type to search, Tab opens the filter menu, ↑/↓ move between cards,");
    println!("  Enter hires the selected superhero, Esc quits.");
    println!();
    println!("Diagnostics honour RUST_LOG (default: info).");
}

fn build_source(cfg: &Config) -> Arc<dyn RecordSource> {
    if cfg.demo {
        Arc::new(StaticRecordSource::demo())
    } else {
        Arc::new(HttpRecordSource::new(cfg.base_url.clone()))
    }
}

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let cfg = match config::parse_args(&args) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Try 'sash --help' for more information.");
            process::exit(2);
        }
    };

    let logged = match &cfg.mode {
        Mode::Help => {
            print_help();
            return;
        }
        Mode::Interactive => logging::init_file(&cfg.log_path()),
        Mode::List | Mode::Power(_) => logging::init_stderr(),
    };
    if let Err(e) = logged {
        eprintln!("{e:#}");
        process::exit(2);
    }

    let source = build_source(&cfg);
    tracing::debug!(base_url = %cfg.base_url, demo = cfg.demo, "starting");

    let result = match &cfg.mode {
        Mode::List => sash::ui::print_records(source.as_ref(), None).await.map(Some),
        Mode::Power(power) => sash::ui::print_records(source.as_ref(), Some(power.as_str()))
            .await
            .map(Some),
        _ => sash::ui::run(source).await.map(|_| None),
    };
    match result {
        Ok(Some(out)) => {
            if !out.is_empty() {
                println!("{out}");
            }
        }
        Ok(None) => {}
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "sash failed");
            eprintln!("{e:#}");
            process::exit(2);
        }
    }
}
