use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use gcodeview::{
    compute_bounds, compute_statistics, init_logging, interpret, Bounds, Diagnostic, Statistics,
};

/// Machine-readable report emitted by `--json`
///
/// Distances carry full precision here; the text report rounds them.
#[derive(Serialize)]
struct Report<'a> {
    file: &'a str,
    statistics: Statistics,
    bounds: Bounds,
    diagnostics: &'a [Diagnostic],
}

fn print_usage() {
    eprintln!("Usage: gcodeview [--json] <file.gcode>");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --json           emit a JSON report instead of text");
    eprintln!("  -V, --version    print version and exit");
    eprintln!("  -h, --help       print this help and exit");
}

fn main() -> Result<()> {
    init_logging()?;

    let mut json = false;
    let mut path: Option<String> = None;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "-V" | "--version" => {
                println!("gcodeview {} (built {})", gcodeview::VERSION, gcodeview::BUILD_DATE);
                return Ok(());
            }
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            _ if arg.starts_with('-') => {
                eprintln!("unknown option: {arg}");
                print_usage();
                std::process::exit(2);
            }
            _ => {
                if path.is_some() {
                    eprintln!("expected exactly one input file");
                    print_usage();
                    std::process::exit(2);
                }
                path = Some(arg);
            }
        }
    }

    let Some(path) = path else {
        print_usage();
        std::process::exit(2);
    };

    let text =
        std::fs::read_to_string(&path).with_context(|| format!("failed to read {path}"))?;
    info!("loaded {} ({} bytes)", path, text.len());

    let toolpath = interpret(&text);
    let statistics = compute_statistics(&toolpath);
    let bounds = compute_bounds(&toolpath);

    if json {
        let report = Report {
            file: &path,
            statistics,
            bounds,
            diagnostics: &toolpath.diagnostics,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("File:      {path}");
        println!(
            "Moves:     {} total, {} extrusion, {} travel",
            statistics.total_moves, statistics.extrusion_moves, statistics.travel_moves
        );
        println!("Layers:    {}", statistics.layer_count);
        println!(
            "Distance:  {:.2} total, {:.2} extruded",
            statistics.total_distance, statistics.extrusion_distance
        );
        println!("Bounds:    {bounds}");
        if !toolpath.diagnostics.is_empty() {
            println!("Diagnostics:");
            for diagnostic in &toolpath.diagnostics {
                println!("  {diagnostic}");
            }
        }
    }

    Ok(())
}
