//! # Traverse CLI
//!
//! Terminal front end for the moving-load beam engine. Collects the
//! six scalar inputs, runs the sweep, prints the text report plus JSON,
//! and writes the influence-line curve data to `ild_curves.json` for an
//! external plotter. Rendering itself stays outside the engine.

use std::fs;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use traverse_core::analysis::{analyze, influence_lines, BeamConfig};
use traverse_core::report::render_text;

/// Tolerance for the load-spacing precondition check
const SPACING_TOL: f64 = 1e-9;

/// Output file for the sampled influence-line curves
const CURVES_PATH: &str = "ild_curves.json";

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() -> ExitCode {
    println!("Traverse CLI - Moving-Load Beam Analysis");
    println!("========================================");
    println!();

    let span_m = prompt_f64("Span L (m) [10.0]: ", 10.0);
    let w1_kn = prompt_f64("Load W1 (kN) [5.0]: ", 5.0);
    let w2_kn = prompt_f64("Load W2 (kN) [3.0]: ", 3.0);
    let spacing_m = prompt_f64("Load spacing d (m) [2.0]: ", 2.0);
    let w1_pos_m = prompt_f64("W1 position (m) [0.0]: ", 0.0);
    let w2_pos_m = prompt_f64("W2 position (m) [2.0]: ", 2.0);

    // Engine precondition: the supplied positions must honor the fixed
    // spacing. The engine does not re-check this.
    let actual_spacing = (w2_pos_m - w1_pos_m).abs();
    if (actual_spacing - spacing_m).abs() > SPACING_TOL {
        eprintln!(
            "Input error: d (distance between loads) should equal \
             |W2 position - W1 position| = {}",
            actual_spacing
        );
        return ExitCode::FAILURE;
    }

    let config = BeamConfig::new(span_m, w1_kn, w2_kn, spacing_m);

    let result = match analyze(&config) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            return ExitCode::FAILURE;
        }
    };

    println!();
    print!("{}", render_text(&config, &result));

    if !result.is_undefined() {
        println!();
        println!("JSON Output (for LLM/API use):");
        if let Ok(json) = serde_json::to_string_pretty(&result) {
            println!("{}", json);
        }
    }

    match influence_lines(span_m, w1_pos_m, w2_pos_m) {
        Ok(diagrams) => match serde_json::to_string_pretty(&diagrams) {
            Ok(json) => {
                if let Err(e) = fs::write(CURVES_PATH, json) {
                    eprintln!("Could not write {}: {}", CURVES_PATH, e);
                    return ExitCode::FAILURE;
                }
                println!();
                println!("Influence-line curves written to {}", CURVES_PATH);
            }
            Err(e) => {
                eprintln!("Could not serialize influence lines: {}", e);
                return ExitCode::FAILURE;
            }
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
