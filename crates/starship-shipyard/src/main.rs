use std::path::PathBuf;
use std::process;

use starship_shipyard::build_starship;

const DEFAULT_OUTPUT: &str = "data/ship.bin";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    let mut output_path = PathBuf::from(DEFAULT_OUTPUT);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--output" | "-o" => {
                i += 1;
                let Some(path) = args.get(i) else {
                    eprintln!("--output requires a path");
                    process::exit(1);
                };
                output_path = PathBuf::from(path);
            }
            "--help" | "-h" => {
                eprintln!("Usage: shipyard [OPTIONS]");
                eprintln!("  --output <path>   Where to write the ship model (default: {DEFAULT_OUTPUT})");
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    let model = build_starship();
    let bounds = model.bounds();
    log::info!(
        "Built starship: {} voxels, bounds {:?} .. {:?}",
        model.len(),
        bounds.min.to_array(),
        bounds.max.to_array()
    );

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = std::fs::create_dir_all(parent) {
            log::error!("Failed to create {}: {e}", parent.display());
            process::exit(1);
        }
    }

    if let Err(e) = starship_persist::save_model(&model, &output_path) {
        log::error!("Error saving starship model: {e}");
        process::exit(1);
    }

    log::info!("Starship model saved to {}", output_path.display());
}
