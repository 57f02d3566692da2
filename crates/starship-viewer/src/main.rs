use std::process;

use starship_viewer::{parse_args, resolve_config, run, Command, DEFAULT_CONFIG_PATH};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Run(cli)) => cli,
        Ok(Command::Help) => {
            eprintln!("Usage: viewer [OPTIONS]");
            eprintln!("  --config <path>     RON config file (default: {DEFAULT_CONFIG_PATH}, optional)");
            eprintln!("  --model <path>      Voxel model to load");
            eprintln!("  --frames <n>        Stop after n frames (0 runs until a scripted Quit)");
            eprintln!("  --snapshot <path>   Write the last frame as PNG");
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    let result = resolve_config(&cli).and_then(|config| run(&config));
    if let Err(e) = result {
        log::error!("{e}");
        process::exit(1);
    }
}
