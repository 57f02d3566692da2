pub mod app;
pub mod config;
pub mod error;
pub mod frame_clock;
pub mod input;

use std::path::PathBuf;

pub use app::{Application, RunSummary, StopReason};
pub use config::ViewerConfig;
pub use error::ViewerError;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "viewer.ron";

/// Command-line overrides for the viewer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub model: Option<PathBuf>,
    pub frames: Option<u64>,
    pub snapshot: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(CliArgs),
    Help,
}

/// Parse arguments, not including the program name.
pub fn parse_args<I>(args: I) -> Result<Command, ViewerError>
where
    I: IntoIterator<Item = String>,
{
    let mut cli = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .ok_or_else(|| ViewerError::BadArgument(format!("{flag} requires a value")))
        };
        match arg.as_str() {
            "--config" => cli.config = Some(PathBuf::from(value("--config")?)),
            "--model" => cli.model = Some(PathBuf::from(value("--model")?)),
            "--frames" => {
                let raw = value("--frames")?;
                let frames = raw.parse().map_err(|_| {
                    ViewerError::BadArgument(format!("--frames expects a count, got {raw:?}"))
                })?;
                cli.frames = Some(frames);
            }
            "--snapshot" => cli.snapshot = Some(PathBuf::from(value("--snapshot")?)),
            "--help" | "-h" => return Ok(Command::Help),
            other => return Err(ViewerError::BadArgument(format!("unknown argument {other}"))),
        }
    }

    Ok(Command::Run(cli))
}

/// Resolve the config: an explicit `--config` must exist, the default path is optional.
/// CLI values override file values.
pub fn resolve_config(cli: &CliArgs) -> Result<ViewerConfig, ViewerError> {
    let mut config = match &cli.config {
        Some(path) => ViewerConfig::load(path)?,
        None => ViewerConfig::load_or_default(DEFAULT_CONFIG_PATH.as_ref())?,
    };
    if let Some(model) = &cli.model {
        config.model_path = model.clone();
    }
    if let Some(frames) = cli.frames {
        config.frames = frames;
    }
    if let Some(snapshot) = &cli.snapshot {
        config.snapshot = Some(snapshot.clone());
    }
    Ok(config)
}

/// Load the model, run the frame loop and write the snapshot.
pub fn run(config: &ViewerConfig) -> Result<RunSummary, ViewerError> {
    let model = starship_persist::load_model(&config.model_path)?;
    log::info!(
        "Loaded {} voxels from {}",
        model.len(),
        config.model_path.display()
    );

    let mut app = Application::new(&model, config);
    let summary = app.run();
    log::info!("Presented {} frames ({:?})", summary.frames, summary.stop);

    if let Some(path) = &config.snapshot {
        app.framebuffer().save_png(path)?;
        log::info!("Snapshot written to {}", path.display());
    }

    Ok(summary)
}
