use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pinchview_replay::{replay, ReplayScript};
use pinchview_surface::SurfaceSettings;

/// Replay a recorded gesture script against a threaded render surface.
#[derive(Debug, Parser)]
#[command(name = "pinchview-replay", version)]
struct Cli {
    /// JSON gesture script to replay.
    script: PathBuf,

    /// Surface settings JSON; overrides settings embedded in the script.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Print the final report as JSON instead of a summary.
    #[arg(long)]
    json: bool,
}

fn run(cli: &Cli) -> Result<(), String> {
    let script = ReplayScript::load(&cli.script)?;
    let settings = match &cli.settings {
        Some(path) => SurfaceSettings::load(path).map_err(|e| e.to_string())?,
        None => script.settings.clone().unwrap_or_default(),
    };
    log::info!(
        "Replaying {} steps from {} on a {}x{} surface",
        script.steps.len(),
        cli.script.display(),
        script.surface.width,
        script.surface.height
    );

    let report = replay(&script, settings)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{}", json);
    } else {
        let t = report.snapshot.transform;
        println!(
            "scale {:.4}  offset ({:.2}, {:.2})  revision {}",
            t.scale, t.offset.x, t.offset.y, report.snapshot.revision
        );
        println!(
            "gestures: {} applied, {} rejected  frames drawn: {}",
            report.applied, report.rejected, report.render.frames_drawn
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
