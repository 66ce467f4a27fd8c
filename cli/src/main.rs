//! CLI entrypoint for nationsense
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use nationsense_application::{EffectRunner, ImageStore, ProgressNotifier};
use nationsense_domain::ViewMode;
use nationsense_infrastructure::{
    ConfigLoader, ConfigSources, FileConfig, FileLoggingConfig, GeminiGateway, VisionFileStore,
};
use nationsense_presentation::{
    Cli, OneShot, OutputConfig, ProgressReporter, SimpleProgress, TuiApp,
};
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // === Configuration ===
    let sources = ConfigSources::discover(cli.config.as_deref());
    let config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load_from(&sources).context("Failed to load configuration")?
    };

    if cli.show_config {
        ConfigLoader::print_config_sources(&sources);
        println!();
        println!("{}", config.to_toml().context("Failed to render configuration")?);
        return Ok(());
    }

    // TUI mode logs to a file
    let tui_mode = cli.country.is_none();
    let _log_guard = init_logging(cli.verbose, &config.logging, tui_mode)?;
    info!("Starting nationsense");

    for issue in config.validate() {
        warn!("Configuration: {}", issue);
    }

    let output = OutputConfig {
        color: config.output.color,
        json: cli.json,
        show_progress: !cli.quiet,
    };
    output.apply_color();

    // === Dependency Injection ===
    let gateway = Arc::new(GeminiGateway::new(config.gemini.clone())?);
    let image_store: Arc<dyn ImageStore> =
        Arc::new(VisionFileStore::new(config.vision.resolved_save_dir()));

    match cli.country {
        None => {
            let runner = EffectRunner::new(gateway);
            TuiApp::new(runner, image_store).run().await?;
        }
        Some(country) => {
            run_one_shot(gateway, image_store, &country, cli.view.into(), &output).await?;
        }
    }

    Ok(())
}

async fn run_one_shot(
    gateway: Arc<GeminiGateway>,
    image_store: Arc<dyn ImageStore>,
    country: &str,
    view: ViewMode,
    output: &OutputConfig,
) -> Result<()> {
    let mut runner = EffectRunner::new(gateway);
    if output.show_progress && !output.json {
        let progress: Arc<dyn ProgressNotifier> = if std::io::stderr().is_terminal() {
            Arc::new(ProgressReporter::new())
        } else {
            Arc::new(SimpleProgress)
        };
        runner = runner.with_progress(progress);
    }
    let mut shot = OneShot::new(runner, image_store).with_json(output.json);

    shot.search(country).await?;
    let saved = shot.open_view(view).await?;

    if view == ViewMode::Chat {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        if output.json {
            shot.chat(stdin, &mut std::io::sink()).await?;
            println!("{}", shot.render());
        } else {
            shot.chat(stdin, &mut std::io::stdout()).await?;
        }
        return Ok(());
    }

    println!("{}", shot.render());
    if let Some(path) = saved {
        eprintln!("Vision saved to {}", path.display());
    }
    Ok(())
}

/// Initialize logging based on verbosity level and the `[logging]` section.
///
/// Returns the guard that flushes the log file; keep it alive until exit.
fn init_logging(
    verbose: u8,
    logging: &FileLoggingConfig,
    to_file: bool,
) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new(logging.level.as_deref().unwrap_or("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    if !to_file {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
        return Ok(None);
    }

    let Some(path) = logging.resolved_file() else {
        return Ok(None);
    };
    let (Some(dir), Some(file_name)) = (path.parent(), path.file_name()) else {
        return Ok(None);
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(Some(guard))
}
