mod cli;

use std::path::Path;

use chat_sidebar::app::{App, SidebarFixture};
use chat_sidebar::config::ConfigManager;
use cli::Cli;
use color_eyre::eyre::{eyre, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse_args();

    let config = ConfigManager::new()?;
    if cli.init_config {
        config.write_default_configs()?;
        println!("Wrote default config to {}", config.config_dir().display());
        return Ok(());
    }

    let general = &config.app_config().general;
    let level = cli.log_level.as_deref().unwrap_or(&general.log_level);
    let log_file = cli.log_file.as_deref().or(general.log_file.as_deref());
    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(level, log_file)?;

    let fixture_path = cli
        .fixture
        .as_deref()
        .or(general.fixture.as_deref())
        .ok_or_else(|| eyre!("no sidebar fixture: pass --fixture or set general.fixture"))?;
    let fixture = SidebarFixture::load(fixture_path)?;

    let mut app = App::new(config.theme());
    app.load(&fixture)?;

    for caption in &cli.clicks {
        // A failing handler aborts that click only
        if let Err(e) = app.click(caption) {
            tracing::error!("Click on {:?} failed: {:#}", caption, e);
            eprintln!("click {:?}: {:#}", caption, e);
        }
    }

    if let Some(index) = cli.select {
        if !app.select(index) {
            tracing::warn!("Selection {} is out of range", index);
        }
    }

    if cli.plain {
        app.print_plain();
    } else {
        app.draw_inline()?;
    }

    Ok(())
}

fn init_logging(level: &str, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    // Precedence: RUST_LOG env var > --log-level > config file
    let default_filter = format!("chat_sidebar={}", level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    match log_file {
        Some(path) => {
            let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .ok_or_else(|| eyre!("log file path has no file name: {}", path.display()))?;
            std::fs::create_dir_all(dir)?;

            let file_appender = tracing_appender::rolling::never(dir, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(non_blocking).with_ansi(false))
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
            Ok(None)
        }
    }
}
