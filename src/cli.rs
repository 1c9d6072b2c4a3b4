use clap::Parser;
use std::path::PathBuf;

/// chat-sidebar: render a chat client's navigation buttons and dispatch clicks
#[derive(Parser, Debug, Clone)]
#[command(name = "chat-sidebar")]
#[command(version)]
#[command(about = "Badge-annotated sidebar buttons for a terminal chat client", long_about = None)]
pub struct Cli {
    /// Sidebar fixture (TOML): streams, users and unread counts.
    /// Falls back to `general.fixture` in config.toml.
    #[arg(short = 'f', long, value_name = "FILE")]
    pub fixture: Option<PathBuf>,

    /// Click the button with this caption. Repeatable; clicks run in order.
    #[arg(long = "click", value_name = "CAPTION")]
    pub clicks: Vec<String>,

    /// Index of the button to draw as focused
    #[arg(long, value_name = "INDEX")]
    pub select: Option<usize>,

    /// Print plain text instead of drawing with the terminal backend
    #[arg(long, default_value_t = false)]
    pub plain: bool,

    /// Log level (trace, debug, info, warn, error). Overrides config.toml.
    #[arg(long, env = "CHAT_SIDEBAR_LOG")]
    pub log_level: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Write default config.toml and theme.toml if missing, then exit
    #[arg(long, default_value_t = false)]
    pub init_config: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
