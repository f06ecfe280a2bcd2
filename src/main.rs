use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use fresh_welcome::config::WelcomeConfig;
use fresh_welcome::host::input::handle_key;
use fresh_welcome::host::{LoopControl, TabManager, Theme, Ui};
use fresh_welcome::plugin::{RegistrationContext, WelcomePlugin};
use fresh_welcome::services::tracing_setup;
use ratatui::DefaultTerminal;
use std::path::PathBuf;

/// Terminal editor host with the welcome screen plugin installed
#[derive(Parser, Debug)]
#[command(name = "fresh-welcome")]
#[command(
    about = "Terminal editor host with a welcome screen for empty sessions",
    long_about = None
)]
#[command(version)]
struct Args {
    /// Files to open
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Path to the welcome plugin configuration file (JSON)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file for diagnostics (default: system temp dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Welcome document to show when no tabs are open
    #[arg(long, value_name = "PATH")]
    welcome: Option<PathBuf>,

    /// Color theme
    #[arg(long, value_name = "NAME", default_value = "dark")]
    theme: String,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,

    /// Print the configuration JSON Schema and exit
    #[arg(long)]
    dump_schema: bool,
}

fn load_config(args: &Args) -> AnyhowResult<WelcomeConfig> {
    let mut config = match &args.config {
        Some(path) => WelcomeConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => WelcomeConfig::default(),
    };
    if let Some(welcome) = &args.welcome {
        config.document_path = Some(welcome.clone());
    }
    Ok(config)
}

fn run(mut terminal: DefaultTerminal, tabs: &mut TabManager, ui: &mut Ui) -> AnyhowResult<()> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            ui.render(frame.buffer_mut(), area, tabs.tabs_mut());
        })?;

        // Tab bar takes one row
        let page = terminal.size()?.height.saturating_sub(2).max(1) as usize;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if handle_key(key, tabs, page) == LoopControl::Exit {
                tracing::info!("Main loop exiting");
                return Ok(());
            }
        }
    }
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();

    if args.dump_schema {
        let schema = schemars::schema_for!(WelcomeConfig);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    let config = load_config(&args)?;

    if args.dump_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let log_file = args
        .log_file
        .clone()
        .unwrap_or_else(tracing_setup::default_log_path);
    tracing_setup::init_global(&log_file)?;
    tracing::info!("Editor starting");

    let theme = Theme::from_name(&args.theme).with_context(|| {
        format!(
            "Unknown theme '{}' (available: {})",
            args.theme,
            Theme::BUILTIN_OPTIONS.join(", ")
        )
    })?;

    let mut tabs = TabManager::new();
    for path in &args.files {
        if let Err(e) = tabs.open_file(path) {
            tracing::warn!("{:#}", e);
            eprintln!("Warning: {:#}", e);
        }
    }
    let mut ui = Ui::new(theme);

    let plugin = WelcomePlugin::new(config);
    let registration = plugin.register(
        RegistrationContext::new()
            .with_tab_manager(&mut tabs)
            .with_ui(&mut ui),
    );
    tracing::info!("Welcome plugin registered: {:?}", registration);

    if tabs.open_tab_count() == 0 {
        tabs.open_scratch("");
    }

    let terminal = ratatui::init();
    let result = run(terminal, &mut tabs, &mut ui);
    ratatui::restore();

    tracing::info!("Recovery stats: {:?}", plugin.recovery_stats());
    result
}
