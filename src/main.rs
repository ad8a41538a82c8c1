//! SkillDar - service marketplace demo client.

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use skilldar as app;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use app::config::{AppConfig, ConfigLoadResult};
use app::theme;
use app::ui::SkillDarApp;

/// Service marketplace demo client.
#[derive(Parser)]
#[command(name = "skilldar")]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,

    /// Start with the dark theme
    #[arg(long)]
    dark: bool,

    /// Screen to open after the welcome screen (welcome, login, main, profile, edit_profile_client)
    #[arg(long)]
    screen: Option<String>,
}

fn main() -> eframe::Result<()> {
    let cli = Cli::parse();

    // Determine config path based on mode
    let config_path = if cli.dev {
        PathBuf::from("config.toml")
    } else {
        AppConfig::default_path()
    };
    let load_result = AppConfig::try_load(&config_path);
    let file_logging = matches!(&load_result, ConfigLoadResult::Loaded(c) if c.logging.file_enabled);

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(file_logging);

    tracing::info!("SkillDar starting...");
    if cli.dev {
        tracing::info!("Dev mode: loading config from current directory");
    }
    tracing::info!("Config path: {:?}", config_path);

    let mut config = match load_result {
        ConfigLoadResult::Loaded(config) => {
            tracing::info!("Config loaded successfully");
            config
        }
        ConfigLoadResult::Missing => {
            tracing::info!("Config missing, using defaults");
            AppConfig::default()
        }
        ConfigLoadResult::Invalid(e) => {
            tracing::warn!("Config invalid, using defaults: {}", e);
            AppConfig::default()
        }
    };
    if cli.dark {
        config.ui.dark_theme = true;
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("SkillDar")
            .with_inner_size([config.ui.window_width, config.ui.window_height])
            .with_resizable(false),
        ..Default::default()
    };

    // Create tokio runtime for the connection monitor
    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

    eframe::run_native(
        "SkillDar",
        options,
        Box::new(move |cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);

            let mut app = SkillDarApp::new(config, rt);
            theme::apply(&cc.egui_ctx, app.state.theme());
            app.start_monitor(&cc.egui_ctx);

            if let Some(id) = cli.screen.as_deref() {
                app.state.show_screen_id(id);
            }

            Ok(Box::new(app))
        }),
    )
}

/// Console logging, plus a daily rolling file when enabled.
fn init_logging(file_enabled: bool) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let (file_layer, guard) = if file_enabled {
        let appender = tracing_appender::rolling::daily(AppConfig::log_dir(), "skilldar.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        (Some(fmt::layer().with_ansi(false).with_writer(writer)), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    guard
}
