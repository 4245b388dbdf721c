use clap::Parser;
use eframe::egui;

mod config;
mod ui;

#[derive(Parser, Debug)]
struct Args {
    /// Path to the settings file.
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: std::path::PathBuf,
    /// Overrides the log filter from settings, e.g. "debug" or "board=trace".
    #[arg(long)]
    log_filter: Option<String>,
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    let settings = config::load_settings(&args.config);
    let log_filter = args
        .log_filter
        .unwrap_or_else(|| settings.log_filter.clone());
    tracing_subscriber::fmt()
        .with_env_filter(log_filter.as_str())
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window_title.clone())
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([840.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Order Board",
        options,
        Box::new(|cc| Ok(Box::new(ui::BoardGuiApp::new(cc)))),
    )
}
