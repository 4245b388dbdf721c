use std::{fs, path::Path};

use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "order_board.toml";

#[derive(Debug, Clone)]
pub struct Settings {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Order Board".into(),
            window_width: 1180.0,
            window_height: 760.0,
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    window_title: Option<String>,
    window_width: Option<f32>,
    window_height: Option<f32>,
    log_filter: Option<String>,
}

/// Defaults, overlaid by the settings file when present, overlaid by
/// `ORDER_BOARD__*` environment variables. A missing or malformed file is
/// ignored rather than fatal.
pub fn load_settings(path: &Path) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        if let Ok(file_cfg) = toml::from_str::<FileSettings>(&raw) {
            if let Some(v) = file_cfg.window_title {
                settings.window_title = v;
            }
            if let Some(v) = file_cfg.window_width {
                settings.window_width = v;
            }
            if let Some(v) = file_cfg.window_height {
                settings.window_height = v;
            }
            if let Some(v) = file_cfg.log_filter {
                settings.log_filter = v;
            }
        }
    }

    if let Ok(v) = std::env::var("ORDER_BOARD__WINDOW_TITLE") {
        settings.window_title = v;
    }
    if let Ok(v) = std::env::var("ORDER_BOARD__WINDOW_WIDTH") {
        if let Ok(v) = v.parse() {
            settings.window_width = v;
        }
    }
    if let Ok(v) = std::env::var("ORDER_BOARD__WINDOW_HEIGHT") {
        if let Ok(v) = v.parse() {
            settings.window_height = v;
        }
    }
    if let Ok(v) = std::env::var("ORDER_BOARD__LOG_FILTER") {
        settings.log_filter = v;
    }

    settings
}
