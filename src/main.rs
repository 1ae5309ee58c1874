// Date Picker demo
// Main entry point

use anyhow::{anyhow, Result};
use date_picker::models::settings::{default_config_path, PickerConfig};
use date_picker::ui_egui::PickerDemoApp;
use date_picker::DatePicker;

fn load_config() -> Result<PickerConfig> {
    let path = std::env::args_os()
        .nth(1)
        .map(std::path::PathBuf::from)
        .or_else(default_config_path);

    match path {
        Some(path) => {
            log::info!("Loading picker config from {}", path.display());
            PickerConfig::load_or_default(&path)
        }
        None => Ok(PickerConfig::default()),
    }
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Date Picker demo");

    let config = load_config()?;
    let picker = DatePicker::new(config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([360.0, 420.0])
            .with_min_inner_size([280.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Date Picker",
        options,
        Box::new(|_cc| Ok(Box::new(PickerDemoApp::new(picker)))),
    )
    .map_err(|e| anyhow!("Failed to run picker window: {}", e))
}
