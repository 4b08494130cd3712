use anyhow::{anyhow, Result};

use skybar_prompt::config::{load_api_key, load_config, PromptConfig};
use skybar_prompt::gui::{PromptApp, WINDOW_TITLE};
use skybar_prompt::init_logger;

fn main() -> Result<()> {
    init_logger();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Failed to load config: {e}. Using defaults.");
            PromptConfig {
                api_key: load_api_key(),
                ..PromptConfig::default()
            }
        }
    };

    if config.api_key.is_none() {
        // Not fatal: the dialog opens and reports it on the status line
        log::warn!("No OWM_API_KEY in the environment or key file");
    }

    let app = PromptApp::new(&config).map_err(|e| anyhow!("Failed to start prompt: {e}"))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([380.0, 170.0])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow!("eframe error: {e}"))?;

    Ok(())
}
