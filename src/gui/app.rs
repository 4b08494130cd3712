use egui::{Button, Key, Layout, TextEdit, ViewportCommand};
use tokio::runtime::Runtime;

use crate::config::PromptConfig;
use crate::geocode::{GeocodeClient, LocationResult};
use crate::notify;
use crate::store::OverrideStore;
use crate::utils::PromptError;

pub const WINDOW_TITLE: &str = "Set Weather Location";

const INITIAL_STATUS: &str = "Enter location and press Check";

/// The dialog's two user-visible states.
///
/// Save is only enabled in `Checked`; editing the input or re-running a
/// check drops back to `Editing`.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckState {
    Editing,
    Checked(LocationResult),
}

/// The check-then-save dialog.
pub struct PromptApp {
    input: String,
    status: String,
    state: CheckState,
    resolver: GeocodeClient,
    store: OverrideStore,
    reload_process: String,
    runtime: Runtime,
}

impl PromptApp {
    pub fn new(config: &PromptConfig) -> Result<Self, PromptError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| PromptError::Io(e.to_string()))?;
        let resolver = GeocodeClient::new(config)?;
        let store = OverrideStore::new(config);

        // Prefill with the last saved override, if any
        let input = store.load().unwrap_or_default();

        Ok(Self {
            input,
            status: INITIAL_STATUS.to_string(),
            state: CheckState::Editing,
            resolver,
            store,
            reload_process: config.reload_process.clone(),
            runtime,
        })
    }

    /// Run the resolver for the current input.
    ///
    /// Blocks the UI for the duration of the lookup, bounded by the client
    /// timeout. Any error becomes the status line; success stores the result
    /// and enables Save.
    pub fn run_check(&mut self) {
        self.state = CheckState::Editing;
        match self.runtime.block_on(self.resolver.geocode(&self.input)) {
            Ok(result) => {
                self.status = "OK".to_string();
                self.state = CheckState::Checked(result);
            }
            Err(e) => {
                self.status = e.to_string();
            }
        }
    }

    /// Persist the checked query and signal the status bar.
    ///
    /// Returns true when the dialog should close.
    pub fn run_save(&mut self) -> bool {
        let CheckState::Checked(result) = &self.state else {
            self.status = "Nothing to save".to_string();
            return false;
        };

        if let Err(e) = self.store.save(&result.raw_query) {
            self.status = e.to_string();
            return false;
        }
        notify::reload_status_bar(&self.reload_process);
        true
    }

    pub fn on_input_edited(&mut self) {
        self.state = CheckState::Editing;
    }

    pub fn can_save(&self) -> bool {
        matches!(self.state, CheckState::Checked(_))
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn result_text(&self) -> Option<String> {
        match &self.state {
            CheckState::Checked(result) => Some(format!("→ {}", result.label)),
            CheckState::Editing => None,
        }
    }
}

impl eframe::App for PromptApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut check_requested = false;
        let mut close_requested = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("ZIP or city,country:");
                let response = ui.add(
                    TextEdit::singleline(&mut self.input).desired_width(f32::INFINITY),
                );
                if response.changed() {
                    self.on_input_edited();
                }
                if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                    check_requested = true;
                }
            });

            ui.add_space(6.0);
            ui.label(self.status.clone());
            ui.strong(self.result_text().unwrap_or_default());
            ui.add_space(8.0);

            ui.with_layout(Layout::right_to_left(egui::Align::Min), |ui| {
                if ui.button("Cancel").clicked() {
                    close_requested = true;
                }
                if ui.add_enabled(self.can_save(), Button::new("Save")).clicked() {
                    close_requested = self.run_save();
                }
                if ui.button("Check").clicked() {
                    check_requested = true;
                }
            });
        });

        if check_requested {
            self.run_check();
        }
        if close_requested {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
    }
}
