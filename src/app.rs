use eframe::{App, Frame, egui};
use egui::{Color32, RichText};
use std::time::Instant;

use passform::charset::CharacterClass;
use passform::form::PasswordForm;
use passform::manager::settings_file_path;
use passform::password::entropy_strength;
use passform::settings::AppSettings;

/// Checkbox order on screen
const CHECKBOX_ORDER: [CharacterClass; 4] = [
    CharacterClass::Lowercase,
    CharacterClass::Uppercase,
    CharacterClass::Digits,
    CharacterClass::Symbols,
];

/// The main eframe app struct
pub struct PassFormApp {
    pub form: PasswordForm,
    pub settings: AppSettings,

    // Clipboard auto-clear
    pub clipboard_copy_time: Option<Instant>,
}

impl Default for PassFormApp {
    fn default() -> Self {
        let settings = AppSettings::load();
        // Write defaults on first run so the file can be edited by hand
        if !settings_file_path().exists() {
            if let Err(e) = settings.save() {
                log::warn!("Could not write default settings: {}", e);
            }
        }
        Self::with_settings(settings)
    }
}

impl PassFormApp {
    pub fn with_settings(settings: AppSettings) -> Self {
        Self {
            form: PasswordForm::new(settings.bounds(), settings.default_selection),
            settings,
            clipboard_copy_time: None,
        }
    }

    fn show_form(&mut self, ui: &mut egui::Ui) {
        let bounds = self.form.bounds();
        let hint = format!("Ex {}", 8usize.clamp(bounds.min(), bounds.max()));
        let right = egui::Layout::right_to_left(egui::Align::Center);

        // Length row, error message stacked under the heading
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new("Password Length").size(15.0));
                if let Some(err) = self.form.length_error() {
                    ui.colored_label(Color32::RED, err.to_string());
                }
            });
            ui.with_layout(right, |ui| {
                let resp = ui.add(
                    egui::TextEdit::singleline(&mut self.form.length_input)
                        .hint_text(hint)
                        .desired_width(80.0),
                );
                if resp.changed() {
                    self.form.touched = true;
                }
            });
        });
        ui.add_space(15.0);

        for class in CHECKBOX_ORDER {
            ui.horizontal(|ui| {
                ui.label(RichText::new(class.label()).size(15.0));
                ui.with_layout(right, |ui| {
                    ui.checkbox(self.form.selection.flag_mut(class), "");
                });
            });
            ui.add_space(15.0);
        }

        if self.form.selection.is_empty() {
            ui.colored_label(Color32::YELLOW, "Select at least one character class");
        }

        ui.horizontal(|ui| {
            let generate = ui.add_enabled(
                self.form.is_valid(),
                egui::Button::new(RichText::new("Generate Password").strong()),
            );
            if generate.clicked() {
                self.form.submit();
            }
            if ui.button("Reset").clicked() {
                self.form.reset();
            }
        });
    }

    fn show_result(&mut self, ui: &mut egui::Ui) {
        if let Some(err) = self.form.error() {
            ui.colored_label(Color32::RED, err);
            return;
        }

        let Some(pwd) = self.form.generated() else {
            return;
        };
        let bits = self.form.generated_entropy();
        let strength = entropy_strength(bits);

        // Render from the borrowed password, no plaintext copy is kept
        let mut copy_clicked = false;
        ui.group(|ui| {
            ui.label(RichText::new("Result:").size(26.0));
            let hint = RichText::new("Click to copy").color(Color32::GRAY);
            ui.label(hint);
            ui.vertical_centered(|ui| {
                let resp = ui.add(
                    egui::Label::new(RichText::new(pwd.as_str()).monospace().size(22.0))
                        .sense(egui::Sense::click()),
                );
                if resp.on_hover_text("Copy").clicked() {
                    copy_clicked = true;
                }
            });
            ui.label(format!("Entropy: {bits:.1} bits ({strength})"));
        });

        if copy_clicked {
            self.copy_generated(ui.ctx());
        }
        if self.clipboard_copy_time.is_some() {
            let left = self.clipboard_seconds_left();
            let msg = format!("Copied. Clipboard clears in {left}s");
            ui.colored_label(Color32::LIGHT_GREEN, msg);
        }
    }

    /// Copies the current result, if any. Returns whether something was copied.
    fn copy_generated(&mut self, ctx: &egui::Context) -> bool {
        let Some(pwd) = self.form.generated() else {
            return false;
        };
        ctx.copy_text(pwd.as_str().to_owned());
        self.clipboard_copy_time = Some(Instant::now());
        true
    }

    fn clipboard_seconds_left(&self) -> u64 {
        match self.clipboard_copy_time {
            Some(t) => {
                let timeout = self.settings.clipboard_timeout_u64();
                timeout.saturating_sub(t.elapsed().as_secs())
            }
            None => 0,
        }
    }
}

impl App for PassFormApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // Check clipboard auto-clear (using settings)
        if let Some(copy_time) = self.clipboard_copy_time {
            if copy_time.elapsed().as_secs() >= self.settings.clipboard_timeout_u64() {
                ctx.copy_text(String::new());
                self.clipboard_copy_time = None;
                log::debug!("Clipboard cleared");
            } else {
                ctx.request_repaint_after(std::time::Duration::from_secs(1));
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    let title = RichText::new("Password Generator").size(32.0);
                    ui.heading(title.strong());
                    ui.add_space(15.0);
                    self.show_form(ui);
                    ui.separator();
                    self.show_result(ui);
                });
        });
    }
}

// ------------------ UNIT TESTS ------------------
#[cfg(test)]
mod tests {
    use super::*;
    use passform::charset::CharacterClassSelection;

    #[test]
    fn test_checkbox_order_covers_every_class() {
        for class in CharacterClass::ALL {
            assert!(CHECKBOX_ORDER.contains(&class));
        }
    }

    #[test]
    fn test_app_uses_settings_for_form() {
        let mut settings = AppSettings::default();
        settings.set_length_range(6, 24);
        settings.default_selection = CharacterClassSelection::all();

        let app = PassFormApp::with_settings(settings);
        assert_eq!(app.form.bounds().min(), 6);
        assert_eq!(app.form.bounds().max(), 24);
        assert_eq!(app.form.selection, CharacterClassSelection::all());
        assert!(app.clipboard_copy_time.is_none());
    }

    #[test]
    fn test_clipboard_seconds_left() {
        let mut app = PassFormApp::with_settings(AppSettings::default());
        assert_eq!(app.clipboard_seconds_left(), 0);
        app.clipboard_copy_time = Some(Instant::now());
        let left = app.clipboard_seconds_left();
        assert!(left == 29 || left == 30);
    }

    #[test]
    fn test_copy_generated_reads_current_result() {
        let ctx = egui::Context::default();
        let mut app = PassFormApp::with_settings(AppSettings::default());

        // Nothing generated yet
        assert!(!app.copy_generated(&ctx));
        assert!(app.clipboard_copy_time.is_none());

        app.form.length_input = "8".into();
        assert!(app.form.submit().is_some());
        assert!(app.copy_generated(&ctx));
        assert!(app.clipboard_copy_time.is_some());
    }
}

// Reset zeroizes the input and drops (wipes) the last password
impl Drop for PassFormApp {
    fn drop(&mut self) {
        self.form.reset();
    }
}
