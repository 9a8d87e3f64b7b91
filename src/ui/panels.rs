use eframe::egui::{self, Color32, Key, Response, RichText, ScrollArea, TextEdit, Ui};
use firms_finder::data::filter::SearchMode;
use firms_finder::Field;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – search options
// ---------------------------------------------------------------------------

/// Whether `response` is a text box the user just submitted with Enter.
fn submitted(ui: &Ui, response: &Response) -> bool {
    response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter))
}

/// Render the search panel: mode, case sensitivity, terms, Search / Clear.
pub fn search_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Search");
    ui.separator();

    let mut submit = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Mode selector ----
            egui::ComboBox::from_id_salt("search_mode")
                .selected_text(state.mode.label())
                .width(ui.available_width())
                .show_ui(ui, |ui: &mut Ui| {
                    for mode in [SearchMode::General, SearchMode::Specific] {
                        ui.selectable_value(&mut state.mode, mode, mode.label());
                    }
                });
            ui.checkbox(&mut state.case_sensitive, "Case Sensitive");
            ui.separator();

            match state.mode {
                SearchMode::General => {
                    let response = ui.add(
                        TextEdit::singleline(&mut state.general_term)
                            .hint_text("Enter search term (searches across all fields)")
                            .desired_width(f32::INFINITY),
                    );
                    submit |= submitted(ui, &response);
                }
                SearchMode::Specific => {
                    for field in Field::ALL {
                        ui.strong(format!("{}:", field.label()));
                        submit |= field_input(ui, state, field);
                        ui.add_space(4.0);
                    }
                }
            }

            ui.add_space(8.0);
            ui.horizontal(|ui: &mut Ui| {
                let loaded = state.is_loaded();
                if ui.add_enabled(loaded, egui::Button::new("Search")).clicked() {
                    submit = true;
                }
                if ui.button("Clear").clicked() {
                    state.clear();
                }
            });
        });

    if submit {
        state.run_search();
    }
}

/// One per-field input. Fields with suggested values get a picker next to
/// the text box; free text is still accepted. Returns true on Enter.
fn field_input(ui: &mut Ui, state: &mut AppState, field: Field) -> bool {
    let suggestions = field.suggestions();
    let hint = match field {
        Field::Code => "C556",
        Field::Name => "Michael Lewis",
        Field::State => "CA",
        _ => "",
    };

    let mut submit = false;
    ui.horizontal(|ui: &mut Ui| {
        let term = state.field_terms.get_mut(field);
        let width = if suggestions.is_empty() {
            ui.available_width()
        } else {
            ui.available_width() - 36.0
        };
        let response = ui.add(TextEdit::singleline(term).hint_text(hint).desired_width(width));
        submit = submitted(ui, &response);

        if !suggestions.is_empty() {
            egui::ComboBox::from_id_salt(("suggest", field.label()))
                .selected_text("")
                .width(24.0)
                .show_ui(ui, |ui: &mut Ui| {
                    if ui.selectable_label(term.is_empty(), "(any)").clicked() {
                        term.clear();
                    }
                    for &value in suggestions {
                        if ui.selectable_label(term.as_str() == value, value).clicked() {
                            *term = value.to_string();
                        }
                    }
                });
        }
    });
    submit
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
            let can_export = !state.matches.is_empty();
            if ui
                .add_enabled(can_export, egui::Button::new("Export results…"))
                .clicked()
            {
                save_file_dialog(state);
                ui.close_menu();
            }
        });

        if ui.selectable_label(state.show_help, "Help").clicked() {
            state.show_help = !state.show_help;
        }

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} facilities loaded, {} matched",
                ds.len(),
                state.matches.len()
            ));
        } else {
            ui.label("No data loaded");
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let mut dialog = rfd::FileDialog::new()
        .set_title("Open FIRMS code list")
        .add_filter("CSV", &["csv"]);
    let data_path = state.data_path();
    if let Some(dir) = data_path.parent().filter(|d| d.is_dir()) {
        dialog = dialog.set_directory(dir);
    }

    if let Some(path) = dialog.pick_file() {
        state.load_from_path(&path);
    }
}

pub fn save_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export search results")
        .add_filter("CSV", &["csv"])
        .set_file_name(state.default_export_name())
        .save_file();

    if let Some(path) = file {
        if let Err(e) = state.export_to(&path) {
            log::error!("{e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
