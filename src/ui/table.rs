use eframe::egui::{self, Align, Layout, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};
use firms_finder::Field;

use crate::state::AppState;
use crate::ui::panels::save_file_dialog;

// ---------------------------------------------------------------------------
// Results table (central panel)
// ---------------------------------------------------------------------------

/// Render the match count, export button and results table.
pub fn results(ui: &mut Ui, state: &mut AppState) {
    if !state.is_loaded() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No data loaded  (File → Open… or File → Reload)");
        });
        return;
    }

    let n = state.matches.len();
    if n > 0 {
        ui.horizontal(|ui: &mut Ui| {
            let plural = if n == 1 { "" } else { "es" };
            ui.label(RichText::new(format!("Found {n} match{plural}.")).weak());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui: &mut Ui| {
                if ui.button("⬇ Export to CSV").clicked() {
                    save_file_dialog(state);
                }
            });
        });
        ui.add_space(4.0);
    } else if state.searched {
        ui.label("No matches found.");
        return;
    }

    let records = state.matched_records();

    ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(Layout::left_to_right(Align::Center))
            .columns(Column::auto().at_least(70.0).clip(true), Field::ALL.len() - 1)
            .column(Column::remainder().at_least(90.0))
            .header(22.0, |mut header| {
                for field in Field::ALL {
                    header.col(|ui: &mut Ui| {
                        ui.strong(field.label());
                    });
                }
            })
            .body(|body| {
                body.rows(20.0, records.len(), |mut row| {
                    let record = records[row.index()];
                    for field in Field::ALL {
                        row.col(|ui: &mut Ui| {
                            ui.add(egui::Label::new(record.get(field)).truncate());
                        });
                    }
                });
            });
    });
}
