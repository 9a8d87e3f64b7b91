use eframe::egui::{self, RichText, ScrollArea, Ui};
use firms_finder::Field;

const DISCLAIMER: &str = "This tool and its associated data are provided for informational \
purposes only and are made available to the public \"as is.\" No warranties are made regarding \
the accuracy, completeness, reliability, or timeliness of the data. The FIRMS data is based on \
publicly available U.S. government information and may contain errors or become outdated; verify \
any information before relying on it for official, legal, or business purposes. This project is \
not affiliated with, endorsed by, or sponsored by any U.S. government agency.";

pub fn disclaimer(ui: &mut Ui) {
    ui.add_space(2.0);
    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.label(RichText::new("Disclaimer:").small().strong());
        ui.label(RichText::new(DISCLAIMER).small().italics().weak());
    });
    ui.add_space(2.0);
}

/// Usage guide, toggled from the top bar.
pub fn guide_window(ctx: &egui::Context, open: &mut bool) {
    egui::Window::new("Guide: Public FIRMS Code Search")
        .open(open)
        .default_width(480.0)
        .show(ctx, |ui: &mut Ui| {
            ScrollArea::vertical().show(ui, |ui: &mut Ui| {
                ui.label(
                    "Look up facilities (warehouses, piers, container stations…) by their \
                     FIRMS code, name, address or status, and export the results.",
                );

                ui.heading("Quick search (all fields)");
                ui.label(
                    "Type any text and press Enter or click Search. A facility matches when \
                     the text appears anywhere in any of its fields: LAX also finds \"Relax\".",
                );

                ui.heading("Search by specific fields");
                ui.label(
                    "Fill in one or more fields. A facility must match every field you fill in; \
                     empty fields are ignored. Facility Type and FIRMS Status offer common values.",
                );
                for field in Field::ALL {
                    ui.label(format!("  • {}", field.label()));
                }

                ui.heading("Options");
                ui.label("Case Sensitive: when ticked, \"pier\" no longer matches \"Pier\".");
                ui.label("Clear: empties every search box and the results.");
                ui.label("Export to CSV: saves the current results for Excel or similar programs.");

                ui.heading("Troubleshooting");
                ui.label(
                    "\"Could not load data\": the configured file is missing or is not a FIRMS \
                     export. Use File → Open… to pick the file, or File → Reload.",
                );
                ui.label("\"No matches found\": check spelling or try a shorter term.");
            });
        });
}
