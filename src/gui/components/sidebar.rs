// src/gui/components/sidebar.rs
//
// Renders the filter controls and applies changes directly to `app`.
// Both controls feed the same pipeline: any change rebuilds the view from
// the full row set.

use eframe::egui;

use crate::config::consts::ALL_GRADES;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Filters");
    ui.separator();

    let mut changed = false;

    ui.label("Grade");
    egui::ComboBox::from_id_salt("grade_filter")
        .selected_text(app.state.filter.grade.clone())
        .show_ui(ui, |ui| {
            changed |= ui
                .selectable_value(&mut app.state.filter.grade, s!(ALL_GRADES), ALL_GRADES)
                .changed();
            for g in app.grades.clone() {
                let label = g.clone();
                changed |= ui
                    .selectable_value(&mut app.state.filter.grade, g, label)
                    .changed();
            }
        });

    ui.add_space(8.0);

    ui.label("Search");
    let resp = ui.add(
        egui::TextEdit::singleline(&mut app.state.filter.search)
            .hint_text("name, email, grade"),
    );
    changed |= resp.changed();

    if !app.state.filter.search.is_empty() && ui.small_button("Clear").clicked() {
        app.state.filter.search.clear();
        changed = true;
    }

    if changed {
        app.rebuild_view();
    }
}
