// src/gui/pages/directory.rs
//
// The live table. Purely a view over `app.view`; sorting round-trips
// through App so the sort state survives filter changes.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::gui::{app::App, router::PageKind};
use crate::model::TABLE_HEADERS;

use super::Page;

pub struct DirectoryPage;
pub static PAGE: DirectoryPage = DirectoryPage;

impl Page for DirectoryPage {
    fn kind(&self) -> PageKind { PageKind::Directory }
    fn title(&self) -> &'static str { "Directory" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        if app.view.is_empty() {
            ui.add_space(12.0);
            ui.label("No records match the current filter.");
            return;
        }

        // Ensure scroll bars allocate space (not floating over content)
        {
            let s = &mut ui.style_mut().spacing.scroll;
            s.floating = false;
            s.bar_width = 10.0;
            s.handle_min_length = 48.0;
            s.foreground_color = true;
            let visuals = &mut ui.style_mut().visuals;
            visuals.extreme_bg_color = visuals.panel_fill;
        }

        let sort_col = app.state.gui.sort_col;
        let ascending = app.state.gui.sort_ascending;
        let mut clicked: Option<usize> = None;

        let view = &app.view;
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .column(Column::auto().at_least(160.0)) // Name
            .column(Column::auto().at_least(50.0))  // Grade
            .column(Column::auto().at_least(180.0)) // Email
            .column(Column::auto().at_least(200.0)) // Address
            .column(Column::remainder())            // Phones
            .header(22.0, |mut header| {
                for (i, title) in TABLE_HEADERS.iter().enumerate() {
                    header.col(|ui| {
                        let label = if sort_col == Some(i) {
                            let arrow = if ascending { "⬆" } else { "⬇" };
                            join!(*title, " ", arrow)
                        } else {
                            s!(*title)
                        };
                        if ui.button(RichText::new(label).strong()).clicked() {
                            clicked = Some(i);
                        }
                    });
                }
            })
            .body(|body| {
                body.rows(20.0, view.len(), |mut row| {
                    let r = &view[row.index()];
                    for c in 0..TABLE_HEADERS.len() {
                        row.col(|ui| {
                            ui.label(r.cell(c));
                        });
                    }
                });
            });

        if let Some(col) = clicked {
            app.sort_by(col);
        }
    }
}
