// src/gui/pages/profiles.rs
//
// Vertical list of profile cards: photo thumbnail on the left, text on
// the right. Address and phones only appear when the record's first
// household carried them.

use eframe::egui::{self, RichText};

use crate::config::consts::PHOTO_WIDTH;
use crate::gui::{app::App, router::PageKind};
use crate::model::DisplayRow;

use super::Page;

pub struct ProfilesPage;
pub static PAGE: ProfilesPage = ProfilesPage;

impl Page for ProfilesPage {
    fn kind(&self) -> PageKind { PageKind::Profiles }
    fn title(&self) -> &'static str { "Profiles" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        if app.view.is_empty() {
            ui.add_space(12.0);
            ui.label("No records match the current filter.");
            return;
        }

        egui::ScrollArea::vertical()
            .id_salt("profiles_scroll")
            .show(ui, |ui| {
                for row in &app.view {
                    card(ui, row);
                    ui.separator();
                }
            });
    }
}

fn card(ui: &mut egui::Ui, row: &DisplayRow) {
    ui.horizontal_top(|ui| {
        if let Some(url) = row.photo.as_deref().filter(|u| !u.is_empty()) {
            ui.add(
                egui::Image::new(url)
                    .max_width(PHOTO_WIDTH)
                    .corner_radius(4.0),
            );
        } else {
            // keep text aligned when there is no photo
            ui.allocate_space(egui::vec2(PHOTO_WIDTH, 1.0));
        }

        ui.vertical(|ui| {
            let title = if row.grade.is_empty() {
                row.name.clone()
            } else {
                format!("{} (Grade {})", row.name, row.grade)
            };
            ui.label(RichText::new(title).strong().size(16.0));

            if !row.email.is_empty() {
                ui.label(join!("📧 ", &row.email));
            }
            if let Some(addr) = row.address.as_deref() {
                ui.label(join!("🏠 ", addr));
            }
            if let Some(phones) = row.phones.as_deref() {
                ui.label(join!("📞 ", phones));
            }
        });
    });
}
