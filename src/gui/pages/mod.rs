// src/gui/pages/mod.rs
use eframe::egui;

use super::app::App;
use super::router::PageKind;

pub mod directory;
pub mod map;
pub mod profiles;

/// One tab's worth of presentation. Pages are stateless: everything they
/// render comes from the filtered view in `App`, so switching tabs never
/// recomputes data.
pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Draw the page body below the tab strip.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);
}
