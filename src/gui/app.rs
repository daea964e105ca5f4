// src/gui/app.rs
use std::error::Error;
use std::path::Path;

use eframe::egui;

use crate::{
    cache::GeocodeCache,
    config::{
        consts::DIRECTORY_FILE,
        state::AppState,
    },
    directory,
    filter,
    geocode::{self, NominatimClient},
    model::{self, DisplayRow, PersonRecord},
    progress::ConsoleProgress,
};

use super::{
    components,
    pages::Page,
    router,
};

/// Load, project, geocode, then hand off to eframe. Everything up to the
/// first frame is synchronous: a cold cache means the window waits for the
/// geocode pass (one rate-limited call per new address, no cancellation).
/// Load or parse failure is fatal and propagates to the binary.
pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let records = directory::load(Path::new(DIRECTORY_FILE))?;
    let mut rows = model::project_all(&records);

    let mut cache = GeocodeCache::load(&GeocodeCache::default_path())?;
    let mut client = NominatimClient::new()?;
    let calls = geocode::resolve_rows(&rows, &mut cache, &mut client, Some(&mut ConsoleProgress))?;
    geocode::annotate_rows(&mut rows, &cache);

    logf!("Init: {} record(s), {} geocode call(s), cache={}", records.len(), calls, cache.len());

    eframe::run_native(
        "Student Directory",
        options,
        Box::new(|cc| {
            // Photo thumbnails load through egui's image/http loaders.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(App::new(records, rows)))
        }),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    /// Canonical record set; read-only after startup.
    pub records: Vec<PersonRecord>,
    /// All projected rows, coordinates annotated. Never filtered in place.
    pub rows: Vec<DisplayRow>,
    /// Current filtered + sorted view; rebuilt on every control change.
    pub view: Vec<DisplayRow>,

    /// Grade selector options (without the "All" sentinel).
    pub grades: Vec<String>,

    pub status: String,
}

impl App {
    pub fn new(records: Vec<PersonRecord>, rows: Vec<DisplayRow>) -> Self {
        let grades = filter::grade_options(&records);

        let mut app = Self {
            state: AppState::default(),
            records,
            rows,
            view: Vec::new(),
            grades,
            status: s!(),
        };
        app.rebuild_view();
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::all_pages()[self.current_index()] }

    /// Recompute the view from the full row set: filter, then sort.
    pub fn rebuild_view(&mut self) {
        self.view = filter::apply(&self.rows, &self.state.filter);
        if let Some(col) = self.state.gui.sort_col {
            filter::sort_rows(&mut self.view, col, self.state.gui.sort_ascending);
        }
        self.set_view_message();
    }

    /// Flip or set the table sort and re-sort the current view.
    pub fn sort_by(&mut self, col: usize) {
        let gui = &mut self.state.gui;
        if gui.sort_col == Some(col) {
            gui.sort_ascending = !gui.sort_ascending;
        } else {
            gui.sort_col = Some(col);
            gui.sort_ascending = true;
        }
        self.rebuild_view();
    }

    pub fn set_view_message(&mut self) {
        let mapped = self.view.iter().filter(|r| r.has_point()).count();
        self.status = format!(
            "{} of {} record(s) shown — {} on map",
            self.view.len(), self.rows.len(), mapped,
        );
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("filters")
            .resizable(false)
            .show(ctx, |ui| {
                components::sidebar::draw(ui, self);
            });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(&self.status);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);

            ui.separator();

            let page = self.current_page();
            page.draw(ui, self);
        });
    }
}
