// src/gui/router.rs
use super::pages::{self, Page};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Directory,
    Profiles,
    Map,
}

pub static PAGES: &[&'static dyn Page] = &[
    &pages::directory::PAGE,
    &pages::profiles::PAGE,
    &pages::map::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}
