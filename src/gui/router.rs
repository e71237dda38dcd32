// src/gui/router.rs
use crate::config::options::PageKind::{self, *};
use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::map::PAGE,
    &pages::production::PAGE,
    &pages::unmatched::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_for(kind: &PageKind) -> &'static dyn Page {
    match kind {
        Map        => &pages::map::PAGE,
        Production => &pages::production::PAGE,
        Unmatched  => &pages::unmatched::PAGE,
    }
}
