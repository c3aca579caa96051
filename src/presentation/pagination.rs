/// Page-window computation and page controls
///
/// `ListingState` is the explicit view state for the listing page: the last
/// loaded record set plus the current page. Navigation never mutates it;
/// `navigate` hands back a new state, or `None` when the page is out of range.

use crate::{grade::StoredGrade, presentation::templates};
use minijinja::{context, Value};
use serde::Serialize;
use std::{ops::Range, sync::Arc};

/// Records per page
pub const PAGE_SIZE: usize = 10;

/// Number of pages needed for `total` records
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size)
}

/// Index range of a 1-based `page`, clamped to `total`
pub fn page_bounds(page: usize, page_size: usize, total: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);
    start..end
}

/// Records shown on a 1-based `page`
pub fn page_slice<T>(records: &[T], page: usize) -> &[T] {
    &records[page_bounds(page, PAGE_SIZE, records.len())]
}

/// One element of the pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    Previous { target: usize, disabled: bool },
    Number { page: usize, active: bool },
    Ellipsis,
    Next { target: usize, disabled: bool },
}

/// Pagination bar for `current` out of `total_pages`
///
/// First and last page are always listed, as are the neighbours of the
/// current page. Each run of hidden pages collapses into one ellipsis.
pub fn page_controls(current: usize, total_pages: usize) -> Vec<PageControl> {
    let mut controls = vec![PageControl::Previous {
        target: current.saturating_sub(1),
        disabled: current <= 1,
    }];

    for page in 1..=total_pages {
        if page == 1 || page == total_pages || page.abs_diff(current) <= 1 {
            controls.push(PageControl::Number {
                page,
                active: page == current,
            });
        } else if page + 2 == current || page == current + 2 {
            controls.push(PageControl::Ellipsis);
        }
    }

    controls.push(PageControl::Next {
        target: current + 1,
        disabled: current >= total_pages,
    });
    controls
}

/// One pagination control as the templates see it
#[derive(Debug, Serialize)]
pub struct ControlView {
    pub ellipsis: bool,
    pub class: &'static str,
    pub label: String,
    /// Built by the caller's href builder and printed unescaped
    pub href: Value,
    pub disabled: bool,
}

/// Template data for `controls`; `href` builds the link for a target page
pub fn control_views(controls: &[PageControl], href: impl Fn(usize) -> String) -> Vec<ControlView> {
    let link = |label: String, target: usize, class: &'static str, disabled: bool| ControlView {
        ellipsis: false,
        class,
        label,
        href: Value::from_safe_string(href(target)),
        disabled,
    };

    controls
        .iter()
        .map(|control| match *control {
            PageControl::Previous { target, disabled } => link("\u{2039}".to_string(), target, "prev", disabled),
            PageControl::Next { target, disabled } => link("\u{203a}".to_string(), target, "next", disabled),
            PageControl::Number { page, active } => {
                link(page.to_string(), page, if active { "active" } else { "" }, false)
            }
            PageControl::Ellipsis => ControlView {
                ellipsis: true,
                class: "",
                label: String::new(),
                href: Value::UNDEFINED,
                disabled: true,
            },
        })
        .collect()
}

/// Render pagination controls; `href` builds the link for a target page
pub fn render_controls(
    controls: &[PageControl],
    href: impl Fn(usize) -> String,
) -> Result<String, minijinja::Error> {
    templates::render(
        "controls.html",
        &context! { controls => control_views(controls, href) },
    )
}

/// View state of the listing page
#[derive(Debug, Clone, PartialEq)]
pub struct ListingState {
    records: Arc<[StoredGrade]>,
    current_page: usize,
}

impl Default for ListingState {
    fn default() -> Self {
        Self::loaded(Vec::new())
    }
}

impl ListingState {
    /// Freshly loaded record set, positioned on page 1
    pub fn loaded(records: Vec<StoredGrade>) -> Self {
        Self {
            records: records.into(),
            current_page: 1,
        }
    }

    /// Same records on another page; `None` when `page` is outside `[1, total_pages]`
    pub fn navigate(&self, page: usize) -> Option<Self> {
        if page < 1 || page > self.total_pages() {
            return None;
        }
        Some(Self {
            records: Arc::clone(&self.records),
            current_page: page,
        })
    }

    pub fn records(&self) -> &[StoredGrade] {
        &self.records
    }

    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total(), PAGE_SIZE)
    }

    /// Zero-based index of the first visible record
    pub fn first_index(&self) -> usize {
        page_bounds(self.current_page, PAGE_SIZE, self.total()).start
    }

    /// Records on the current page
    pub fn visible(&self) -> &[StoredGrade] {
        page_slice(&self.records, self.current_page)
    }

    /// Controls to draw; empty when everything fits on one page
    pub fn controls(&self) -> Vec<PageControl> {
        if self.total_pages() <= 1 {
            return Vec::new();
        }
        page_controls(self.current_page, self.total_pages())
    }
}
