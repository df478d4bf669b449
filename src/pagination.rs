use serde::Serialize;

use crate::domain::artist::Artist;
use crate::domain::view_state::ViewState;

/// Page links for a pager: `Some(n)` is a link to page `n`, `None` an ellipsis.
fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = current_page
        .saturating_add(right_current + 1)
        .min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// One page window together with what a pager needs to render around it.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, page_size: usize, total: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };
        let total_pages = if page_size == 0 {
            0
        } else {
            total.div_ceil(page_size)
        };

        let pages = get_pages(total_pages, current_page, 2, 2, 4, 2);

        Self {
            items,
            pages,
            page: current_page,
            page_size,
            total,
            total_pages,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1 && self.page <= self.total_pages
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

impl From<&ViewState> for Paginated<Artist> {
    fn from(state: &ViewState) -> Self {
        Self::new(
            state.page_artists().to_vec(),
            state.current_page(),
            state.page_size().get(),
            state.total_matched(),
        )
    }
}
