use serde::Serialize;

/// Page numbers to render in a pager, with `None` marking a gap (`…`).
///
/// Always shows the first and last [`EDGE`] pages and a window of
/// [`AROUND`] pages on each side of the current one.
fn page_window(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    const EDGE: usize = 2;
    const AROUND: usize = 2;

    if total_pages == 0 {
        return vec![];
    }

    let mut pages = Vec::new();
    let mut last_shown = 0usize;

    for page in 1..=total_pages {
        let near_edge = page <= EDGE || page > total_pages.saturating_sub(EDGE);
        let near_current = page.abs_diff(current_page) <= AROUND;

        if near_edge || near_current {
            if last_shown + 1 != page {
                pages.push(None);
            }
            pages.push(Some(page));
            last_shown = page;
        }
    }

    pages
}

#[derive(Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let current_page = current_page.max(1);

        Self {
            items,
            pages: page_window(total_pages, current_page),
            page: current_page,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_empty_without_pages() {
        assert!(page_window(0, 1).is_empty());
    }

    #[test]
    fn short_lists_have_no_gaps() {
        let pages = page_window(5, 3);
        assert_eq!(pages, vec![Some(1), Some(2), Some(3), Some(4), Some(5)]);
    }

    #[test]
    fn long_lists_collapse_the_middle() {
        let pages = page_window(20, 10);
        assert_eq!(
            pages,
            vec![
                Some(1),
                Some(2),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                None,
                Some(19),
                Some(20),
            ]
        );
    }

    #[test]
    fn page_zero_is_clamped_to_one() {
        let paginated: Paginated<i32> = Paginated::new(vec![], 0, 3);
        assert_eq!(paginated.page, 1);
    }
}
