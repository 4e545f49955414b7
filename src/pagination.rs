//! Page-window arithmetic and the pagination payload handed to templates.

use serde::Serialize;

/// A 1-based page over a result set, `per_page` records wide.
///
/// The window is independent of the total record count: `first_record_index`
/// and `last_record_index` are derived from the page number alone, and the
/// repository clips the actual slice when the set is shorter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    page: usize,
    per_page: usize,
}

impl PageWindow {
    /// Builds a window, normalizing page 0 to the first page.
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// 0-based index of the first record in the window.
    ///
    /// Saturates instead of overflowing: the page number comes straight from
    /// the query string and can be arbitrarily large.
    pub fn first_record_index(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }

    /// 0-based index of the last record in the window.
    pub fn last_record_index(&self) -> usize {
        self.first_record_index().saturating_add(self.per_page - 1)
    }

    pub fn offset(&self) -> i64 {
        i64::try_from(self.first_record_index()).unwrap_or(i64::MAX)
    }

    pub fn limit(&self) -> i64 {
        self.per_page as i64
    }
}

/// Computes the block of page links around `current`.
///
/// Pages are grouped into fixed blocks of `block_size` links; the strip shows
/// the block containing the current page plus single links into the
/// neighboring blocks when they exist.
fn page_block(
    current: usize,
    total_pages: usize,
    block_size: usize,
) -> (Vec<usize>, Option<usize>, Option<usize>) {
    if total_pages == 0 {
        return (vec![], None, None);
    }

    let block_size = block_size.max(1);
    let current = current.clamp(1, total_pages);

    let first = ((current - 1) / block_size) * block_size + 1;
    let last = (first + block_size - 1).min(total_pages);

    let prev = (first > 1).then(|| first - 1);
    let next = (last < total_pages).then(|| last + 1);

    ((first..=last).collect(), prev, next)
}

/// One rendered page of results plus everything the template needs to draw
/// the pagination strip.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub first_record_index: usize,
    pub last_record_index: usize,
    pub total_records: usize,
    pub total_pages: usize,
    pub pages: Vec<usize>,
    pub prev_block: Option<usize>,
    pub next_block: Option<usize>,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, window: PageWindow, total_records: usize, block_size: usize) -> Self {
        let total_pages = total_records.div_ceil(window.per_page());
        let (pages, prev_block, next_block) = page_block(window.page(), total_pages, block_size);

        Self {
            items,
            page: window.page(),
            per_page: window.per_page(),
            first_record_index: window.first_record_index(),
            last_record_index: window.last_record_index(),
            total_records,
            total_pages,
            pages,
            prev_block,
            next_block,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_bounds_for_second_page() {
        let window = PageWindow::new(2, 10);
        assert_eq!(window.first_record_index(), 10);
        assert_eq!(window.last_record_index(), 19);
    }

    #[test]
    fn window_width_matches_per_page() {
        for page in 1..=5 {
            for per_page in [1, 7, 10, 20] {
                let window = PageWindow::new(page, per_page);
                assert!(window.first_record_index() <= window.last_record_index());
                assert_eq!(
                    window.last_record_index() - window.first_record_index() + 1,
                    per_page
                );
            }
        }
    }

    #[test]
    fn window_normalizes_page_zero() {
        let window = PageWindow::new(0, 10);
        assert_eq!(window.page(), 1);
        assert_eq!(window.first_record_index(), 0);
        assert_eq!(window.last_record_index(), 9);
    }

    #[test]
    fn window_huge_page_saturates_instead_of_overflowing() {
        let window = PageWindow::new(usize::MAX, 10);
        assert!(window.first_record_index() <= window.last_record_index());
        assert_eq!(window.first_record_index(), usize::MAX);
        assert!(window.offset() >= 0);
        assert_eq!(window.offset(), i64::MAX);
    }

    #[test]
    fn paginated_totals() {
        let paginated = Paginated::new(vec![1, 2, 3], PageWindow::new(1, 10), 35, 10);
        assert_eq!(paginated.total_pages, 4);
        assert_eq!(paginated.pages, vec![1, 2, 3, 4]);
        assert_eq!(paginated.prev_block, None);
        assert_eq!(paginated.next_block, None);
    }

    #[test]
    fn paginated_block_strip() {
        let paginated = Paginated::<i32>::new(vec![], PageWindow::new(4, 10), 35, 3);
        assert_eq!(paginated.pages, vec![4]);
        assert_eq!(paginated.prev_block, Some(3));
        assert_eq!(paginated.next_block, None);

        let paginated = Paginated::<i32>::new(vec![], PageWindow::new(2, 10), 35, 3);
        assert_eq!(paginated.pages, vec![1, 2, 3]);
        assert_eq!(paginated.prev_block, None);
        assert_eq!(paginated.next_block, Some(4));
    }

    #[test]
    fn paginated_empty_set() {
        let paginated = Paginated::<i32>::new(vec![], PageWindow::new(1, 10), 0, 10);
        assert_eq!(paginated.total_pages, 0);
        assert!(paginated.pages.is_empty());
    }
}
