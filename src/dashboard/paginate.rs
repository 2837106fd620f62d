//! Fixed-size paging of the filtered set.

/// Cards per page in grid mode
pub const GRID_PAGE_SIZE: usize = 9;
/// Rows per page in table mode
pub const TABLE_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    Table,
}

impl ViewMode {
    pub fn page_size(self) -> usize {
        match self {
            ViewMode::Grid => GRID_PAGE_SIZE,
            ViewMode::Table => TABLE_PAGE_SIZE,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::Table,
            ViewMode::Table => ViewMode::Grid,
        }
    }
}

/// Entry of the page-number strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Current page (1-based) and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page: usize,
    page_size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(GRID_PAGE_SIZE)
    }
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Change the page size; any actual change goes back to page 1
    pub fn set_page_size(&mut self, page_size: usize) {
        let page_size = page_size.max(1);
        if page_size != self.page_size {
            self.page_size = page_size;
            self.page = 1;
        }
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// Jump to `page`, clamped to `1..=page_count`
    pub fn go_to(&mut self, page: usize, len: usize) {
        let last = self.page_count(len).max(1);
        self.page = page.clamp(1, last);
    }

    pub fn next(&mut self, len: usize) {
        self.go_to(self.page + 1, len);
    }

    pub fn prev(&mut self, len: usize) {
        self.go_to(self.page.saturating_sub(1), len);
    }

    pub fn last(&mut self, len: usize) {
        self.go_to(self.page_count(len), len);
    }

    /// Bounds of the current page within a list of `len` items
    pub fn bounds(&self, len: usize) -> (usize, usize) {
        let start = ((self.page - 1) * self.page_size).min(len);
        let end = (start + self.page_size).min(len);
        (start, end)
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let (start, end) = self.bounds(items.len());
        &items[start..end]
    }
}

/// Page-number strip: first and last page always shown, `radius` pages
/// around `current`, gaps of two or more pages collapsed to an ellipsis.
pub fn page_window(current: usize, total: usize, radius: usize) -> Vec<PageItem> {
    if total == 0 {
        return Vec::new();
    }

    let current = current.clamp(1, total);
    let start = current.saturating_sub(radius).max(1);
    let end = (current + radius).min(total);
    let mut items = Vec::new();

    if start > 1 {
        items.push(PageItem::Page(1));
        if start > 3 {
            items.push(PageItem::Ellipsis);
        } else if start == 3 {
            items.push(PageItem::Page(2));
        }
    }

    items.extend((start..=end).map(PageItem::Page));

    if end < total {
        if end + 2 < total {
            items.push(PageItem::Ellipsis);
        } else if end + 2 == total {
            items.push(PageItem::Page(total - 1));
        }
        items.push(PageItem::Page(total));
    }

    items
}
