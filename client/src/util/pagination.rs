//! Page arithmetic for paginated lists.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

/// One slot in a pager.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    /// Collapsed run of pages.
    Gap,
}

/// 1-based page position within `total` results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}

impl Pagination {
    /// Build with `per_page` at least 1 and `page` clamped into range.
    #[must_use]
    pub fn new(page: u32, per_page: u32, total: u64) -> Self {
        let mut out = Self { page: 1, per_page: per_page.max(1), total };
        out.page = out.clamp_page(page);
        out
    }

    /// Always at least 1, so an empty list still has a page to show.
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        let per_page = u64::from(self.per_page.max(1));
        let pages = self.total.div_ceil(per_page).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn clamp_page(&self, page: u32) -> u32 {
        page.clamp(1, self.total_pages())
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Index of the first item on the current page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.per_page)
    }

    /// `"13-24 of 40"`, or `"No results"`.
    #[must_use]
    pub fn range_label(&self) -> String {
        if self.total == 0 {
            return "No results".to_owned();
        }
        let first = self.offset() + 1;
        let last = (self.offset() + u64::from(self.per_page)).min(self.total);
        format!("{first}-{last} of {}", self.total)
    }

    /// Pager slots for a pager about `max_buttons` wide.
    ///
    /// The first and last pages are always present, with a run of
    /// `max_buttons - 2` pages around the current one between them. A gap
    /// that would hide a single page shows that page instead.
    #[must_use]
    pub fn window(&self, max_buttons: u32) -> Vec<PageItem> {
        let last = self.total_pages();
        let max_buttons = max_buttons.max(5);
        if last <= max_buttons {
            return (1..=last).map(PageItem::Page).collect();
        }

        // Two slots belong to the first and last pages.
        let inner = max_buttons - 2;
        let half = inner / 2;
        let mut start = self.page.saturating_sub(half).max(2);
        let mut end = start + inner - 1;
        if end >= last {
            end = last - 1;
            start = end + 1 - inner;
        }

        let mut items = vec![PageItem::Page(1)];
        match start {
            2 => {}
            3 => items.push(PageItem::Page(2)),
            _ => items.push(PageItem::Gap),
        }
        items.extend((start..=end).map(PageItem::Page));
        match last - end {
            1 => {}
            2 => items.push(PageItem::Page(last - 1)),
            _ => items.push(PageItem::Gap),
        }
        items.push(PageItem::Page(last));
        items
    }
}
