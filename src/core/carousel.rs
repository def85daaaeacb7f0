/// Paged position of a review carousel showing `per_view` items at a time.
///
/// Paging wraps in both directions. A carousel with no items has no pages and
/// stays on page 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    items: usize,
    per_view: usize,
    page: usize,
}

impl Carousel {
    pub fn new(items: usize, per_view: usize) -> Self {
        Self {
            items,
            per_view: per_view.max(1),
            page: 0,
        }
    }

    #[inline]
    pub fn pages(&self) -> usize {
        self.items.div_ceil(self.per_view)
    }

    #[inline]
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn next(&mut self) -> usize {
        let pages = self.pages();
        if pages > 0 {
            self.page = (self.page + 1) % pages;
        }
        self.page
    }

    pub fn prev(&mut self) -> usize {
        let pages = self.pages();
        if pages > 0 {
            self.page = (self.page + pages - 1) % pages;
        }
        self.page
    }

    /// Track translation in percent of the visible width (negated on apply).
    pub fn offset_percent(&self) -> usize {
        self.page * 100
    }
}
