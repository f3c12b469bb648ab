use std::num::NonZeroUsize;

pub const QUESTIONS_PER_PAGE: usize = 10;

/// 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(NonZeroUsize);

impl Page {
    pub const FIRST: Page = Page(NonZeroUsize::MIN);

    pub fn new(number: usize) -> Option<Page> {
        NonZeroUsize::new(number).map(Page)
    }

    /// Lenient parse of a `?page=` value: anything that is not a positive
    /// integer falls back to the first page.
    pub fn parse(raw: &str) -> Page {
        raw.trim()
            .parse::<usize>()
            .ok()
            .and_then(Page::new)
            .unwrap_or_default()
    }

    pub fn number(self) -> usize {
        self.0.get()
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::FIRST
    }
}

/// Returns the `page`-th window of `QUESTIONS_PER_PAGE` items, or an empty
/// slice past the end.
pub fn paginate<T>(page: Page, items: &[T]) -> &[T] {
    let start = (page.number() - 1).saturating_mul(QUESTIONS_PER_PAGE);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}
