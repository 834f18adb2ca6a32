use crate::domain::post::PageCursor;

/// One page of results plus the token needed to fetch the next one.
///
/// Exhaustion is computed from two independent signals: a page shorter than
/// what was asked for, or a store that returned no cursor. Either alone marks
/// the sequence final, which defends against a last page that happens to be
/// exactly `page_size` long while the store already knows there is nothing
/// after it.
#[derive(Debug, Clone)]
pub struct CursorPage<T> {
    pub items: Vec<T>,
    pub next_cursor: Option<PageCursor>,
    pub has_more: bool,
}

impl<T> CursorPage<T> {
    pub fn new(items: Vec<T>, next_cursor: Option<PageCursor>, page_size: u32) -> Self {
        let has_more = next_cursor.is_some() && items.len() as u64 >= u64::from(page_size);
        Self {
            items,
            next_cursor,
            has_more,
        }
    }

    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            next_cursor: None,
            has_more: false,
        }
    }
}
