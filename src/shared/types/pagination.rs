/// A resolved page request.
///
/// `page` is 1-based and `page_size` is the number of rows per page. The
/// number of rows to skip is derived from both and never supplied directly.
/// Largest row count a SQL `LIMIT`/`OFFSET` can carry.
pub const MAX_ROWS: u64 = i64::MAX as u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
}

impl PageRequest {
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Rows to skip before the first row of this page: `(page - 1) * page_size`,
    /// capped at [`MAX_ROWS`]. A page past the end simply yields no rows.
    pub fn skip(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.page_size)
            .min(MAX_ROWS)
    }

    pub fn limit(&self) -> u64 {
        self.page_size.min(MAX_ROWS)
    }
}
