//! Page-boundary arithmetic shared by all paged queries.
//!
//! Offsets are zero-based and inclusive, matching the range semantics of the
//! backing store. A request past the last page is an error rather than an
//! empty result so callers can distinguish it from a genuinely empty set.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("requested page {page} with page size {per_page} is out of range for total count {total}")]
pub struct PageOutOfRange {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}

/// Zero-based inclusive slice of a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    pub start: u64,
    pub end: u64,
}

/// Computes the slice covered by a 1-based `page` of `per_page` rows out of
/// `total` rows.
///
/// Returns `Ok(None)` when `total` is zero so callers can skip the range
/// query entirely. `page == 0` and `per_page == 0` are rejected upstream by
/// the handlers; here they count as out of range.
pub fn page_bounds(
    page: u32,
    per_page: u32,
    total: u64,
) -> Result<Option<PageBounds>, PageOutOfRange> {
    if total == 0 {
        return Ok(None);
    }

    let out_of_range = PageOutOfRange {
        page,
        per_page,
        total,
    };

    if page == 0 || per_page == 0 {
        return Err(out_of_range);
    }

    let per_page = u64::from(per_page);
    let page = u64::from(page);

    let last_page = total.div_ceil(per_page);
    if page > last_page {
        return Err(out_of_range);
    }

    let start = (page - 1) * per_page;
    let end = (page * per_page).min(total) - 1;

    Ok(Some(PageBounds { start, end }))
}
