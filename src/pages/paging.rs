//! Pager arithmetic shared by the score tables.

#[cfg(test)]
#[path = "paging_test.rs"]
mod paging_test;

/// Number of pages needed for `total` records at `page_size` per page,
/// never less than one.
pub fn total_pages(total: i64, page_size: u32) -> u32 {
    let total = u64::try_from(total).unwrap_or(0);
    if total == 0 || page_size == 0 {
        return 1;
    }
    let pages = total.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Clamp a requested page into the valid range for `total` records.
pub fn clamp_page(requested: u32, total: i64, page_size: u32) -> u32 {
    requested.max(1).min(total_pages(total, page_size))
}
