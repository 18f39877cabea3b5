// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{Record, SortDirection, SortField};

pub const PAGE_SIZE: usize = 15;

/// Keeps the records whose name contains `query`, ignoring case. The
/// description is never searched and relative order is preserved.
pub fn filter<'a>(query: &str, records: &'a [Record]) -> Vec<&'a Record> {
    if query.is_empty() {
        return records.iter().collect();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| record.name.to_lowercase().contains(&needle))
        .collect()
}

/// Orders records by `field`. Descending is the exact reverse of the stable
/// ascending order, so equal keys come out in reverse insertion order.
pub fn sort<'a>(
    mut records: Vec<&'a Record>,
    field: SortField,
    direction: SortDirection,
) -> Vec<&'a Record> {
    records.sort_by(|left, right| field.value(left).cmp(field.value(right)));
    if direction == SortDirection::Descending {
        records.reverse();
    }
    records
}

/// Returns the 1-based `page` window of `items`. Pages past the end yield an
/// empty slice; callers clamp the page number.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Page count used for navigation bounds.
///
/// This is `1 + count / page_size`, not a ceiling division: an exact multiple
/// of `page_size` gets one trailing empty page (15 items at 15 per page is 2
/// pages).
pub fn total_pages(filtered_count: usize, page_size: usize) -> usize {
    1 + filtered_count / page_size.max(1)
}
