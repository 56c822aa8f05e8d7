//! Pagination over in-memory fixture lists.
//!
//! # Design
//! Page parameters arrive from the frontend as either JSON numbers or query
//! strings, so [`PageParam`] accepts both shapes and coerces lazily, reading
//! a leading integer the way `parseInt` does. A value with no leading digits
//! yields an empty page rather than an error, matching the envelope rule
//! that failures are data. Offset arithmetic is checked: inputs large enough
//! to overflow slice to empty instead of panicking.

use serde::{Deserialize, Serialize};

use crate::envelope::ResponseEnvelope;

/// One page slice plus the length of the full list it was cut from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageData<T> {
    pub items: Vec<T>,
    pub total: usize,
}

/// A page number or page size as received on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PageParam {
    Num(i64),
    Text(String),
}

impl PageParam {
    /// Coerce to an integer the way `parseInt` does: an optional sign and
    /// the leading digits, ignoring trailing text. `None` when no digits
    /// lead the value.
    pub fn coerce(&self) -> Option<i64> {
        match self {
            PageParam::Num(n) => Some(*n),
            PageParam::Text(s) => parse_leading_int(s.trim()),
        }
    }
}

/// Prefix integer parse: optional `+`/`-`, then as many digits as follow.
/// Values past the `i64` range saturate, which downstream slicing turns
/// into an empty page.
fn parse_leading_int(s: &str) -> Option<i64> {
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }
    let mut value: i64 = 0;
    for b in digits.bytes() {
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }
    Some(if negative { value.saturating_neg() } else { value })
}

impl From<i64> for PageParam {
    fn from(n: i64) -> Self {
        PageParam::Num(n)
    }
}

impl From<&str> for PageParam {
    fn from(s: &str) -> Self {
        PageParam::Text(s.to_string())
    }
}

/// Slice `items` for 1-indexed page `page_no` of size `page_size`.
///
/// `offset = (page_no - 1) * page_size`; a page that would run past the end
/// of `items` is cut short at the tail. Offsets outside `0..items.len()`
/// (page 0, negative pages, pages past the end) yield an empty slice, and so
/// do inputs whose offset arithmetic overflows `i64`.
pub fn paginate<T>(page_no: i64, page_size: i64, items: &[T]) -> &[T] {
    let len = items.len() as i64;
    let offset = match page_no
        .checked_sub(1)
        .and_then(|pages| pages.checked_mul(page_size))
    {
        Some(offset) if (0..len).contains(&offset) => offset,
        _ => return &[],
    };
    // Overflow here means the page end is far past the tail anyway.
    let end = match offset.checked_add(page_size) {
        Some(end) if end < len => end,
        _ => len,
    };
    if end <= offset {
        return &[];
    }
    &items[offset as usize..end as usize]
}

/// Success envelope for one page of `list`.
///
/// `items` is the requested slice, `total` the full list length. A page
/// parameter that fails to coerce produces an empty `items` while `total`
/// still reports the whole list.
pub fn page_ok<T: Clone>(
    page: &PageParam,
    page_size: &PageParam,
    list: &[T],
) -> ResponseEnvelope<PageData<T>> {
    page_ok_with_msg(page, page_size, list, "ok")
}

/// Same as [`page_ok`] with a caller-chosen message.
pub fn page_ok_with_msg<T: Clone>(
    page: &PageParam,
    page_size: &PageParam,
    list: &[T],
    msg: impl Into<String>,
) -> ResponseEnvelope<PageData<T>> {
    let items = match (page.coerce(), page_size.coerce()) {
        (Some(page_no), Some(size)) => paginate(page_no, size, list).to_vec(),
        _ => Vec::new(),
    };
    ResponseEnvelope::ok_with_msg(
        PageData {
            items,
            total: list.len(),
        },
        msg,
    )
}
