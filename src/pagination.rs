//! Pagination helpers shared by every list page.

use std::fmt::{Display, Formatter};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 15;

/// A list endpoint answer in one of the two shapes the backend produces.
#[derive(Debug, Clone, PartialEq)]
pub enum ListResponse<T> {
    /// Plain JSON array; the true total is unknown.
    Bare(Vec<T>),
    /// `{items, total, page, size, pages}` object.
    Paged { items: Vec<T>, total: Option<usize> },
}

impl<T: DeserializeOwned> ListResponse<T> {
    /// Sniffs the JSON shape of a list response.
    ///
    /// Anything that is neither an array nor an object yields an empty page, as
    /// does an object without an `items` array. Only malformed rows are errors.
    pub fn from_json(value: Value) -> Result<Self, serde_json::Error> {
        match value {
            Value::Array(_) => Ok(ListResponse::Bare(serde_json::from_value(value)?)),
            Value::Object(mut map) => {
                let items = match map.remove("items") {
                    Some(items @ Value::Array(_)) => serde_json::from_value(items)?,
                    _ => {
                        log::warn!("List response object without an `items` array");
                        Vec::new()
                    }
                };
                let total = map
                    .get("total")
                    .and_then(Value::as_u64)
                    .and_then(|total| usize::try_from(total).ok());
                Ok(ListResponse::Paged { items, total })
            }
            other => {
                log::warn!("Unexpected list response shape: {other}");
                Ok(ListResponse::Paged {
                    items: Vec::new(),
                    total: None,
                })
            }
        }
    }
}

impl<T> ListResponse<T> {
    /// Collapses both shapes into a [`Page`].
    ///
    /// A bare array reports its own length as the total (a degraded total); an
    /// object reports `total`, falling back to the number of rows.
    pub fn normalize(self) -> Page<T> {
        match self {
            ListResponse::Bare(items) => Page {
                total: items.len(),
                exact_total: false,
                items,
            },
            ListResponse::Paged { items, total } => Page {
                total: total.unwrap_or(items.len()),
                exact_total: total.is_some(),
                items,
            },
        }
    }
}

/// Rows of one page plus the total reported for the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    /// `false` when `total` was approximated from the page length.
    pub exact_total: bool,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            exact_total: true,
        }
    }
}

/// `ceil(total_items / items_per_page)`.
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    total_items.div_ceil(items_per_page)
}

/// 1-based inclusive item range shown under a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRange {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

impl PageRange {
    pub fn new(current_page: usize, items_per_page: usize, total_items: usize) -> Self {
        let current_page = current_page.max(1);
        Self {
            start: (current_page - 1) * items_per_page + 1,
            end: (current_page * items_per_page).min(total_items),
            total: total_items,
        }
    }
}

impl Display for PageRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Mostrando {} a {} de {} resultados",
            self.start, self.end, self.total
        )
    }
}

/// Enabled state of the first/previous/next/last buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageControls {
    pub current_page: usize,
    pub total_pages: usize,
    pub first: bool,
    pub previous: bool,
    pub next: bool,
    pub last: bool,
}

impl PageControls {
    pub fn new(current_page: usize, total_pages: usize, is_loading: bool) -> Self {
        let can_go_previous = current_page > 1 && !is_loading;
        let can_go_next = current_page < total_pages && !is_loading;
        Self {
            current_page,
            total_pages,
            first: can_go_previous,
            previous: can_go_previous,
            next: can_go_next,
            last: can_go_next,
        }
    }
}

impl Display for PageControls {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Página {} de {}", self.current_page, self.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_array_uses_degraded_total() {
        let response = ListResponse::<u32>::from_json(json!([1, 2, 3])).unwrap();
        let page = response.normalize();
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.total, 3);
        assert!(!page.exact_total);
        assert_eq!(total_pages(page.total, 15), 1);
    }

    #[test]
    fn paged_object_keeps_reported_total() {
        let response = ListResponse::<u32>::from_json(json!({
            "items": [1, 2, 3, 4, 5],
            "total": 47,
            "page": 1,
            "size": 15,
            "pages": 4
        }))
        .unwrap();
        let page = response.normalize();
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.total, 47);
        assert!(page.exact_total);
        assert_eq!(total_pages(page.total, 15), 4);
    }

    #[test]
    fn paged_object_without_total_falls_back_to_length() {
        let page = ListResponse::<u32>::from_json(json!({"items": [1, 2], "total": null}))
            .unwrap()
            .normalize();
        assert_eq!(page.total, 2);
        assert!(!page.exact_total);
    }

    #[test]
    fn unexpected_shapes_become_empty_pages() {
        for value in [json!(null), json!("oops"), json!(12), json!({"data": [1]})] {
            let page = ListResponse::<u32>::from_json(value).unwrap().normalize();
            assert!(page.items.is_empty());
            assert_eq!(page.total, 0);
        }
    }

    #[test]
    fn malformed_rows_are_errors() {
        assert!(ListResponse::<u32>::from_json(json!(["x"])).is_err());
        assert!(ListResponse::<u32>::from_json(json!({"items": ["x"]})).is_err());
    }

    #[test]
    fn range_follows_formula() {
        assert_eq!(PageRange::new(2, 10, 50).to_string(), "Mostrando 11 a 20 de 50 resultados");
        assert_eq!(PageRange::new(4, 15, 47), PageRange { start: 46, end: 47, total: 47 });
        assert_eq!(PageRange::new(1, 15, 47).end, 15);

        for page in 1..=6 {
            for total in 1..=60 {
                let range = PageRange::new(page, 10, total);
                assert_eq!(range.start, (page - 1) * 10 + 1);
                assert_eq!(range.end, (page * 10).min(total));
                if page <= total_pages(total, 10) {
                    assert!(range.start <= range.end);
                }
            }
        }
    }

    #[test]
    fn controls_disable_at_bounds_and_while_loading() {
        let first = PageControls::new(1, 4, false);
        assert!(!first.first && !first.previous && first.next && first.last);

        let last = PageControls::new(4, 4, false);
        assert!(last.first && last.previous && !last.next && !last.last);

        let loading = PageControls::new(2, 4, true);
        assert!(!loading.first && !loading.previous && !loading.next && !loading.last);

        assert_eq!(PageControls::new(2, 5, false).to_string(), "Página 2 de 5");
    }
}
