//! Paginated search-and-filter state shared by the list pages.
//!
//! A [`ListController`] owns the query state of one page (committed search
//! term, filters, current page) and the rows currently on screen. Every
//! operation that changes the query hands back a [`LoadTicket`]: the caller
//! performs the fetch with [`LoadTicket::params`] and returns the result
//! through [`ListController::apply`]. Tickets are numbered, so a response that
//! arrives after a newer request was issued is discarded instead of
//! overwriting fresher data.

use std::collections::BTreeMap;
use std::future::Future;

use crate::pagination::{
    DEFAULT_ITEMS_PER_PAGE, ListResponse, PageControls, PageRange, total_pages,
};
use crate::repository::ListParams;
use crate::services::ServiceError;

/// Filter value meaning "no constraint".
pub const ALL: &str = "all";

pub const DEFAULT_LOAD_ERROR: &str = "Erro ao carregar dados";

/// Predicate applied to fetched rows for filters the backend does not handle.
pub type ClientFilter<T> = fn(&T, &ListFilters) -> bool;

/// Active filters by name. Absent names mean "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilters(BTreeMap<String, String>);

impl ListFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a filter; `"all"` or a blank value removes it.
    pub fn set(&mut self, name: &str, value: &str) {
        let value = value.trim();
        if value.is_empty() || value == ALL {
            self.0.remove(name);
        } else {
            self.0.insert(name.to_string(), value.to_string());
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Everything a fetch depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: usize,
    pub search_term: String,
    pub filters: ListFilters,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            search_term: String::new(),
            filters: ListFilters::new(),
        }
    }
}

/// Per-page wiring: page size and which filters go to the server.
pub struct ListConfig<T> {
    pub items_per_page: usize,
    /// Filter names sent as query parameters.
    pub server_filters: &'static [&'static str],
    /// Applied to the fetched page for every other filter.
    pub client_filter: Option<ClientFilter<T>>,
    /// Toast text when a load fails without a backend message.
    pub error_message: &'static str,
}

impl<T> ListConfig<T> {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            items_per_page: items_per_page.max(1),
            server_filters: &[],
            client_filter: None,
            error_message: DEFAULT_LOAD_ERROR,
        }
    }

    pub fn server_filters(mut self, names: &'static [&'static str]) -> Self {
        self.server_filters = names;
        self
    }

    pub fn client_filter(mut self, filter: ClientFilter<T>) -> Self {
        self.client_filter = Some(filter);
        self
    }

    pub fn error_message(mut self, message: &'static str) -> Self {
        self.error_message = message;
        self
    }
}

impl<T> Default for ListConfig<T> {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}

impl<T> Clone for ListConfig<T> {
    fn clone(&self) -> Self {
        Self {
            items_per_page: self.items_per_page,
            server_filters: self.server_filters,
            client_filter: self.client_filter,
            error_message: self.error_message,
        }
    }
}

/// One issued load: the query it was issued for and the fetch parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub seq: u64,
    pub query: ListQuery,
    pub params: ListParams,
    /// Set by page navigation; the view should scroll back to the top.
    pub scroll_to_top: bool,
}

/// What [`ListController::apply`] did with a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// The load failed; carries the message to show.
    Failed(String),
    /// A newer load was issued meanwhile; nothing changed.
    Stale,
}

pub struct ListController<T> {
    config: ListConfig<T>,
    search_input: String,
    query: ListQuery,
    items: Vec<T>,
    total_items: usize,
    exact_total: bool,
    is_loading: bool,
    error: Option<String>,
    issued: u64,
}

impl<T> ListController<T> {
    pub fn new(config: ListConfig<T>) -> Self {
        Self {
            config,
            search_input: String::new(),
            query: ListQuery::default(),
            items: Vec::new(),
            total_items: 0,
            exact_total: true,
            is_loading: false,
            error: None,
            issued: 0,
        }
    }

    /// First load after the page is shown.
    pub fn mount(&mut self) -> LoadTicket {
        self.issue(false)
    }

    /// Updates the text box without fetching.
    pub fn set_search_input(&mut self, input: impl Into<String>) {
        self.search_input = input.into();
    }

    /// Commits the typed text as the search term and goes back to page 1.
    pub fn search(&mut self) -> LoadTicket {
        self.query.search_term = self.search_input.clone();
        self.query.page = 1;
        self.issue(false)
    }

    pub fn set_filter(&mut self, name: &str, value: &str) -> LoadTicket {
        self.query.filters.set(name, value);
        self.query.page = 1;
        self.issue(false)
    }

    /// Navigates to page `page`; the caller keeps it within `1..=total_pages`.
    pub fn set_page(&mut self, page: usize) -> LoadTicket {
        self.query.page = page.max(1);
        self.issue(true)
    }

    pub fn clear_filters(&mut self) -> LoadTicket {
        self.search_input.clear();
        self.query = ListQuery::default();
        self.issue(false)
    }

    /// Re-fetches the current query, e.g. after a dialog saved a record.
    pub fn reload(&mut self) -> LoadTicket {
        self.issue(false)
    }

    fn issue(&mut self, scroll_to_top: bool) -> LoadTicket {
        self.issued += 1;
        self.is_loading = true;

        let mut params = ListParams::paginate(self.query.page, self.config.items_per_page)
            .search(self.query.search_term.clone());
        for (name, value) in self.query.filters.iter() {
            if self.config.server_filters.contains(&name) {
                params = params.filter(name, value);
            }
        }

        log::debug!(
            "List load #{} page={} search={:?}",
            self.issued,
            self.query.page,
            self.query.search_term
        );

        LoadTicket {
            seq: self.issued,
            query: self.query.clone(),
            params,
            scroll_to_top,
        }
    }

    /// Applies the outcome of the fetch issued for `ticket`.
    ///
    /// Rows beyond the page size are dropped and client-side filters run after
    /// normalisation, so the total still counts the unfiltered page when the
    /// backend returned a bare array.
    pub fn apply<E>(&mut self, ticket: &LoadTicket, result: Result<ListResponse<T>, E>) -> ApplyOutcome
    where
        E: Into<ServiceError>,
    {
        if ticket.seq != self.issued {
            log::warn!(
                "Discarding stale list response #{} (latest is #{})",
                ticket.seq,
                self.issued
            );
            return ApplyOutcome::Stale;
        }

        self.is_loading = false;
        match result {
            Ok(response) => {
                let mut page = response.normalize();
                page.items.truncate(self.config.items_per_page);
                if let Some(filter) = self.config.client_filter {
                    let filters = &self.query.filters;
                    page.items.retain(|item| filter(item, filters));
                }
                self.items = page.items;
                self.total_items = page.total;
                self.exact_total = page.exact_total;
                self.error = None;
                ApplyOutcome::Applied
            }
            Err(err) => {
                let err = err.into();
                log::error!("Failed to load list page {}: {err}", ticket.query.page);
                let message = err.user_message(self.config.error_message);
                self.items.clear();
                self.total_items = 0;
                self.exact_total = true;
                self.error = Some(message.clone());
                ApplyOutcome::Failed(message)
            }
        }
    }

    /// Performs the fetch for `ticket` and applies its result.
    pub async fn run<F, Fut, E>(&mut self, ticket: LoadTicket, fetch: F) -> ApplyOutcome
    where
        F: FnOnce(ListParams) -> Fut,
        Fut: Future<Output = Result<ListResponse<T>, E>>,
        E: Into<ServiceError>,
    {
        let result = fetch(ticket.params.clone()).await;
        self.apply(&ticket, result)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// `false` when the total was approximated from a bare array.
    pub fn exact_total(&self) -> bool {
        self.exact_total
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.config.items_per_page)
    }

    pub fn current_page(&self) -> usize {
        self.query.page
    }

    pub fn items_per_page(&self) -> usize {
        self.config.items_per_page
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn search_term(&self) -> &str {
        &self.query.search_term
    }

    pub fn filters(&self) -> &ListFilters {
        &self.query.filters
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Message of the last failed load, cleared by the next success.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Range from the pagination formula.
    pub fn range(&self) -> PageRange {
        PageRange::new(self.query.page, self.config.items_per_page, self.total_items)
    }

    /// Range with the end bounded by the rows actually on screen.
    pub fn visible_range(&self) -> PageRange {
        let mut range = self.range();
        range.end = range.end.min(range.start - 1 + self.items.len());
        range
    }

    pub fn controls(&self) -> PageControls {
        PageControls::new(self.query.page, self.total_pages(), self.is_loading)
    }

    /// Caption under the table.
    pub fn summary(&self) -> String {
        if self.items.is_empty() {
            "Nenhum resultado encontrado".to_string()
        } else {
            self.visible_range().to_string()
        }
    }
}
