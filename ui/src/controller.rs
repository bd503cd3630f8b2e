//! Coordination between the filter store, the URL and product requests.
//!
//! Nothing here touches the browser; the home page feeds these types from
//! its effects.

use payloads::{Product, SortOrder, requests::ProductQuery};

use crate::query::{self, UrlQuery};
use crate::state::{FetchStatus, FilterAction, FilterState, ProductsState};

/// Placeholder cards shown while products load.
pub const SKELETON_COUNT: usize = 4;

/// Build the backend request for the current filters.
///
/// A `-` in the sort property selects ascending order; its absence selects
/// descending. The backend depends on this mapping.
pub fn product_query(filter: &FilterState) -> ProductQuery {
    let property = filter.sort.sort_property();
    let order = if property.contains('-') {
        SortOrder::Asc
    } else {
        SortOrder::Desc
    };
    let category = if filter.category_id > 0 {
        format!("&category={}", filter.category_id)
    } else {
        String::new()
    };
    let search = if filter.search_value.is_empty() {
        String::new()
    } else {
        format!("&search={}", filter.search_value)
    };

    ProductQuery {
        sort_by: property.replace('-', ""),
        order,
        category,
        search,
        current_page: filter.current_page.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HydrationPhase {
    /// Nothing has run yet.
    #[default]
    NotHydrated,
    /// Filters from the URL were dispatched; waiting for the store to show
    /// them.
    Hydrating(UrlQuery),
    /// Filter changes are written to the URL.
    Ready,
}

/// Two-way synchronization between the filter store and the URL.
///
/// The URL is read once at mount and then only written. Writes start after
/// the first render, or after hydrated filters reach the store, so the
/// pre-hydration defaults never overwrite the incoming query.
#[derive(Debug, Default)]
pub struct UrlSync {
    phase: HydrationPhase,
}

impl UrlSync {
    pub fn phase(&self) -> &HydrationPhase {
        &self.phase
    }

    /// Read the filters carried by the URL at mount.
    ///
    /// Returns the action that loads them into the store, or `None` if the
    /// URL has no query string.
    pub fn hydrate(
        &mut self,
        current: &FilterState,
        raw_query: &str,
    ) -> Option<FilterAction> {
        let raw_query = raw_query.strip_prefix('?').unwrap_or(raw_query);
        if raw_query.is_empty() {
            return None;
        }

        let filters = query::decode(raw_query).into_filter();
        let target = UrlQuery::from_filter(&filters);

        // The first sync call of the mount render is skipped either way. If
        // it already ran and the store shows the target, no store change
        // will call sync again, so writes start now.
        let store_matches =
            target.same_persisted(&UrlQuery::from_filter(current));
        self.phase = if store_matches && self.phase == HydrationPhase::Ready {
            HydrationPhase::Ready
        } else {
            HydrationPhase::Hydrating(target)
        };

        tracing::debug!(?filters, "Hydrating filters from URL");
        Some(FilterAction::SetFilters(filters))
    }

    /// Called whenever the persisted filters change. Returns the query to
    /// write to the URL, if any.
    pub fn sync(&mut self, filter: &FilterState) -> Option<UrlQuery> {
        match &self.phase {
            HydrationPhase::NotHydrated => {
                self.phase = HydrationPhase::Ready;
                None
            }
            HydrationPhase::Hydrating(target) => {
                if target.same_persisted(&UrlQuery::from_filter(filter)) {
                    self.phase = HydrationPhase::Ready;
                }
                None
            }
            HydrationPhase::Ready => Some(UrlQuery::from_filter(filter)),
        }
    }
}

/// What the product grid shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingView<'a> {
    Error,
    Skeletons(usize),
    Items(&'a [Product]),
}

impl<'a> ListingView<'a> {
    pub fn from_state(products: &'a ProductsState) -> Self {
        match products.status {
            FetchStatus::Error => Self::Error,
            FetchStatus::Loading => Self::Skeletons(SKELETON_COUNT),
            FetchStatus::Idle | FetchStatus::Success => {
                Self::Items(&products.items)
            }
        }
    }
}
