use payloads::Product;
use std::rc::Rc;
use yewdux::prelude::*;

/// One of the fixed orderings offered by the sort selector.
///
/// A leading `-` on the sort property marks the ascending variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortSpec {
    #[default]
    PopularityDesc,
    PopularityAsc,
    PriceDesc,
    PriceAsc,
    TitleDesc,
    TitleAsc,
}

impl SortSpec {
    /// Every sort order, in selector order. The first is the default.
    pub const ALL: [SortSpec; 6] = [
        Self::PopularityDesc,
        Self::PopularityAsc,
        Self::PriceDesc,
        Self::PriceAsc,
        Self::TitleDesc,
        Self::TitleAsc,
    ];

    pub fn sort_property(&self) -> &'static str {
        match self {
            Self::PopularityDesc => "rating",
            Self::PopularityAsc => "-rating",
            Self::PriceDesc => "price",
            Self::PriceAsc => "-price",
            Self::TitleDesc => "title",
            Self::TitleAsc => "-title",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::PopularityDesc => "popularity (desc)",
            Self::PopularityAsc => "popularity (asc)",
            Self::PriceDesc => "price (desc)",
            Self::PriceAsc => "price (asc)",
            Self::TitleDesc => "alphabet (desc)",
            Self::TitleAsc => "alphabet (asc)",
        }
    }

    pub fn from_sort_property(property: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|spec| spec.sort_property() == property)
    }
}

/// Filters that parameterize the product listing.
#[derive(Debug, Clone, PartialEq, Eq, Store)]
pub struct FilterState {
    /// 0 lists every category.
    pub category_id: u32,
    pub sort: SortSpec,
    pub search_value: String,
    /// 1-based.
    pub current_page: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category_id: 0,
            sort: SortSpec::default(),
            search_value: String::new(),
            current_page: 1,
        }
    }
}

/// Mutations of [`FilterState`]. Apply with `Dispatch::apply`.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterAction {
    SetCategoryId(u32),
    SetSort(SortSpec),
    SetSearchValue(String),
    SetCurrentPage(u32),
    /// Overwrite every field at once (used when hydrating from the URL).
    SetFilters(FilterState),
    /// Back to the defaults, matching a bare `/` URL.
    Reset,
}

impl FilterState {
    pub fn apply_action(&mut self, action: FilterAction) {
        match action {
            FilterAction::SetCategoryId(category_id) => {
                self.category_id = category_id;
            }
            FilterAction::SetSort(sort) => self.sort = sort,
            FilterAction::SetSearchValue(search_value) => {
                self.search_value = search_value;
            }
            FilterAction::SetCurrentPage(page) => {
                self.current_page = page.max(1);
            }
            FilterAction::SetFilters(filters) => {
                *self = filters;
                self.current_page = self.current_page.max(1);
            }
            FilterAction::Reset => *self = FilterState::default(),
        }
    }
}

impl Reducer<FilterState> for FilterAction {
    fn apply(self, mut state: Rc<FilterState>) -> Rc<FilterState> {
        Rc::make_mut(&mut state).apply_action(self);
        state
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Sequence number of a product request. Later requests compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct RequestId(pub u64);

/// Outcome of the product listing requests.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct ProductsState {
    /// Items of the latest successful request. Kept while a newer request
    /// is loading or after it fails.
    pub items: Vec<Product>,
    pub status: FetchStatus,
    latest_request: RequestId,
}

impl ProductsState {
    /// Record that a new request is in flight and return its id.
    pub fn begin_request(&mut self) -> RequestId {
        self.latest_request = RequestId(self.latest_request.0 + 1);
        self.status = FetchStatus::Loading;
        self.latest_request
    }

    /// Apply the outcome of request `id`. Outcomes of superseded requests
    /// are dropped; returns whether this one was applied.
    pub fn resolve(
        &mut self,
        id: RequestId,
        outcome: Result<Vec<Product>, String>,
    ) -> bool {
        if id != self.latest_request || self.status != FetchStatus::Loading {
            return false;
        }

        match outcome {
            Ok(items) => {
                self.items = items;
                self.status = FetchStatus::Success;
            }
            Err(_) => self.status = FetchStatus::Error,
        }
        true
    }
}
