//! Filters persisted in the page URL's query string.

use url::form_urlencoded;

use crate::state::{FilterState, SortSpec};

const SORT_PROPERTY: &str = "sortProperty";
const CATEGORY_ID: &str = "categoryId";
const CURRENT_PAGE: &str = "currentPage";
const SEARCH: &str = "search";

/// The URL-side view of [`FilterState`].
///
/// `search` is read when present but never written back to the URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlQuery {
    pub sort_property: String,
    pub category_id: u32,
    pub current_page: u32,
    pub search: String,
}

impl Default for UrlQuery {
    fn default() -> Self {
        Self::from_filter(&FilterState::default())
    }
}

impl UrlQuery {
    pub fn from_filter(filter: &FilterState) -> Self {
        Self {
            sort_property: filter.sort.sort_property().to_string(),
            category_id: filter.category_id,
            current_page: filter.current_page,
            search: filter.search_value.clone(),
        }
    }

    /// Filters described by this query. Unknown sort properties select the
    /// default sort.
    pub fn into_filter(self) -> FilterState {
        FilterState {
            category_id: self.category_id,
            sort: SortSpec::from_sort_property(&self.sort_property)
                .unwrap_or_default(),
            search_value: self.search,
            current_page: self.current_page.max(1),
        }
    }

    /// The key/value pairs written to the URL, in order.
    pub fn pairs(&self) -> [(&'static str, String); 3] {
        [
            (SORT_PROPERTY, self.sort_property.clone()),
            (CATEGORY_ID, self.category_id.to_string()),
            (CURRENT_PAGE, self.current_page.to_string()),
        ]
    }

    /// Whether both queries agree on the keys that are written to the URL.
    pub fn same_persisted(&self, other: &UrlQuery) -> bool {
        self.sort_property == other.sort_property
            && self.category_id == other.category_id
            && self.current_page == other.current_page
    }
}

/// Serialize the persisted keys, without a leading `?`.
pub fn encode(query: &UrlQuery) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in query.pairs() {
        serializer.append_pair(key, &value);
    }
    serializer.finish()
}

/// Parse a query string, with or without its leading `?`.
///
/// Never fails: missing or malformed values keep their defaults and unknown
/// keys are ignored. When a key repeats, the last value wins.
pub fn decode(raw: &str) -> UrlQuery {
    let raw = raw.strip_prefix('?').unwrap_or(raw);
    let mut query = UrlQuery::default();

    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        match key.as_ref() {
            SORT_PROPERTY => query.sort_property = value.into_owned(),
            CATEGORY_ID => {
                if let Ok(category_id) = value.trim().parse() {
                    query.category_id = category_id;
                }
            }
            CURRENT_PAGE => {
                if let Ok(page) = value.trim().parse::<u32>()
                    && page >= 1
                {
                    query.current_page = page;
                }
            }
            SEARCH => query.search = value.into_owned(),
            _ => {}
        }
    }

    query
}
