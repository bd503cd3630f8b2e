use crate::SortOrder;
use serde::{Deserialize, Serialize};

/// Parameters of a product listing request.
///
/// `category` and `search` are pre-rendered query fragments: either empty or
/// of the form `&category=N` / `&search=text`. They are appended to the
/// request URL verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductQuery {
    pub sort_by: String,
    pub order: SortOrder,
    pub category: String,
    pub search: String,
    pub current_page: String,
}
