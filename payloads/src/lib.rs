pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};
pub use responses::Product;

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Products per backend page.
pub const PAGE_SIZE: u32 = 4;

/// Backend identifier of a product. Opaque to the frontend; only used as a
/// render key and compared for equality.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize,
    Deserialize,
)]
pub struct ProductId(pub String);

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Direction passed to the backend's `order` parameter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[display("asc")]
    Asc,
    #[display("desc")]
    Desc,
}
