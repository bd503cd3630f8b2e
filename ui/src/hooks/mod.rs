pub mod use_filter_url_sync;
pub mod use_product_listing;

pub use use_filter_url_sync::use_filter_url_sync;
pub use use_product_listing::use_product_listing;
