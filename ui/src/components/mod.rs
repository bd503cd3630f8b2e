pub mod categories;
pub mod layout;
pub mod pagination;
pub mod product_card;
pub mod product_skeleton;
pub mod search_box;
pub mod sort_popup;

pub use categories::Categories;
pub use pagination::Pagination;
pub use product_card::ProductCard;
pub use product_skeleton::ProductSkeleton;
pub use search_box::SearchBox;
pub use sort_popup::SortPopup;
