use std::rc::Rc;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::actions::fetch_products;
use crate::controller::product_query;
use crate::state::{FilterState, ProductsState};
use crate::utils::scroll_to_top;

/// Fetch products whenever the filters change, including on mount.
///
/// Every change issues exactly one request and scrolls back to the top.
#[hook]
pub fn use_product_listing() -> Rc<ProductsState> {
    let filters = use_store_value::<FilterState>();
    let (products, dispatch) = use_store::<ProductsState>();

    let deps = (
        filters.category_id,
        filters.sort,
        filters.search_value.clone(),
        filters.current_page,
    );
    use_effect_with(deps, move |_| {
        fetch_products(dispatch, product_query(&filters));
        scroll_to_top();
    });

    products
}
