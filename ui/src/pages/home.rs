use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::{
    Categories, Pagination, ProductCard, ProductSkeleton, SortPopup,
};
use crate::controller::ListingView;
use crate::hooks::{use_filter_url_sync, use_product_listing};
use crate::state::{FilterAction, FilterState};

/// The product listing: filters, the product grid and pagination.
#[function_component]
pub fn HomePage() -> Html {
    let (filters, dispatch) = use_store::<FilterState>();

    // URL hydration must be declared before the fetch so its effects run
    // first within a render.
    use_filter_url_sync();
    let products = use_product_listing();

    let on_change_category = dispatch.apply_callback(FilterAction::SetCategoryId);
    let on_change_sort = dispatch.apply_callback(FilterAction::SetSort);
    let on_change_page = dispatch.apply_callback(FilterAction::SetCurrentPage);

    let listing = match ListingView::from_state(&products) {
        ListingView::Error => html! {
            <div class="text-center py-12">
                <h2 class="text-2xl font-bold">{"Something went wrong 😕"}</h2>
                <p class="mt-2 text-neutral-600 dark:text-neutral-400">
                    {"We couldn't load the products. Please try again later."}
                </p>
            </div>
        },
        ListingView::Skeletons(count) => html! {
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                {for (0..count).map(|i| html! { <ProductSkeleton key={i} /> })}
            </div>
        },
        ListingView::Items(items) => html! {
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                {for items.iter().map(|product| html! {
                    <ProductCard
                        key={product.id.to_string()}
                        product={product.clone()}
                    />
                })}
            </div>
        },
    };

    html! {
        <div>
            <div class="flex flex-wrap items-center justify-between gap-4">
                <Categories value={filters.category_id} {on_change_category} />
                <SortPopup value={filters.sort} {on_change_sort} />
            </div>
            <h2 class="mt-8 mb-6 text-3xl font-bold">{title(&filters)}</h2>
            {listing}
            <Pagination
                current_page={filters.current_page}
                {on_change_page}
            />
        </div>
    }
}

fn title(filters: &FilterState) -> String {
    if filters.search_value.is_empty() {
        "All products".to_string()
    } else {
        format!("Results for \"{}\"", filters.search_value)
    }
}
