use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::Route;
use crate::controller::UrlSync;
use crate::query;
use crate::state::FilterState;

/// Keep the filter store and the page's query string in step.
///
/// At mount the query string (if any) is loaded into the store. After that,
/// changes to the category, sort or page replace the query string without
/// adding a history entry. Search text stays out of the URL.
#[hook]
pub fn use_filter_url_sync() {
    let (filters, dispatch) = use_store::<FilterState>();
    let location = use_location();
    let navigator = use_navigator();
    let url_sync = use_mut_ref(UrlSync::default);

    {
        let url_sync = url_sync.clone();
        let filters = filters.clone();
        let raw_query = location
            .map(|location| location.query_str().to_string())
            .unwrap_or_default();

        use_effect_with((), move |_| {
            let action = url_sync.borrow_mut().hydrate(&filters, &raw_query);
            if let Some(action) = action {
                dispatch.apply(action);
            }
        });
    }

    let deps = (filters.category_id, filters.sort, filters.current_page);
    use_effect_with(deps, move |_| {
        let Some(url_query) = url_sync.borrow_mut().sync(&filters) else {
            return;
        };
        let Some(navigator) = navigator else {
            tracing::warn!("No router available, skipping URL update");
            return;
        };

        tracing::debug!(query = %query::encode(&url_query), "Updating URL");
        if let Err(e) = navigator
            .replace_with_query(&Route::Home, &Vec::from(url_query.pairs()))
        {
            tracing::warn!(error = ?e, "Failed to update URL query");
        }
    });
}
