use payloads::requests::ProductQuery;
use yewdux::prelude::*;

use crate::get_api_client;
use crate::state::{ProductsState, RequestId};

/// Request a page of products and record the outcome in [`ProductsState`].
///
/// Each call is tagged with a fresh request id; if another call starts
/// before this one resolves, this one's outcome is discarded.
pub fn fetch_products(dispatch: Dispatch<ProductsState>, query: ProductQuery) {
    let mut request_id = RequestId::default();
    dispatch.reduce_mut(|state| request_id = state.begin_request());

    tracing::debug!(?request_id, ?query, "Fetching products");

    yew::platform::spawn_local(async move {
        let api_client = get_api_client();
        let outcome = api_client
            .list_products(&query)
            .await
            .map_err(|e| e.to_string());

        if let Err(error) = &outcome {
            tracing::warn!(?request_id, %error, "Product request failed");
        }

        let mut applied = false;
        dispatch.reduce_mut(|state| {
            applied = state.resolve(request_id, outcome);
        });
        if !applied {
            tracing::debug!(?request_id, "Dropped superseded product response");
        }
    });
}
