//! Drives the home page's effect wiring without a browser: hydration, URL
//! sync and the fetch trigger run in declaration order after every render,
//! and store updates made by an effect trigger the next render.

use payloads::{Product, ProductId, SortOrder, requests::ProductQuery};
use rust_decimal::Decimal;
use ui::components::pagination::{PAGE_COUNT, next_page};
use ui::controller::{
    HydrationPhase, ListingView, SKELETON_COUNT, UrlSync, product_query,
};
use ui::query;
use ui::state::{
    FetchStatus, FilterAction, FilterState, ProductsState, RequestId,
    SortSpec,
};

type FetchDeps = (u32, SortSpec, String, u32);
type SyncDeps = (u32, SortSpec, u32);

struct TestPage {
    filters: FilterState,
    products: ProductsState,
    url_sync: UrlSync,
    url: String,
    mounted: bool,
    sync_deps: Option<SyncDeps>,
    fetch_deps: Option<FetchDeps>,
    fetches: Vec<(RequestId, ProductQuery)>,
    url_writes: Vec<String>,
    scrolls: usize,
}

impl TestPage {
    fn mount(url: &str) -> Self {
        let mut page = Self {
            filters: FilterState::default(),
            products: ProductsState::default(),
            url_sync: UrlSync::default(),
            url: url.to_string(),
            mounted: false,
            sync_deps: None,
            fetch_deps: None,
            fetches: vec![],
            url_writes: vec![],
            scrolls: 0,
        };
        page.render();
        page
    }

    fn query_str(&self) -> &str {
        self.url.find('?').map(|i| &self.url[i..]).unwrap_or("")
    }

    fn dispatch(&mut self, action: FilterAction) {
        let before = self.filters.clone();
        self.filters.apply_action(action);
        if self.filters != before {
            self.render();
        }
    }

    fn render(&mut self) {
        let mut dispatched = vec![];

        if !self.mounted {
            self.mounted = true;
            let raw_query = self.query_str().to_string();
            if let Some(action) =
                self.url_sync.hydrate(&self.filters, &raw_query)
            {
                dispatched.push(action);
            }
        }

        let sync_deps = (
            self.filters.category_id,
            self.filters.sort,
            self.filters.current_page,
        );
        if self.sync_deps.as_ref() != Some(&sync_deps) {
            self.sync_deps = Some(sync_deps);
            if let Some(url_query) = self.url_sync.sync(&self.filters) {
                self.url = format!("/?{}", query::encode(&url_query));
                self.url_writes.push(self.url.clone());
            }
        }

        let fetch_deps = (
            self.filters.category_id,
            self.filters.sort,
            self.filters.search_value.clone(),
            self.filters.current_page,
        );
        if self.fetch_deps.as_ref() != Some(&fetch_deps) {
            self.fetch_deps = Some(fetch_deps);
            let id = self.products.begin_request();
            self.fetches.push((id, product_query(&self.filters)));
            self.scrolls += 1;
        }

        for action in dispatched {
            self.dispatch(action);
        }
    }

    fn last_fetch(&self) -> &(RequestId, ProductQuery) {
        self.fetches.last().unwrap()
    }
}

fn product(id: &str) -> Product {
    Product {
        id: ProductId::from(id),
        title: format!("Product {id}"),
        price: Decimal::from(12),
        image_url: format!("https://img.test/{id}.png"),
        category: 1,
        rating: 5,
        sizes: vec![26, 30],
        types: vec![0],
    }
}

#[test]
fn test_mount_without_query_does_not_touch_url() {
    let page = TestPage::mount("/");

    assert_eq!(page.url, "/");
    assert!(page.url_writes.is_empty());
    assert_eq!(page.fetches.len(), 1);
    assert_eq!(page.scrolls, 1);
    assert_eq!(page.url_sync.phase(), &HydrationPhase::Ready);

    let (_, query) = page.last_fetch();
    assert_eq!(query.sort_by, "rating");
    assert_eq!(query.order, SortOrder::Desc);
    assert_eq!(query.current_page, "1");
}

#[test]
fn test_mount_with_query_hydrates_without_rewriting_url() {
    let url = "/?sortProperty=price&categoryId=3&currentPage=2";
    let page = TestPage::mount(url);

    assert_eq!(page.filters.sort, SortSpec::PriceDesc);
    assert_eq!(page.filters.category_id, 3);
    assert_eq!(page.filters.current_page, 2);
    assert_eq!(page.url, url);
    assert!(page.url_writes.is_empty());
    assert_eq!(page.url_sync.phase(), &HydrationPhase::Ready);

    let (_, query) = page.last_fetch();
    assert_eq!(query.sort_by, "price");
    assert_eq!(query.category, "&category=3");
    assert_eq!(query.current_page, "2");
}

#[test]
fn test_mount_with_search_only_keeps_url() {
    let page = TestPage::mount("/?search=ham");

    assert_eq!(page.filters.search_value, "ham");
    assert_eq!(page.url, "/?search=ham");
    assert!(page.url_writes.is_empty());
    assert_eq!(page.url_sync.phase(), &HydrationPhase::Ready);
    assert_eq!(page.last_fetch().1.search, "&search=ham");
}

#[test]
fn test_mount_with_only_unusable_keys_keeps_url() {
    let url = "/?currentPage=abc&utm_source=x";
    let mut page = TestPage::mount(url);

    assert_eq!(page.filters, FilterState::default());
    assert_eq!(page.url, url);
    assert!(page.url_writes.is_empty());

    page.dispatch(FilterAction::SetCategoryId(2));
    assert_eq!(
        page.url_writes,
        vec!["/?sortProperty=rating&categoryId=2&currentPage=1".to_string()]
    );
}

#[test]
fn test_mount_with_largest_page() {
    let url = "/?currentPage=4294967295";
    let mut page = TestPage::mount(url);

    assert_eq!(page.filters.current_page, u32::MAX);
    assert_eq!(page.url, url);
    assert_eq!(page.last_fetch().1.current_page, "4294967295");

    // "Next" from there lands on the last real page.
    page.dispatch(FilterAction::SetCurrentPage(next_page(
        page.filters.current_page,
        PAGE_COUNT,
    )));
    assert_eq!(page.filters.current_page, PAGE_COUNT);
    assert_eq!(
        page.url,
        "/?sortProperty=rating&categoryId=0&currentPage=3"
    );
}

#[test]
fn test_home_link_resets_filters_and_url() {
    let mut page = TestPage::mount("/?categoryId=3&currentPage=2");
    page.dispatch(FilterAction::SetSearchValue("ham".into()));
    let fetches = page.fetches.len();

    // The link navigates to a bare `/` and resets the store.
    page.url = "/".to_string();
    page.dispatch(FilterAction::Reset);

    assert_eq!(page.filters, FilterState::default());
    assert_eq!(
        page.url,
        "/?sortProperty=rating&categoryId=0&currentPage=1"
    );
    assert_eq!(page.url_writes.len(), 1);
    assert_eq!(page.fetches.len(), fetches + 1);
    assert_eq!(query::decode(page.query_str()).into_filter(), page.filters);
}

#[test]
fn test_response_for_pre_hydration_filters_is_dropped() {
    let mut page = TestPage::mount("/?categoryId=2");
    assert_eq!(page.fetches.len(), 2);

    let (stale, _) = page.fetches[0].clone();
    let (current, _) = page.fetches[1].clone();

    assert!(page.products.resolve(current, Ok(vec![product("2")])));
    assert!(!page.products.resolve(stale, Ok(vec![product("1")])));
    assert_eq!(page.products.items, vec![product("2")]);
}

#[test]
fn test_page_change_fetches_once_and_updates_url_once() {
    let mut page = TestPage::mount("/");
    page.dispatch(FilterAction::SetCurrentPage(2));

    assert_eq!(page.fetches.len(), 2);
    assert_eq!(page.scrolls, 2);
    assert_eq!(
        page.url_writes,
        vec!["/?sortProperty=rating&categoryId=0&currentPage=2".to_string()]
    );
    assert_eq!(page.last_fetch().1.current_page, "2");

    // Re-selecting the same page changes nothing.
    page.dispatch(FilterAction::SetCurrentPage(2));
    assert_eq!(page.fetches.len(), 2);
    assert_eq!(page.url_writes.len(), 1);
}

#[test]
fn test_filter_changes_after_hydration_are_written() {
    let mut page = TestPage::mount("/?sortProperty=-title&currentPage=3");
    page.dispatch(FilterAction::SetCategoryId(4));

    assert_eq!(
        page.url,
        "/?sortProperty=-title&categoryId=4&currentPage=3"
    );
    let (_, query) = page.last_fetch();
    assert_eq!(query.sort_by, "title");
    assert_eq!(query.order, SortOrder::Asc);
    assert_eq!(query.category, "&category=4");
}

#[test]
fn test_search_fetches_without_url_update() {
    let mut page = TestPage::mount("/");
    page.dispatch(FilterAction::SetSearchValue("veggie".into()));

    assert_eq!(page.fetches.len(), 2);
    assert!(page.url_writes.is_empty());
    assert_eq!(page.last_fetch().1.search, "&search=veggie");
}

#[test]
fn test_status_transitions_and_skeletons() {
    let mut page = TestPage::mount("/");
    assert_eq!(page.products.status, FetchStatus::Loading);
    assert_eq!(
        ListingView::from_state(&page.products),
        ListingView::Skeletons(4)
    );
    assert_eq!(SKELETON_COUNT, 4);

    let (id, _) = page.last_fetch().clone();
    page.products.resolve(id, Ok(vec![product("1"), product("2")]));
    assert_eq!(page.products.status, FetchStatus::Success);
    match ListingView::from_state(&page.products) {
        ListingView::Items(items) => {
            let ids: Vec<_> = items.iter().map(|p| p.id.to_string()).collect();
            assert_eq!(ids, vec!["1", "2"]);
        }
        other => panic!("unexpected view {other:?}"),
    }

    page.dispatch(FilterAction::SetSort(SortSpec::PriceAsc));
    let (id, _) = page.last_fetch().clone();
    page.products.resolve(id, Err("503".into()));
    assert_eq!(page.products.status, FetchStatus::Error);
    assert_eq!(ListingView::from_state(&page.products), ListingView::Error);
}
