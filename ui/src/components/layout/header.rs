use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::Route;
use crate::components::SearchBox;
use crate::state::{FilterAction, FilterState};

#[function_component]
pub fn Header() -> Html {
    // The logo leads to a bare `/`; the filters follow so the store and the
    // URL agree. The sync effect then writes the default query.
    let on_home = use_dispatch::<FilterState>()
        .apply_callback(|_: MouseEvent| FilterAction::Reset);

    html! {
        <header class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex-shrink-0" onclick={on_home}>
                        <Link<Route> to={Route::Home}>
                            <h1 class="text-xl font-semibold text-gray-900 dark:text-white">{"Storefront"}</h1>
                        </Link<Route>>
                    </div>
                    <div class="flex items-center space-x-4">
                        <SearchBox />
                    </div>
                </div>
            </div>
        </header>
    }
}
