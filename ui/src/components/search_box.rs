use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::state::{FilterAction, FilterState};

/// Delay between the last keystroke and the search update.
const DEBOUNCE_MS: u32 = 250;

/// Search field in the header. Writes the search text into the filter store
/// once typing pauses.
#[function_component]
pub fn SearchBox() -> Html {
    let (filters, dispatch) = use_store::<FilterState>();
    let value = use_state(|| filters.search_value.clone());
    // Dropping a pending timeout cancels it.
    let pending = use_mut_ref(|| None::<Timeout>);

    // Follow external changes, e.g. hydration from the URL.
    {
        let value = value.clone();
        use_effect_with(filters.search_value.clone(), move |search_value| {
            value.set(search_value.clone());
        });
    }

    let on_input = {
        let value = value.clone();
        let dispatch = dispatch.clone();
        let pending = pending.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let text = input.value();
            value.set(text.clone());

            let dispatch = dispatch.clone();
            let timeout = Timeout::new(DEBOUNCE_MS, move || {
                dispatch.apply(FilterAction::SetSearchValue(text));
            });
            *pending.borrow_mut() = Some(timeout);
        })
    };

    let on_clear = {
        let value = value.clone();
        Callback::from(move |_: MouseEvent| {
            pending.borrow_mut().take();
            value.set(String::new());
            dispatch.apply(FilterAction::SetSearchValue(String::new()));
        })
    };

    html! {
        <div class="relative w-72">
            <input
                type="text"
                placeholder="Search products..."
                value={(*value).clone()}
                oninput={on_input}
                class="w-full px-3 py-2 pr-8 border border-neutral-300 \
                       dark:border-neutral-600 rounded-md text-sm \
                       bg-white dark:bg-neutral-800"
            />
            if !value.is_empty() {
                <button
                    onclick={on_clear}
                    class="absolute right-2 top-1/2 -translate-y-1/2 \
                           text-neutral-400 hover:text-neutral-700"
                >
                    {"×"}
                </button>
            }
        </div>
    }
}
