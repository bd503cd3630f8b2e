use yew::prelude::*;

/// Pages exposed by the backend's product listing.
pub const PAGE_COUNT: u32 = 3;

/// Target of the "previous" button, within `1..=page_count`.
pub fn previous_page(current_page: u32, page_count: u32) -> u32 {
    current_page.saturating_sub(1).clamp(1, page_count.max(1))
}

/// Target of the "next" button, within `1..=page_count`. The current page
/// may come from the URL and be far past the last page.
pub fn next_page(current_page: u32, page_count: u32) -> u32 {
    current_page.saturating_add(1).clamp(1, page_count.max(1))
}

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Current page (1-indexed)
    pub current_page: u32,
    #[prop_or(PAGE_COUNT)]
    pub page_count: u32,
    /// Callback when the page changes
    pub on_change_page: Callback<u32>,
}

#[function_component]
pub fn Pagination(props: &Props) -> Html {
    let Props {
        current_page,
        page_count,
        ..
    } = *props;

    if page_count <= 1 {
        return html! {};
    }

    let is_first_page = current_page <= 1;
    let is_last_page = current_page >= page_count;

    let go_to = |page: u32| {
        let on_change_page = props.on_change_page.clone();
        Callback::from(move |_: MouseEvent| on_change_page.emit(page))
    };

    let button_class = |disabled: bool, active: bool| {
        if active {
            "px-3 py-2 border border-neutral-900 dark:border-neutral-100 \
             rounded-md text-sm font-medium text-white dark:text-neutral-900 \
             bg-neutral-900 dark:bg-neutral-100"
        } else if disabled {
            "px-3 py-2 border border-neutral-300 dark:border-neutral-600 \
             rounded-md text-sm font-medium text-neutral-400 \
             dark:text-neutral-500 bg-neutral-100 dark:bg-neutral-800 \
             cursor-not-allowed"
        } else {
            "px-3 py-2 border border-neutral-300 dark:border-neutral-600 \
             rounded-md text-sm font-medium text-neutral-700 \
             dark:text-neutral-300 bg-white dark:bg-neutral-700 \
             hover:bg-neutral-50 dark:hover:bg-neutral-600 \
             transition-colors duration-200"
        }
    };

    html! {
        <div class="flex items-center justify-center gap-2 mt-8 pt-4 \
                    border-t border-neutral-200 dark:border-neutral-700">
            <button
                onclick={go_to(previous_page(current_page, page_count))}
                disabled={is_first_page}
                class={button_class(is_first_page, false)}
            >
                {"<"}
            </button>

            {for (1..=page_count).map(|page| {
                let active = page == current_page;
                html! {
                    <button
                        key={page}
                        onclick={go_to(page)}
                        disabled={active}
                        class={button_class(false, active)}
                    >
                        {page}
                    </button>
                }
            })}

            <button
                onclick={go_to(next_page(current_page, page_count))}
                disabled={is_last_page}
                class={button_class(is_last_page, false)}
            >
                {">"}
            </button>
        </div>
    }
}
