use yew::prelude::*;

use crate::state::SortSpec;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub value: SortSpec,
    pub on_change_sort: Callback<SortSpec>,
}

/// Drop-down for choosing one of the fixed sort orders.
#[function_component]
pub fn SortPopup(props: &Props) -> Html {
    let is_open = use_state(|| false);

    let on_toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };

    let options = SortSpec::ALL.into_iter().map(|spec| {
        let onclick = {
            let is_open = is_open.clone();
            let on_change_sort = props.on_change_sort.clone();
            Callback::from(move |_: MouseEvent| {
                on_change_sort.emit(spec);
                is_open.set(false);
            })
        };
        let class = if spec == props.value {
            "px-4 py-2 cursor-pointer font-semibold text-neutral-900 \
             dark:text-white bg-neutral-100 dark:bg-neutral-700"
        } else {
            "px-4 py-2 cursor-pointer text-neutral-700 dark:text-neutral-300 \
             hover:bg-neutral-50 dark:hover:bg-neutral-700"
        };
        html! {
            <li key={spec.sort_property()} {onclick} {class}>
                {spec.label()}
            </li>
        }
    });

    html! {
        <div class="relative">
            <div class="flex items-center gap-2 text-sm">
                <span class="font-medium">{"Sort by:"}</span>
                <button
                    onclick={on_toggle}
                    class="text-neutral-900 dark:text-white underline \
                           decoration-dotted"
                >
                    {props.value.label()}
                </button>
            </div>
            if *is_open {
                <ul class="absolute right-0 mt-2 z-10 py-2 rounded-md shadow-lg \
                           bg-white dark:bg-neutral-800 border \
                           border-neutral-200 dark:border-neutral-700">
                    {for options}
                </ul>
            }
        </div>
    }
}
