use yew::prelude::*;

/// Category names, indexed by category id. Id 0 lists everything.
pub const CATEGORY_NAMES: [&str; 6] =
    ["All", "Meat", "Vegetarian", "Grill", "Spicy", "Calzone"];

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Selected category id
    pub value: u32,
    pub on_change_category: Callback<u32>,
}

#[function_component]
pub fn Categories(props: &Props) -> Html {
    html! {
        <div class="flex flex-wrap gap-2">
            {for CATEGORY_NAMES.iter().enumerate().map(|(id, name)| {
                let id = id as u32;
                let selected = id == props.value;
                let onclick = {
                    let on_change_category = props.on_change_category.clone();
                    Callback::from(move |_: MouseEvent| {
                        on_change_category.emit(id)
                    })
                };
                let class = if selected {
                    "px-4 py-2 rounded-full text-sm font-medium \
                     bg-neutral-900 text-white dark:bg-neutral-100 \
                     dark:text-neutral-900"
                } else {
                    "px-4 py-2 rounded-full text-sm font-medium \
                     bg-neutral-100 text-neutral-700 dark:bg-neutral-800 \
                     dark:text-neutral-300 hover:bg-neutral-200 \
                     dark:hover:bg-neutral-700 transition-colors"
                };
                html! {
                    <button key={id} {onclick} {class}>{*name}</button>
                }
            })}
        </div>
    }
}
