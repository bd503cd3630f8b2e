use payloads::Product;
use yew::prelude::*;

/// Dough type names, indexed by `Product::types` entries.
const TYPE_NAMES: [&str; 2] = ["thin", "traditional"];

#[derive(Properties, PartialEq)]
pub struct Props {
    pub product: Product,
}

#[function_component]
pub fn ProductCard(props: &Props) -> Html {
    let product = &props.product;
    let active_type = use_state(|| 0usize);
    let active_size = use_state(|| 0usize);

    let option_class = |active: bool| {
        if active {
            "flex-1 px-2 py-1 rounded text-xs font-medium bg-white \
             dark:bg-neutral-700 shadow"
        } else {
            "flex-1 px-2 py-1 rounded text-xs text-neutral-600 \
             dark:text-neutral-400"
        }
    };

    let types = product.types.iter().enumerate().map(|(index, type_id)| {
        let onclick = {
            let active_type = active_type.clone();
            Callback::from(move |_: MouseEvent| active_type.set(index))
        };
        let name = TYPE_NAMES
            .get(*type_id as usize)
            .copied()
            .unwrap_or("other");
        html! {
            <button key={index} {onclick}
                class={option_class(*active_type == index)}>
                {name}
            </button>
        }
    });

    let sizes = product.sizes.iter().enumerate().map(|(index, size)| {
        let onclick = {
            let active_size = active_size.clone();
            Callback::from(move |_: MouseEvent| active_size.set(index))
        };
        html! {
            <button key={index} {onclick}
                class={option_class(*active_size == index)}>
                {format!("{size} cm")}
            </button>
        }
    });

    html! {
        <div class="flex flex-col items-center text-center p-4">
            <img
                class="w-64 h-64 object-contain"
                src={product.image_url.clone()}
                alt={product.title.clone()}
            />
            <h4 class="mt-3 text-lg font-semibold">{product.title.clone()}</h4>
            if !product.types.is_empty() || !product.sizes.is_empty() {
                <div class="mt-3 w-full p-1 space-y-1 rounded-md \
                            bg-neutral-100 dark:bg-neutral-800">
                    <div class="flex gap-1">{for types}</div>
                    <div class="flex gap-1">{for sizes}</div>
                </div>
            }
            <div class="mt-3 text-xl font-bold">
                {format!("from {} ₴", product.price)}
            </div>
        </div>
    }
}
