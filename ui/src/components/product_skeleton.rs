use yew::prelude::*;

/// Grey placeholder with the footprint of a `ProductCard`.
#[function_component]
pub fn ProductSkeleton() -> Html {
    html! {
        <div class="flex flex-col items-center p-4 animate-pulse">
            <div class="w-64 h-64 rounded-full bg-neutral-200 \
                        dark:bg-neutral-700"></div>
            <div class="mt-3 h-6 w-40 rounded bg-neutral-200 \
                        dark:bg-neutral-700"></div>
            <div class="mt-3 h-20 w-full rounded-md bg-neutral-200 \
                        dark:bg-neutral-700"></div>
            <div class="mt-3 h-7 w-24 rounded bg-neutral-200 \
                        dark:bg-neutral-700"></div>
        </div>
    }
}
