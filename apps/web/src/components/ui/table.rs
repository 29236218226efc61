//! Small table helpers shared by the management screens: a per-column filter
//! input and the pager footer. Filtering itself stays in the routes; these
//! only own the markup.

use crate::app_lib::pager::{PAGE_SIZES, Pager};
use leptos::prelude::*;

/// Text input rendered in a column filter row.
#[component]
pub fn FilterInput(placeholder: &'static str, setter: WriteSignal<String>) -> impl IntoView {
    view! {
        <input
            type="text"
            class="w-full rounded-md border border-gray-300 bg-white px-2 py-1.5 text-xs text-gray-900 focus:border-blue-500 focus:ring-blue-500 dark:border-gray-600 dark:bg-gray-700 dark:text-white"
            placeholder=placeholder
            on:input=move |event| setter.set(event_target_value(&event))
        />
    }
}

/// Pager footer with first/prev/next/last controls, a page-size dropdown, and
/// the `Showing X to Y of Z entries` report.
#[component]
pub fn PagerControls(pager: RwSignal<Pager>, #[prop(into)] total: Signal<usize>) -> impl IntoView {
    let page_count = move || pager.get().page_count(total.get());
    let current = move || pager.get().clamped(total.get());

    let go_to = move |page: usize| {
        pager.update(|state| state.page = page);
    };

    let button_class = "px-2.5 py-1.5 text-sm text-gray-600 rounded-md border border-gray-300 bg-white hover:bg-gray-100 disabled:opacity-50 disabled:cursor-not-allowed dark:bg-gray-800 dark:text-gray-300 dark:border-gray-600 dark:hover:bg-gray-700";

    view! {
        <div class="flex flex-wrap items-center justify-between gap-3 px-4 py-3 border-t border-gray-200 dark:border-gray-700">
            <p class="text-sm text-gray-500 dark:text-gray-400">
                {move || pager.get().clamped(total.get()).report(total.get())}
            </p>
            <div class="flex items-center gap-1.5">
                <button
                    class=button_class
                    disabled=move || current().page == 0
                    on:click=move |_| go_to(0)
                >
                    "First"
                </button>
                <button
                    class=button_class
                    disabled=move || current().page == 0
                    on:click=move |_| go_to(current().page.saturating_sub(1))
                >
                    "Prev"
                </button>
                <span class="px-2 text-sm text-gray-700 dark:text-gray-300">
                    {move || format!("Page {} of {}", current().page + 1, page_count())}
                </span>
                <button
                    class=button_class
                    disabled=move || current().page + 1 >= page_count()
                    on:click=move |_| go_to((current().page + 1).min(page_count() - 1))
                >
                    "Next"
                </button>
                <button
                    class=button_class
                    disabled=move || current().page + 1 >= page_count()
                    on:click=move |_| go_to(page_count() - 1)
                >
                    "Last"
                </button>
                <select
                    class="ml-2 rounded-md border border-gray-300 bg-white px-2 py-1.5 text-sm text-gray-700 dark:bg-gray-800 dark:text-gray-300 dark:border-gray-600"
                    on:change=move |event| {
                        if let Ok(per_page) = event_target_value(&event).parse::<usize>() {
                            pager.update(|state| {
                                state.per_page = per_page;
                                state.page = 0;
                            });
                        }
                    }
                >
                    {PAGE_SIZES
                        .iter()
                        .map(|size| view! { <option value=size.to_string()>{size.to_string()}</option> })
                        .collect_view()}
                </select>
            </div>
        </div>
    }
}
