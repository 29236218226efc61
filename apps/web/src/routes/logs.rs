//! Audit log route. The global search round-trips to the API with a debounce
//! (an empty term fetches everything); the per-column filters then narrow the
//! returned rows client-side.

use crate::app_lib::{AppError, dates, pager::Pager};
use crate::components::layout::AdminShell;
use crate::components::{Alert, AlertKind, FilterInput, PagerControls, Spinner};
use crate::features::auth::RequireAuth;
use crate::features::logs::{
    client,
    types::{LogFilters, LogRecord},
};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Delay before a search keystroke is sent to the API (milliseconds).
const SEARCH_DEBOUNCE_MS: u32 = 500;

#[component]
pub fn LogsPage() -> impl IntoView {
    view! {
        <RequireAuth children=move || view! {
            <AdminShell>
                <LogsContent />
            </AdminShell>
        } />
    }
}

#[component]
fn LogsContent() -> impl IntoView {
    // `query` trails the input by the debounce window; the resource refetches
    // whenever it settles on a new value.
    let (query, set_query) = signal(String::new());
    let debounce = StoredValue::new_local(None::<Timeout>);

    let logs = LocalResource::new(move || {
        let term = query.get();
        async move { client::fetch_logs(&term).await }
    });

    let on_search = move |event: web_sys::Event| {
        let value = event_target_value(&event);
        debounce.update_value(|slot| {
            if let Some(timer) = slot.take() {
                timer.cancel();
            }
            let pending = value.clone();
            *slot = Some(Timeout::new(SEARCH_DEBOUNCE_MS, move || {
                set_query.set(pending);
            }));
        });
    };

    let (user_filter, set_user_filter) = signal(String::new());
    let (action_filter, set_action_filter) = signal(String::new());
    let (module_filter, set_module_filter) = signal(String::new());
    let pager = RwSignal::new(Pager::default());

    let filters = move || LogFilters {
        user: user_filter.get().trim().to_string(),
        action: action_filter.get().trim().to_string(),
        module: module_filter.get().trim().to_string(),
    };

    let filtered = move || -> Option<Result<Vec<LogRecord>, AppError>> {
        logs.get().map(|result| {
            result.map(|list| {
                let filters = filters();
                list.iter()
                    .filter(|log| log.matches(&filters))
                    .cloned()
                    .collect()
            })
        })
    };

    let total = Signal::derive(move || match filtered() {
        Some(Ok(list)) => list.len(),
        _ => 0,
    });

    let th_class = "px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider";
    let td_class = "px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400";

    view! {
        <div class="space-y-6">
            <div class="flex flex-wrap items-center justify-between gap-4">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "Log Management"
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Activity recorded across the licensing console."
                    </p>
                </div>
                <input
                    type="search"
                    class="w-64 rounded-lg border border-gray-300 bg-white px-3 py-2 text-sm text-gray-900 focus:border-blue-500 focus:ring-blue-500 dark:border-gray-600 dark:bg-gray-700 dark:text-white"
                    placeholder="Search..."
                    on:input=on_search
                />
            </div>

            <div class="overflow-hidden bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg">
                <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                    <thead class="bg-gray-50 dark:bg-gray-900/50">
                        <tr>
                            <th scope="col" class=th_class>"Timestamp"</th>
                            <th scope="col" class=th_class>"User"</th>
                            <th scope="col" class=th_class>"Action"</th>
                            <th scope="col" class=th_class>"Module"</th>
                        </tr>
                        <tr>
                            <th class="px-6 pb-3"></th>
                            <th class="px-6 pb-3">
                                <FilterInput placeholder="Search by user" setter=set_user_filter />
                            </th>
                            <th class="px-6 pb-3">
                                <FilterInput placeholder="Search by action" setter=set_action_filter />
                            </th>
                            <th class="px-6 pb-3">
                                <FilterInput placeholder="Search by module" setter=set_module_filter />
                            </th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                        <Suspense fallback=move || view! {
                            <tr>
                                <td colspan="4" class="px-6 py-12 text-center"><Spinner /></td>
                            </tr>
                        }>
                            {move || match filtered() {
                                Some(Ok(list)) if list.is_empty() => view! {
                                    <tr>
                                        <td colspan="4" class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                                            "No logs found."
                                        </td>
                                    </tr>
                                }.into_any(),
                                Some(Ok(list)) => {
                                    let current = pager.get().clamped(list.len());
                                    let (start, end) = current.range(list.len());
                                    let rows = list[start..end].to_vec();
                                    view! {
                                        <For
                                            each=move || rows.clone().into_iter().enumerate().collect::<Vec<_>>()
                                            key=|(index, log)| log.id.unwrap_or(*index as i64)
                                            children=move |(_, log)| {
                                                let timestamp = log
                                                    .created_at
                                                    .as_deref()
                                                    .map(dates::format_log_timestamp)
                                                    .unwrap_or_else(|| "-".to_string());
                                                view! {
                                                    <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                                        <td class=td_class>{timestamp}</td>
                                                        <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900 dark:text-white">
                                                            {log.user_name()}
                                                        </td>
                                                        <td class=td_class>
                                                            {log.action.clone().unwrap_or_else(|| "-".to_string())}
                                                        </td>
                                                        <td class=td_class>{log.module().to_string()}</td>
                                                    </tr>
                                                }
                                            }
                                        />
                                    }.into_any()
                                }
                                Some(Err(err)) => view! {
                                    <tr>
                                        <td colspan="4" class="px-6 py-4">
                                            <Alert kind=AlertKind::Error message=err.to_string() />
                                        </td>
                                    </tr>
                                }.into_any(),
                                None => view! {
                                    <tr>
                                        <td colspan="4" class="px-6 py-12 text-center"><Spinner /></td>
                                    </tr>
                                }.into_any(),
                            }}
                        </Suspense>
                    </tbody>
                </table>
                <PagerControls pager=pager total=total />
            </div>
        </div>
    }
}
