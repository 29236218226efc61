//! User management route. The list is fetched once with `{all:true}` and
//! filtered client-side: per-column contains filters, exact-match selects for
//! status and account type, and a global search across the visible columns.

use crate::app_lib::{AppError, dates, pager::Pager};
use crate::components::layout::AdminShell;
use crate::components::{Alert, AlertKind, FilterInput, PagerControls, Spinner};
use crate::features::auth::RequireAuth;
use crate::features::users::{
    client,
    types::{UserFilters, UserRecord},
};
use leptos::prelude::*;

#[component]
pub fn UsersPage() -> impl IntoView {
    view! {
        <RequireAuth children=move || view! {
            <AdminShell>
                <UsersContent />
            </AdminShell>
        } />
    }
}

#[component]
fn UsersContent() -> impl IntoView {
    let users = LocalResource::new(move || async move { client::list_users().await });

    let (global, set_global) = signal(String::new());
    let (name_filter, set_name_filter) = signal(String::new());
    let (email_filter, set_email_filter) = signal(String::new());
    let (status_filter, set_status_filter) = signal(String::new());
    let (type_filter, set_type_filter) = signal(String::new());
    let pager = RwSignal::new(Pager::default());

    let filters = move || UserFilters {
        global: global.get().trim().to_string(),
        name: name_filter.get().trim().to_string(),
        email: email_filter.get().trim().to_string(),
        status: none_if_empty(status_filter.get()),
        account_type: none_if_empty(type_filter.get()),
    };

    let filtered = move || -> Option<Result<Vec<UserRecord>, AppError>> {
        users.get().map(|result| {
            result.map(|list| {
                let filters = filters();
                list.iter()
                    .filter(|user| user.matches(&filters))
                    .cloned()
                    .collect()
            })
        })
    };

    let total = Signal::derive(move || match filtered() {
        Some(Ok(list)) => list.len(),
        _ => 0,
    });

    let select_class = "w-full rounded-md border border-gray-300 bg-white px-2 py-1.5 text-xs text-gray-700 dark:border-gray-600 dark:bg-gray-700 dark:text-gray-200";
    let th_class = "px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider";
    let td_class = "px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400";

    view! {
        <div class="space-y-6">
            <div class="flex flex-wrap items-center justify-between gap-4">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "User Management"
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "List of users registered with the licensing authority."
                    </p>
                </div>
                <input
                    type="search"
                    class="w-64 rounded-lg border border-gray-300 bg-white px-3 py-2 text-sm text-gray-900 focus:border-blue-500 focus:ring-blue-500 dark:border-gray-600 dark:bg-gray-700 dark:text-white"
                    placeholder="Search..."
                    on:input=move |event| set_global.set(event_target_value(&event))
                />
            </div>

            <div class="overflow-hidden bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg">
                <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                    <thead class="bg-gray-50 dark:bg-gray-900/50">
                        <tr>
                            <th scope="col" class=th_class>"User"</th>
                            <th scope="col" class=th_class>"Email"</th>
                            <th scope="col" class=th_class>"Status"</th>
                            <th scope="col" class=th_class>"Account Type"</th>
                            <th scope="col" class=th_class>"Last Login"</th>
                        </tr>
                        <tr>
                            <th class="px-6 pb-3">
                                <FilterInput placeholder="Search by user" setter=set_name_filter />
                            </th>
                            <th class="px-6 pb-3">
                                <FilterInput placeholder="Search by email" setter=set_email_filter />
                            </th>
                            <th class="px-6 pb-3">
                                <select
                                    class=select_class
                                    on:change=move |event| set_status_filter.set(event_target_value(&event))
                                >
                                    <option value="">"All"</option>
                                    <option value="Active">"Active"</option>
                                    <option value="Inactive">"Inactive"</option>
                                </select>
                            </th>
                            <th class="px-6 pb-3">
                                <select
                                    class=select_class
                                    on:change=move |event| set_type_filter.set(event_target_value(&event))
                                >
                                    <option value="">"All"</option>
                                    <option value="Internal">"Internal"</option>
                                    <option value="External">"External"</option>
                                </select>
                            </th>
                            <th class="px-6 pb-3"></th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                        <Suspense fallback=move || view! {
                            <tr>
                                <td colspan="5" class="px-6 py-12 text-center"><Spinner /></td>
                            </tr>
                        }>
                            {move || match filtered() {
                                Some(Ok(list)) if list.is_empty() => view! {
                                    <tr>
                                        <td colspan="5" class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                                            "No users found."
                                        </td>
                                    </tr>
                                }.into_any(),
                                Some(Ok(list)) => {
                                    let current = pager.get().clamped(list.len());
                                    let (start, end) = current.range(list.len());
                                    let rows = list[start..end].to_vec();
                                    view! {
                                        <For
                                            each=move || rows.clone()
                                            key=|user| user.id
                                            children=move |user| {
                                                let last_login = user
                                                    .last_login
                                                    .as_deref()
                                                    .map(dates::format_table_date)
                                                    .unwrap_or_else(|| "-".to_string());
                                                view! {
                                                    <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                                        <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900 dark:text-white">
                                                            {user.display_name()}
                                                        </td>
                                                        <td class=td_class>{user.email.clone()}</td>
                                                        <td class=td_class>
                                                            <StatusBadge value=user.account_status.clone() />
                                                        </td>
                                                        <td class=td_class>
                                                            {user.account_type.clone().unwrap_or_else(|| "-".to_string())}
                                                        </td>
                                                        <td class=td_class>{last_login}</td>
                                                    </tr>
                                                }
                                            }
                                        />
                                    }.into_any()
                                }
                                Some(Err(err)) => view! {
                                    <tr>
                                        <td colspan="5" class="px-6 py-4">
                                            <Alert kind=AlertKind::Error message=err.to_string() />
                                        </td>
                                    </tr>
                                }.into_any(),
                                None => view! {
                                    <tr>
                                        <td colspan="5" class="px-6 py-12 text-center"><Spinner /></td>
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

/// Status column badge; unknown statuses render as plain text.
#[component]
fn StatusBadge(value: Option<String>) -> impl IntoView {
    let value = value.unwrap_or_else(|| "-".to_string());
    let class = match value.as_str() {
        "Active" => {
            "inline-flex rounded-full bg-emerald-100 px-2.5 py-0.5 text-xs font-medium text-emerald-700 dark:bg-emerald-900/30 dark:text-emerald-300"
        }
        "Inactive" => {
            "inline-flex rounded-full bg-gray-100 px-2.5 py-0.5 text-xs font-medium text-gray-600 dark:bg-gray-700 dark:text-gray-300"
        }
        _ => "text-sm text-gray-500 dark:text-gray-400",
    };

    view! { <span class=class>{value}</span> }
}

fn none_if_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
