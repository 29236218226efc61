//! Side navigation for authenticated users.
//!
//! Mirrors the panels of the console: Dashboard, User Management, Security
//! Settings, Log Management, and sign-out. The last-active panel id is
//! persisted under the panel hint key so the next visit can restore it; this
//! is a display convenience, not a security property.

use crate::app_lib::build_info;
use crate::features::auth::state::use_auth;
use crate::features::auth::storage::BrowserStorage;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};
use session_core::store::{CredentialStorage, PANEL_KEY};

fn remember_panel(panel: &str) {
    BrowserStorage.set(PANEL_KEY, panel);
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let location = use_location();
    let pathname = move || location.pathname.get();

    // Keep the persisted panel hint in sync with wherever routing lands.
    Effect::new(move |_| {
        let path = pathname();
        let segment = path.trim_start_matches('/').split('/').next().unwrap_or("");
        let panel = match segment {
            "" | "dashboard" => "dashboard",
            "user" => "users",
            "security" => "security",
            "log" => "log",
            other => other,
        };
        remember_panel(panel);
    });

    view! {
        <aside class="w-64 flex-shrink-0 hidden md:flex flex-col border-r border-gray-200 dark:border-gray-800 bg-white dark:bg-gray-900 overflow-y-auto">
            <div class="px-6 py-5 border-b border-gray-100 dark:border-gray-800">
                <span class="text-lg font-semibold text-gray-900 dark:text-white">
                    "Licenco"
                </span>
                <p class="text-xs text-gray-400 dark:text-gray-500">
                    "Licensing Authority Console"
                </p>
            </div>
            <nav class="flex-1 px-4 py-6 space-y-1">
                <SidebarLink
                    target=paths::DASHBOARD
                    icon="dashboard"
                    label="Admin Dashboard"
                    panel="dashboard"
                    active=Signal::derive(move || pathname() == paths::DASHBOARD)
                />
                <SidebarLink
                    target=paths::USER_MANAGEMENT
                    icon="group"
                    label="User Management"
                    panel="users"
                    active=Signal::derive(move || pathname().starts_with("/user"))
                />
                <SidebarLink
                    target=paths::SECURITY_SETTINGS
                    icon="shield_lock"
                    label="Security Settings"
                    panel="security"
                    active=Signal::derive(move || pathname().starts_with("/security"))
                />
                <SidebarLink
                    target=paths::LOG_MANAGEMENT
                    icon="receipt_long"
                    label="Log Management"
                    panel="log"
                    active=Signal::derive(move || pathname().starts_with("/log"))
                />
            </nav>

            <div class="px-4 py-4 border-t border-gray-100 dark:border-gray-800">
                <button
                    type="button"
                    class="group flex w-full items-center px-2 py-2 text-sm font-medium rounded-md text-gray-600 hover:bg-gray-50 hover:text-gray-900 dark:text-gray-300 dark:hover:bg-gray-800 dark:hover:text-white transition-colors"
                    on:click=move |_| {
                        remember_panel("logout");
                        auth.logout();
                        navigate(paths::LOGIN, Default::default());
                    }
                >
                    <span class="material-symbols-outlined mr-3 text-xl">"logout"</span>
                    "Logout"
                </button>
                <p class="mt-3 text-[10px] text-gray-400 font-mono text-center uppercase tracking-tighter">
                    {format!("build {}", build_info::git_commit_hash())}
                </p>
            </div>
        </aside>
    }
}

#[component]
fn SidebarLink(
    target: &'static str,
    icon: &'static str,
    label: &'static str,
    panel: &'static str,
    #[prop(into)] active: Signal<bool>,
) -> impl IntoView {
    view! {
        <A
            href=target
            {..}
            attr:class="group flex items-center px-2 py-2 text-sm font-medium rounded-md transition-colors"
            class:text-blue-600=move || active.get()
            class:bg-blue-50=move || active.get()
            class:dark:bg-blue-900=move || active.get()
            class:dark:text-blue-400=move || active.get()
            class:text-gray-600=move || !active.get()
            class:dark:text-gray-300=move || !active.get()
            class:hover:bg-gray-50=move || !active.get()
            class:dark:hover:bg-gray-800=move || !active.get()
            on:click=move |_| remember_panel(panel)
        >
            <span class="material-symbols-outlined mr-3 text-xl">{icon}</span>
            {label}
        </A>
    }
}
