//! Layout wrapper for authenticated management screens: side navigation plus
//! a padded content column. Navigation remains client-side; the API enforces
//! real access control.

use crate::components::layout::Sidebar;
use leptos::prelude::*;

#[component]
pub fn AdminShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex bg-gray-50 dark:bg-gray-950">
            <Sidebar />
            <main class="flex-1 overflow-x-auto">
                <div class="container mx-auto p-6">{children()}</div>
            </main>
        </div>
    }
}
