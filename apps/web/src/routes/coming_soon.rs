//! Placeholder for panels that are routed but not yet built.

use crate::components::layout::AdminShell;
use crate::features::auth::RequireAuth;
use leptos::prelude::*;

#[component]
pub fn ComingSoonPage() -> impl IntoView {
    view! {
        <RequireAuth children=move || view! {
            <AdminShell>
                <div class="flex flex-col items-center justify-center min-h-[50vh] text-center">
                    <h1 class="text-3xl font-semibold text-gray-900 dark:text-white">
                        "Coming Soon"
                    </h1>
                    <p class="mt-2 text-gray-500 dark:text-gray-400">
                        "This page is under construction. Please check back later."
                    </p>
                </div>
            </AdminShell>
        } />
    }
}
