use crate::features::auth::state::AuthProvider;
use crate::features::notifications::NotificationProvider;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <NotificationProvider>
            <AuthProvider>
                <Router>
                    <AppRoutes />
                </Router>
            </AuthProvider>
        </NotificationProvider>
    }
}
