mod coming_soon;
mod login;
mod logs;
mod not_found;
mod users;

pub(crate) use coming_soon::ComingSoonPage;
pub(crate) use login::LoginPage;
pub(crate) use logs::LogsPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use users::UsersPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Route path constants shared by navigation and redirects.
pub mod paths {
    pub const LOGIN: &str = "/login";
    pub const DASHBOARD: &str = "/dashboard";
    pub const USER_MANAGEMENT: &str = "/user/management";
    pub const LOG_MANAGEMENT: &str = "/log/management";
    pub const SECURITY_SETTINGS: &str = "/security/settings";
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=LoginPage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/user/management") view=UsersPage />
            <Route path=path!("/log/management") view=LogsPage />
            <Route path=path!("/dashboard") view=ComingSoonPage />
            <Route path=path!("/security/settings") view=ComingSoonPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
