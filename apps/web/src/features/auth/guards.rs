use crate::components::Spinner;
use crate::features::auth::state::use_auth;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Gates protected content on session readiness and authentication. Nothing
/// renders until the store has checked persisted state, so there is no flash
/// of protected UI; unauthenticated visitors are sent to the login screen.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if auth.ready.get() && !auth.is_authenticated.get() {
            // UX-only guard; real access control must live on the API.
            auth.take_login_redirect();
            navigate(paths::LOGIN, Default::default());
        }
    });

    view! {
        <Show
            when=move || auth.ready.get() && auth.is_authenticated.get()
            fallback=|| view! { <div class="flex justify-center py-16"><Spinner /></div> }
        >
            {children()}
        </Show>
    }
}
