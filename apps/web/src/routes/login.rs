//! Login route.
//!
//! Three screens in one route, driven by the flow state machine:
//! 1. Credential entry (email + password, validated inline).
//! 2. MFA method selection (email or SMS).
//! 3. Code entry with resend.
//!
//! Every external call is dispatched through an action and both outcomes are
//! fed back into the machine; the machine decides the next screen and the
//! notifications, and hands the full credential to the session store when the
//! flow completes.

use crate::components::{Button, Spinner};
use crate::features::auth::{client, state::AuthContext, state::use_auth};
use crate::features::notifications::{Notifications, use_notifications};
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session_core::flow::{LoginFlow, OtpMethod, Step};
use session_core::validation::{self, CredentialErrors};
use session_core::{Notice, messages};

#[derive(Clone)]
struct LoginInput {
    email: String,
    password: String,
}

#[derive(Clone)]
struct SendInput {
    pending_token: String,
    method: OtpMethod,
}

#[derive(Clone)]
struct VerifyInput {
    email: String,
    code: String,
}

/// Which screen is visible, independent of the values a screen carries.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Screen {
    Credentials,
    MethodSelection,
    CodeEntry,
    Complete,
}

impl Screen {
    fn of(flow: &LoginFlow) -> Self {
        match flow {
            LoginFlow::CredentialEntry => Screen::Credentials,
            LoginFlow::MethodSelection { .. } => Screen::MethodSelection,
            LoginFlow::CodeEntry { .. } => Screen::CodeEntry,
            LoginFlow::Complete => Screen::Complete,
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let notifications = use_notifications();
    let navigate = use_navigate();

    let flow = RwSignal::new(LoginFlow::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (field_errors, set_field_errors) = signal(CredentialErrors::default());

    let login_action = Action::new_local(move |input: &LoginInput| {
        let input = input.clone();
        async move {
            (
                input.email.clone(),
                client::login(&input.email, &input.password).await,
            )
        }
    });

    let send_action = Action::new_local(move |input: &SendInput| {
        let input = input.clone();
        async move { client::send_code(&input.pending_token, input.method).await }
    });

    let verify_action = Action::new_local(move |input: &VerifyInput| {
        let input = input.clone();
        async move { client::verify_code(&input.email, &input.code).await }
    });

    let navigate_for_login = navigate.clone();
    Effect::new(move |_| {
        if let Some((submitted_email, outcome)) = login_action.value().get() {
            let step = flow
                .get_untracked()
                .submit_credentials(&submitted_email, outcome);
            apply_step(step, auth, notifications, flow, &navigate_for_login);
        }
    });

    Effect::new(move |_| {
        if let Some(outcome) = send_action.value().get() {
            let step = flow.get_untracked().code_sent(outcome);
            notifications.push_all(step.notices.clone());
            flow.set(step.flow);
        }
    });

    let navigate_for_verify = navigate.clone();
    Effect::new(move |_| {
        if let Some(outcome) = verify_action.value().get() {
            let step = flow.get_untracked().submit_code(outcome);
            apply_step(step, auth, notifications, flow, &navigate_for_verify);
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        match validation::validate_credentials(&email_value, &password_value) {
            Ok(()) => {
                set_field_errors.set(CredentialErrors::default());
                login_action.dispatch(LoginInput {
                    email: email_value,
                    password: password_value,
                });
            }
            // Inline only: validation failures never reach the network layer
            // and never become toasts.
            Err(errors) => set_field_errors.set(errors),
        }
    };

    let confirm_method = move |_: leptos::ev::MouseEvent| {
        if let LoginFlow::MethodSelection {
            pending_token,
            method,
            ..
        } = flow.get_untracked()
        {
            send_action.dispatch(SendInput {
                pending_token,
                method,
            });
        }
    };

    let resend_code = move |_: leptos::ev::MouseEvent| {
        if let LoginFlow::CodeEntry {
            pending_token,
            method,
            ..
        } = flow.get_untracked()
        {
            send_action.dispatch(SendInput {
                pending_token,
                method,
            });
        }
    };

    let submit_code = move || {
        if let LoginFlow::CodeEntry { email, code, .. } = flow.get_untracked() {
            if !code.is_empty() {
                verify_action.dispatch(VerifyInput { email, code });
            }
        }
    };

    let select = move |method: OtpMethod| {
        flow.set(flow.get_untracked().select_method(method));
    };

    let selected_method = move || match flow.get() {
        LoginFlow::MethodSelection { method, .. } | LoginFlow::CodeEntry { method, .. } => {
            Some(method)
        }
        _ => None,
    };

    let code_value = move || match flow.get() {
        LoginFlow::CodeEntry { code, .. } => code,
        _ => String::new(),
    };

    // Screens switch on the variant only; values inside a screen stay
    // reactive so typing a code does not rebuild (and blur) the input.
    let screen_kind = Memo::new(move |_| Screen::of(&flow.get()));

    let title = move || match flow.get() {
        LoginFlow::CredentialEntry | LoginFlow::Complete => "Login to your account",
        LoginFlow::MethodSelection { .. } => "Multi-Factor Authentication",
        LoginFlow::CodeEntry { .. } => "Enter Verification Code",
    };

    let subtitle = move || match flow.get() {
        LoginFlow::CredentialEntry => "Secure sign-in to access your dashboard".to_string(),
        LoginFlow::MethodSelection { .. } => {
            "Please select your preferred Multi-Factor Authentication method".to_string()
        }
        LoginFlow::CodeEntry {
            email,
            method: OtpMethod::Email,
            ..
        } => format!("We've sent a code to {email}"),
        LoginFlow::CodeEntry { .. } => "We've sent a code to your phone.".to_string(),
        LoginFlow::Complete => String::new(),
    };

    let input_class = "w-full rounded-lg border border-gray-300 bg-gray-50 px-3 py-2.5 text-sm text-gray-900 focus:border-blue-500 focus:ring-blue-500 dark:border-gray-600 dark:bg-gray-700 dark:text-white";

    let screen = move || match screen_kind.get() {
        Screen::Credentials => view! {
            <form on:submit=on_submit>
                <div class="mb-5">
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="email"
                    >
                        "Email Address"
                    </label>
                    <input
                        id="email"
                        type="text"
                        class=input_class
                        autocomplete="email"
                        placeholder="name@agency.gov"
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                    {move || {
                        field_errors
                            .get()
                            .email
                            .map(|message| view! { <p class="mt-1 text-sm text-red-600">{message}</p> })
                    }}
                </div>
                <div class="mb-5">
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="password"
                    >
                        "Password"
                    </label>
                    <input
                        id="password"
                        type="password"
                        class=input_class
                        autocomplete="current-password"
                        placeholder="••••••••"
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                    {move || {
                        field_errors
                            .get()
                            .password
                            .map(|message| view! { <p class="mt-1 text-sm text-red-600">{message}</p> })
                    }}
                </div>
                <Button button_type="submit" disabled=login_action.pending()>
                    "Login"
                </Button>
                {move || {
                    login_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4 text-center"><Spinner /></div> })
                }}
            </form>
        }
        .into_any(),

        Screen::MethodSelection => view! {
            <div class="space-y-4">
                <div class="grid grid-cols-2 gap-4">
                    <MethodOption
                        label="Email"
                        description="Login with email verification code."
                        selected=Signal::derive(move || selected_method() == Some(OtpMethod::Email))
                        on_select=move |_| select(OtpMethod::Email)
                    />
                    <MethodOption
                        label="SMS"
                        description="Login with SMS verification code."
                        selected=Signal::derive(move || selected_method() == Some(OtpMethod::Phone))
                        on_select=move |_| select(OtpMethod::Phone)
                    />
                </div>
                <Button disabled=send_action.pending() on:click=confirm_method>
                    "Confirm"
                </Button>
                {move || {
                    send_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="text-center"><Spinner /></div> })
                }}
            </div>
        }
        .into_any(),

        Screen::CodeEntry => view! {
            <div class="space-y-4">
                <input
                    type="text"
                    inputmode="numeric"
                    autocomplete="one-time-code"
                    maxlength="6"
                    class="w-full rounded-lg border border-gray-300 bg-gray-50 px-3 py-2.5 text-center text-lg tracking-[0.5em] text-gray-900 focus:border-blue-500 focus:ring-blue-500 dark:border-gray-600 dark:bg-gray-700 dark:text-white"
                    prop:value=code_value
                    on:input=move |event| {
                        flow.set(flow.get_untracked().set_code(event_target_value(&event)));
                    }
                    on:keydown=move |event| {
                        if event.key() == "Enter" {
                            submit_code();
                        }
                    }
                />
                <Button disabled=verify_action.pending() on:click=move |_| submit_code()>
                    "Verify"
                </Button>
                <div class="flex items-center justify-center gap-1 text-sm">
                    <p class="text-gray-500 dark:text-gray-400">"Didn't receive the code?"</p>
                    <button
                        type="button"
                        class="font-medium text-blue-600 hover:underline dark:text-blue-400"
                        on:click=resend_code
                    >
                        "Resend code"
                    </button>
                </div>
                {move || {
                    verify_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="text-center"><Spinner /></div> })
                }}
            </div>
        }
        .into_any(),

        Screen::Complete => view! {
            <div class="flex justify-center py-8"><Spinner /></div>
        }
        .into_any(),
    };

    view! {
        <section class="min-h-screen flex bg-gray-50 dark:bg-gray-950">
            <div class="flex-1 flex items-center justify-center px-6 py-10">
                <div class="w-full max-w-md rounded-2xl border border-gray-200 bg-white p-8 shadow-sm dark:border-gray-700 dark:bg-gray-900">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">{title}</h1>
                    <p class="mt-1 mb-6 text-sm text-gray-500 dark:text-gray-400">{subtitle}</p>
                    {screen}
                    <p class="mt-8 text-center text-xs text-gray-400 dark:text-gray-500">
                        "Licensing Authority Console"
                    </p>
                </div>
            </div>
            <aside class="hidden lg:flex flex-1 flex-col justify-center bg-blue-700 px-12 text-white">
                <h2 class="text-lg font-semibold text-blue-200">"Licenco"</h2>
                <p class="mt-2 max-w-md text-3xl font-bold leading-snug">
                    "Empowering fair and secure licensing"
                </p>
                <p class="mt-8 text-sm text-blue-200">
                    "Having problems? "
                    <a href="mailto:support@licenco.dev" class="underline">"Contact us"</a>
                </p>
            </aside>
        </section>
    }
}

/// Selectable MFA delivery option card.
#[component]
fn MethodOption(
    label: &'static str,
    description: &'static str,
    #[prop(into)] selected: Signal<bool>,
    on_select: impl Fn(leptos::ev::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <div
            class="cursor-pointer rounded-xl border p-4 transition-colors"
            class:border-blue-600=move || selected.get()
            class:bg-blue-50=move || selected.get()
            class:dark:bg-blue-900=move || selected.get()
            class:border-gray-200=move || !selected.get()
            class:dark:border-gray-700=move || !selected.get()
            role="button"
            tabindex="0"
            on:click=on_select
        >
            <h2 class="text-sm font-semibold text-gray-900 dark:text-white">{label}</h2>
            <p class="mt-1 text-xs text-gray-500 dark:text-gray-400">{description}</p>
        </div>
    }
}

/// Applies a flow step: surface its notices, store the credential on
/// completion, and navigate to the landing screen.
fn apply_step(
    step: Step,
    auth: AuthContext,
    notifications: Notifications,
    flow: RwSignal<LoginFlow>,
    navigate: &impl Fn(&str, NavigateOptions),
) {
    let Step {
        flow: next,
        notices,
        credential,
    } = step;

    notifications.push_all(notices);
    if let Some(credential) = credential {
        auth.store_credential(&credential);
        // One decode right after storing mirrors the token check the rest of
        // the app relies on; an expired credential logs straight back out.
        if let Ok(decoded) = auth.decode_claims(None) {
            if decoded.expired {
                notifications.push(Notice::error(messages::login::EXPIRED_SESSION));
            }
        }
        navigate(paths::USER_MANAGEMENT, NavigateOptions::default());
    }
    flow.set(next);
}
