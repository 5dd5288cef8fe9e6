use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use crate::components::notifications::use_notices;
use crate::services::account::{login, signup};
use crate::services::envelope_or_error;
use crate::utils::storage::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let notices = use_notices();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let error_message = RwSignal::new(Option::<String>::None);

    let is_button_disabled =
        Memo::new(move |_| email.get().is_empty() || password.get().is_empty());

    let submit_login = move |_| {
        loading.set(true);
        error_message.set(None);

        let email_value = email.get_untracked();
        let password_value = password.get_untracked();

        spawn_local(async move {
            let response = envelope_or_error(login(email_value, password_value).await);
            match response.data.filter(|_| response.success) {
                Some(user) => {
                    let destination = user.role.home_route();
                    session.sign_in(user);
                    notices.success("Welcome back");
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(destination);
                    }
                }
                None => {
                    error_message.set(Some(
                        response
                            .message
                            .unwrap_or_else(|| "Could not sign you in.".to_string()),
                    ));
                }
            }
            loading.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign In"</h1>
                <p class="auth-card__subtitle">"Welcome back to the alumni network"</p>

                <Show when=move || session.pending_verification_email().is_some()>
                    <div class="auth-card__pending">
                        <MessageBar intent=MessageBarIntent::Warning>
                            {move || format!(
                                "Verification pending for {}. Check your inbox to finish setup.",
                                session.pending_verification_email().unwrap_or_default()
                            )}
                        </MessageBar>
                    </div>
                </Show>

                <Show when=move || error_message.get().is_some()>
                    <div class="auth-card__error">
                        <MessageBar intent=MessageBarIntent::Error>
                            {move || error_message.get().unwrap_or_default()}
                        </MessageBar>
                    </div>
                </Show>

                <div class="auth-card__field">
                    <label for="login-email">"Email"</label>
                    <input
                        id="login-email"
                        type="email"
                        placeholder="you@example.edu"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>

                <div class="auth-card__field">
                    <label for="login-password">"Password"</label>
                    <input
                        id="login-password"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>

                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=submit_login
                    disabled=Signal::derive(move || is_button_disabled.get() || loading.get())
                >
                    {move || if loading.get() { "Signing in..." } else { "Sign In" }}
                </Button>

                <p class="auth-card__switch">
                    "New here? "
                    <A href="/signup">"Create an account"</A>
                </p>
            </div>
        </div>
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = use_session();
    let notices = use_notices();
    let navigate = leptos_router::hooks::use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let error_message = RwSignal::new(Option::<String>::None);

    let is_button_disabled = Memo::new(move |_| {
        name.get().is_empty() || email.get().is_empty() || password.get().is_empty()
    });

    let submit_signup = move |_| {
        loading.set(true);
        error_message.set(None);

        let name_value = name.get_untracked();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        let navigate = navigate.clone();

        spawn_local(async move {
            let response =
                envelope_or_error(signup(name_value, email_value, password_value).await);
            match response.data.filter(|_| response.success) {
                Some(pending_email) => {
                    session.set_pending_verification(&pending_email);
                    notices.success("Account created. Verify your email to finish setup.");
                    navigate("/login", Default::default());
                }
                None => {
                    error_message.set(Some(
                        response
                            .message
                            .unwrap_or_else(|| "Could not create your account.".to_string()),
                    ));
                }
            }
            loading.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create Account"</h1>
                <p class="auth-card__subtitle">"Join the alumni network"</p>

                <Show when=move || error_message.get().is_some()>
                    <div class="auth-card__error">
                        <MessageBar intent=MessageBarIntent::Error>
                            {move || error_message.get().unwrap_or_default()}
                        </MessageBar>
                    </div>
                </Show>

                <div class="auth-card__field">
                    <label for="signup-name">"Full name"</label>
                    <input
                        id="signup-name"
                        type="text"
                        placeholder="Jordan Wells"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </div>

                <div class="auth-card__field">
                    <label for="signup-email">"Email"</label>
                    <input
                        id="signup-email"
                        type="email"
                        placeholder="you@example.edu"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>

                <div class="auth-card__field">
                    <label for="signup-password">"Password"</label>
                    <input
                        id="signup-password"
                        type="password"
                        placeholder="At least 8 characters"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>

                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=submit_signup
                    disabled=Signal::derive(move || is_button_disabled.get() || loading.get())
                >
                    {move || if loading.get() { "Creating..." } else { "Create Account" }}
                </Button>

                <p class="auth-card__switch">
                    "Already a member? "
                    <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
