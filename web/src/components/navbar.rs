use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::utils::storage::use_session;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    view! {
        <nav class="navbar">
            <div class="navbar__container">
                <div class="navbar__brand">
                    <A href="/" attr:class="navbar__logo">
                        "Alumnet"
                    </A>
                </div>

                <div class="navbar__links">
                    <A href="/jobs" attr:class="navbar__link">
                        "Jobs"
                    </A>
                    <A href="/mentorship" attr:class="navbar__link">
                        "Mentorship"
                    </A>
                    <A href="/knowledge" attr:class="navbar__link">
                        "Knowledge"
                    </A>
                    {move || {
                        let navigate = navigate.clone();
                        match session.current_user() {
                            Some(user) => {
                                let on_signout = move |_| {
                                    session.sign_out();
                                    navigate("/", Default::default());
                                };
                                view! {
                                    <A href=user.role.home_route() attr:class="navbar__link">
                                        "Dashboard"
                                    </A>
                                    <button class="navbar__link navbar__link--signout" on:click=on_signout>
                                        {format!("Sign out ({})", user.name)}
                                    </button>
                                }
                                    .into_any()
                            }
                            None => view! {
                                <A href="/login" attr:class="navbar__link navbar__link--cta">
                                    "Sign In"
                                </A>
                            }
                                .into_any(),
                        }
                    }}
                </div>
            </div>
        </nav>
    }
}
