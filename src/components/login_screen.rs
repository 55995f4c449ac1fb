use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::use_session;
use crate::models::{LoginOutcome, LoginRequest};
use crate::utils::routing::Route;

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub on_navigate: Callback<Route>,
}

fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let session = use_session();
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let loading = use_state(|| false);

    let on_submit = {
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let loading = loading.clone();
        let on_navigate = props.on_navigate.clone();
        let session = session.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(session) = session.as_ref() else {
                log::error!("❌ [AUTH] LoginScreen fuera de SessionContext");
                return;
            };

            let (Some(name_input), Some(email_input)) =
                (name_ref.cast::<HtmlInputElement>(), email_ref.cast::<HtmlInputElement>())
            else {
                return;
            };

            let request = LoginRequest::new(name_input.value(), email_input.value());
            if !request.is_complete() {
                alert("Please enter your name and email.");
                return;
            }

            loading.set(true);

            let respond = {
                let loading = loading.clone();
                let on_navigate = on_navigate.clone();
                Callback::from(move |outcome: LoginOutcome| match outcome {
                    LoginOutcome::Accepted => {
                        let on_navigate = on_navigate.clone();
                        Timeout::new(CONFIG.login_redirect_delay_ms, move || {
                            on_navigate.emit(Route::Dogs);
                        })
                        .forget();
                    }
                    LoginOutcome::Rejected => {
                        loading.set(false);
                    }
                    LoginOutcome::Failed(_) => {
                        loading.set(false);
                        alert("An error occurred while logging in. Please try again.");
                    }
                })
            };

            session.login.emit((request, respond));
        })
    };

    html! {
        <div class="login-screen">
            <h2>{"Login"}</h2>
            <form class="login-form" onsubmit={on_submit}>
                <div class="form-stack">
                    <input
                        type="text"
                        name="name"
                        placeholder="Name"
                        ref={name_ref}
                        required=true
                    />
                    <input
                        type="email"
                        name="email"
                        placeholder="Email"
                        ref={email_ref}
                        required=true
                    />
                    <button type="submit" class="btn-primary" disabled={*loading}>{"Go"}</button>
                    if *loading {
                        <div class="spinner" aria-label="Loading"></div>
                    }
                </div>
            </form>
        </div>
    }
}
