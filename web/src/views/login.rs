use dioxus::prelude::*;

use crate::Route;
use crate::session::use_session;

#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let mut email = use_signal(|| "admin@example.com".to_string());
    let mut password = use_signal(|| "password".to_string());
    let mut loading = use_signal(|| false);

    // Public-only route: bounce to the dashboard when already signed in.
    if session.is_logged_in() {
        navigator().replace(Route::Overview {});
        return rsx! {
            div { class: "loading", "Redirecting..." }
        };
    }

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                div { class: "login-header",
                    h1 { class: "login-title", "MyAlarmPal" }
                    p { class: "login-subtitle", "Premium Dashboard Access" }
                }
                form {
                    onsubmit: move |e| {
                        e.prevent_default();
                        loading.set(true);
                        let submitted_email = email.read().clone();
                        let submitted_password = password.read().clone();
                        match types::session::log_in(&submitted_email, &submitted_password) {
                            Some(user) => {
                                session.log_in(user);
                                navigator().push(Route::Overview {});
                            }
                            None => {
                                // Stay on the login screen; the only failure
                                // mode is an empty field.
                                tracing::warn!("login rejected: empty credentials");
                            }
                        }
                        loading.set(false);
                    },
                    div { class: "form-group",
                        label { class: "form-label", r#for: "email", "Email Address" }
                        input {
                            id: "email",
                            class: "form-input",
                            r#type: "email",
                            placeholder: "admin@example.com",
                            required: true,
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "password", "Password" }
                        input {
                            id: "password",
                            class: "form-input",
                            r#type: "password",
                            placeholder: "Enter your password",
                            required: true,
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary login-btn",
                        disabled: *loading.read(),
                        if *loading.read() { "Signing in..." } else { "Sign In to Dashboard" }
                    }
                }
                p { class: "login-footnote",
                    "Secure login protected by enterprise-grade encryption"
                }
            }
        }
    }
}
