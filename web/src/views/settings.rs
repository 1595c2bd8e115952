use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::session::use_session;
use crate::views::components::Avatar;

#[derive(Debug, Clone, Copy)]
struct NotificationPrefs {
    email: bool,
    push: bool,
    weekly_reports: bool,
    security_alerts: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            email: true,
            push: false,
            weekly_reports: true,
            security_alerts: true,
        }
    }
}

#[component]
pub fn Settings() -> Element {
    let session = use_session();
    let user = session.current();

    let mut name = use_signal(|| user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let mut email = use_signal(|| user.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let mut current_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut prefs = use_signal(NotificationPrefs::default);
    let mut saving = use_signal(|| false);

    let role = user.as_ref().map(|u| u.role.clone()).unwrap_or_default();
    let avatar_name = user.as_ref().map(|u| u.name.clone()).unwrap_or_default();
    let avatar_src = user.as_ref().and_then(|u| u.avatar.clone());

    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "Settings" }
                p { class: "page-subtitle", "Manage your account settings and preferences" }
            }

            div { class: "settings-grid",
                div { class: "settings-main",
                    div { class: "card",
                        div { class: "card-header",
                            div {
                                h2 { class: "card-title", "Profile Information" }
                                p { class: "card-description", "Update your personal information" }
                            }
                        }
                        div { class: "card-body",
                            div { class: "profile-row",
                                Avatar { name: avatar_name, src: avatar_src }
                                div {
                                    h3 { class: "profile-heading", "Profile Picture" }
                                    p { class: "text-muted", "Click the camera icon to upload a new photo" }
                                }
                            }
                            div { class: "form-row",
                                div { class: "form-group",
                                    label { class: "form-label", r#for: "name", "Full Name" }
                                    input {
                                        id: "name",
                                        class: "form-input",
                                        r#type: "text",
                                        placeholder: "Enter your full name",
                                        value: "{name}",
                                        oninput: move |e| name.set(e.value()),
                                    }
                                }
                                div { class: "form-group",
                                    label { class: "form-label", r#for: "email", "Email Address" }
                                    input {
                                        id: "email",
                                        class: "form-input",
                                        r#type: "email",
                                        placeholder: "Enter your email",
                                        value: "{email}",
                                        oninput: move |e| email.set(e.value()),
                                    }
                                }
                            }
                        }
                    }

                    div { class: "card",
                        div { class: "card-header",
                            div {
                                h2 { class: "card-title", "Security" }
                                p { class: "card-description", "Update your password and security settings" }
                            }
                        }
                        div { class: "card-body",
                            div { class: "form-group",
                                label { class: "form-label", r#for: "current_password", "Current Password" }
                                input {
                                    id: "current_password",
                                    class: "form-input",
                                    r#type: "password",
                                    placeholder: "Enter current password",
                                    value: "{current_password}",
                                    oninput: move |e| current_password.set(e.value()),
                                }
                            }
                            div { class: "form-row",
                                div { class: "form-group",
                                    label { class: "form-label", r#for: "new_password", "New Password" }
                                    input {
                                        id: "new_password",
                                        class: "form-input",
                                        r#type: "password",
                                        placeholder: "Enter new password",
                                        value: "{new_password}",
                                        oninput: move |e| new_password.set(e.value()),
                                    }
                                }
                                div { class: "form-group",
                                    label { class: "form-label", r#for: "confirm_password", "Confirm Password" }
                                    input {
                                        id: "confirm_password",
                                        class: "form-input",
                                        r#type: "password",
                                        placeholder: "Confirm new password",
                                        value: "{confirm_password}",
                                        oninput: move |e| confirm_password.set(e.value()),
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "settings-side",
                    div { class: "card",
                        div { class: "card-header",
                            div {
                                h2 { class: "card-title", "Notifications" }
                                p { class: "card-description", "Manage your notification preferences" }
                            }
                        }
                        div { class: "card-body",
                            ToggleRow {
                                label: "Email Notifications",
                                description: "Receive updates via email",
                                checked: prefs.read().email,
                                on_toggle: move |_| prefs.with_mut(|p| p.email = !p.email),
                            }
                            ToggleRow {
                                label: "Push Notifications",
                                description: "Receive push notifications",
                                checked: prefs.read().push,
                                on_toggle: move |_| prefs.with_mut(|p| p.push = !p.push),
                            }
                            ToggleRow {
                                label: "Weekly Reports",
                                description: "Get weekly summary reports",
                                checked: prefs.read().weekly_reports,
                                on_toggle: move |_| prefs.with_mut(|p| p.weekly_reports = !p.weekly_reports),
                            }
                            ToggleRow {
                                label: "Security Alerts",
                                description: "Security and login alerts",
                                checked: prefs.read().security_alerts,
                                on_toggle: move |_| prefs.with_mut(|p| p.security_alerts = !p.security_alerts),
                            }
                        }
                    }

                    div { class: "card",
                        div { class: "card-header",
                            div {
                                h2 { class: "card-title", "Account Status" }
                                p { class: "card-description", "Your account information" }
                            }
                        }
                        div { class: "card-body",
                            div { class: "status-row",
                                span { class: "status-label", "Role" }
                                span { class: "text-muted", "{role}" }
                            }
                            div { class: "status-row",
                                span { class: "status-label", "Status" }
                                span { class: "status-active", "Active" }
                            }
                            div { class: "status-row",
                                span { class: "status-label", "Member Since" }
                                span { class: "text-muted", "Jan 2024" }
                            }
                        }
                    }
                }
            }

            div { class: "settings-actions",
                button { class: "btn btn-secondary", "Cancel" }
                button {
                    class: "btn btn-primary",
                    disabled: *saving.read(),
                    onclick: move |_| {
                        spawn(async move {
                            saving.set(true);
                            // Simulated round trip; there is no backend
                            // behind this form and no failure path.
                            TimeoutFuture::new(1_000).await;
                            saving.set(false);
                            tracing::info!("settings saved");
                        });
                    },
                    if *saving.read() { "Saving..." } else { "Save Changes" }
                }
            }
        }
    }
}

#[component]
fn ToggleRow(
    label: String,
    description: String,
    checked: bool,
    on_toggle: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "toggle-row",
            div {
                p { class: "toggle-label", "{label}" }
                p { class: "text-muted", "{description}" }
            }
            label { class: "switch",
                input {
                    r#type: "checkbox",
                    checked,
                    onchange: move |_| on_toggle.call(()),
                }
                span { class: "switch-slider" }
            }
        }
    }
}
