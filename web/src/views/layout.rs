use dioxus::prelude::*;

use crate::Route;
use crate::session::use_session;
use crate::views::components::Avatar;

/// The authenticated shell: sidebar, top bar, and the routed page.
///
/// This is also the route guard for everything under /dashboard - when
/// the session gate is logged out it bounces to the login screen.
#[component]
pub fn DashboardLayout() -> Element {
    let mut session = use_session();
    let mut sidebar_open = use_signal(|| true);

    let Some(user) = session.current() else {
        navigator().replace(Route::Login {});
        return rsx! {
            div { class: "loading", "Redirecting to login..." }
        };
    };

    rsx! {
        div { class: "app-layout",
            aside {
                class: if *sidebar_open.read() { "sidebar" } else { "sidebar sidebar-collapsed" },
                div { class: "sidebar-header",
                    if *sidebar_open.read() {
                        div { class: "sidebar-brand",
                            span { class: "sidebar-logo", "MyAlarmPal" }
                            p { class: "sidebar-tagline", "Premium Dashboard" }
                        }
                    }
                    button {
                        class: "sidebar-toggle",
                        onclick: move |_| {
                            let open = *sidebar_open.read();
                            sidebar_open.set(!open);
                        },
                        if *sidebar_open.read() { "‹" } else { "›" }
                    }
                }
                nav { class: "sidebar-nav",
                    NavLink { to: Route::Overview {}, "Overview" }
                    NavLink { to: Route::Users {}, "Users" }
                    NavLink { to: Route::Subscriptions {}, "Subscriptions" }
                    NavLink { to: Route::Settings {}, "Settings" }
                }
            }
            div { class: "main-column",
                header { class: "topbar",
                    div { class: "topbar-user",
                        div { class: "topbar-user-info",
                            p { class: "topbar-user-name", "{user.name}" }
                            p { class: "topbar-user-role", "{user.role}" }
                        }
                        Avatar { name: user.name.clone(), src: user.avatar.clone() }
                        button {
                            class: "btn btn-ghost",
                            onclick: move |_| {
                                session.log_out();
                                navigator().push(Route::Login {});
                            },
                            "Sign out"
                        }
                    }
                }
                main { class: "main-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn NavLink(to: Route, children: Element) -> Element {
    let current_route: Route = use_route();
    let is_active = current_route == to;

    rsx! {
        Link {
            to,
            class: if is_active { "active" },
            {children}
        }
    }
}
