use dioxus::prelude::*;
use types::filter::{self, StatusFilter};
use types::{NewUser, UserRecord, UserStatus};

use crate::views::components::Avatar;

const CHIPS: [(StatusFilter<UserStatus>, &str); 4] = [
    (StatusFilter::All, "all"),
    (StatusFilter::Only(UserStatus::Active), "active"),
    (StatusFilter::Only(UserStatus::Inactive), "inactive"),
    (StatusFilter::Only(UserStatus::Pending), "pending"),
];

#[component]
pub fn Users() -> Element {
    let mut users = use_signal(types::seed_users);
    let query = use_signal(String::new);
    let mut selector = use_signal(StatusFilter::<UserStatus>::default);
    let mut show_add_user = use_signal(|| false);

    // Recomputed on every render: the rows come from the filtered view,
    // nothing else on this page depends on it.
    let store = users.read();
    let q = query.read();
    let rows = filter::visible(&store, &q, *selector.read());

    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "User Management" }
                p { class: "page-subtitle", "Manage and monitor all user accounts" }
            }

            if *show_add_user.read() {
                AddUserModal {
                    on_close: move |_| show_add_user.set(false),
                    on_add: move |candidate: NewUser| {
                        users.write().push(UserRecord::create(candidate));
                        show_add_user.set(false);
                    },
                }
            }

            div { class: "card",
                div { class: "card-header",
                    div {
                        h2 { class: "card-title", "Users" }
                        p { class: "card-description", "A list of all users in your account" }
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| show_add_user.set(true),
                        "Add User"
                    }
                }
                div { class: "card-body",
                    div { class: "list-controls",
                        input {
                            class: "form-input search-input",
                            r#type: "text",
                            placeholder: "Search users...",
                            value: "{query}",
                            oninput: {
                                let mut query = query;
                                move |e: Event<FormData>| query.set(e.value())
                            },
                        }
                        div { class: "chip-row",
                            for (value, label) in CHIPS {
                                button {
                                    key: "{label}",
                                    class: if *selector.read() == value { "chip chip-selected" } else { "chip" },
                                    onclick: move |_| selector.set(value),
                                    {label}
                                }
                            }
                        }
                    }

                    div { class: "table-container",
                        table {
                            thead {
                                tr {
                                    th { "User" }
                                    th { "Role" }
                                    th { "Status" }
                                    th { "Created" }
                                    th { class: "text-right", "Actions" }
                                }
                            }
                            tbody {
                                for user in rows {
                                    tr { key: "{user.id}",
                                        td {
                                            div { class: "cell-user",
                                                Avatar { name: user.name.clone(), src: user.avatar.clone() }
                                                div { class: "cell-user-info",
                                                    p { class: "cell-user-name", "{user.name}" }
                                                    p { class: "cell-user-email", "{user.email}" }
                                                }
                                            }
                                        }
                                        td {
                                            span { class: "badge badge-outline", "{user.role}" }
                                        }
                                        td {
                                            span { class: "badge {user.status.badge_class()}", "{user.status}" }
                                        }
                                        td { class: "text-muted",
                                            {user.created_at.strftime("%b %d, %Y").to_string()}
                                        }
                                        td { class: "text-right",
                                            // Presentational only; edit/delete are not wired.
                                            button { class: "btn btn-ghost", "Edit" }
                                            button { class: "btn btn-ghost btn-danger-text", "Delete" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AddUserModal(on_close: EventHandler<()>, on_add: EventHandler<NewUser>) -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut role = use_signal(|| "User".to_string());

    let can_submit = !name.read().is_empty() && !email.read().is_empty();

    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div { class: "modal",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "Add User" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "modal-body",
                    div { class: "form-group",
                        label { class: "form-label", r#for: "name", "Full Name *" }
                        input {
                            id: "name",
                            class: "form-input",
                            r#type: "text",
                            placeholder: "e.g. John Smith",
                            value: "{name}",
                            oninput: move |e| name.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "email", "Email *" }
                        input {
                            id: "email",
                            class: "form-input",
                            r#type: "email",
                            placeholder: "e.g. jsmith@example.com",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "role", "Role" }
                        select {
                            id: "role",
                            class: "form-input",
                            value: "{role}",
                            onchange: move |e| role.set(e.value()),
                            option { value: "User", "User" }
                            option { value: "Administrator", "Administrator" }
                        }
                    }
                }
                div { class: "modal-footer",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: !can_submit,
                        onclick: move |_| {
                            on_add.call(NewUser {
                                name: name.read().clone(),
                                email: email.read().clone(),
                                role: role.read().clone(),
                            });
                        },
                        "Add User"
                    }
                }
            }
        }
    }
}
