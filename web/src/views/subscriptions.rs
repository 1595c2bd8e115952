use dioxus::prelude::*;
use types::filter::{self, StatusFilter, count_with_status};
use types::{SubscriptionStatus, monthly_revenue};

use crate::views::components::{Avatar, SummaryCard};

const CHIPS: [(StatusFilter<SubscriptionStatus>, &str); 4] = [
    (StatusFilter::All, "all"),
    (StatusFilter::Only(SubscriptionStatus::Active), "active"),
    (StatusFilter::Only(SubscriptionStatus::Paused), "paused"),
    (StatusFilter::Only(SubscriptionStatus::Cancelled), "cancelled"),
];

#[component]
pub fn Subscriptions() -> Element {
    let subscriptions = use_signal(types::seed_subscriptions);
    let query = use_signal(String::new);
    let mut selector = use_signal(StatusFilter::<SubscriptionStatus>::default);

    // The summary cards use the full store so they hold still while the
    // list below is filtered.
    let store = subscriptions.read();
    let revenue = monthly_revenue(&store);
    let active = count_with_status(&store, SubscriptionStatus::Active);

    let q = query.read();
    let rows = filter::visible(&store, &q, *selector.read());

    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "Subscription Management" }
                p { class: "page-subtitle", "Monitor and manage all premium subscriptions" }
            }

            div { class: "summary-grid",
                SummaryCard { label: "Monthly Revenue", value: "${revenue}" }
                SummaryCard { label: "Active Subscriptions", value: "{active}" }
                SummaryCard { label: "Churn Rate", value: "2.3%" }
            }

            div { class: "card",
                div { class: "card-header",
                    div {
                        h2 { class: "card-title", "Subscriptions" }
                        p { class: "card-description", "Manage all subscription plans and billing" }
                    }
                }
                div { class: "card-body",
                    div { class: "list-controls",
                        input {
                            class: "form-input search-input",
                            r#type: "text",
                            placeholder: "Search subscriptions...",
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
                                    th { "Customer" }
                                    th { "Plan" }
                                    th { "Status" }
                                    th { "Amount" }
                                    th { "Renewal Date" }
                                    th { class: "text-right", "Actions" }
                                }
                            }
                            tbody {
                                for sub in rows {
                                    tr { key: "{sub.id}",
                                        td {
                                            div { class: "cell-user",
                                                Avatar { name: sub.user_name.clone(), src: sub.user_avatar.clone() }
                                                div { class: "cell-user-info",
                                                    p { class: "cell-user-name", "{sub.user_name}" }
                                                    p { class: "cell-user-email", "{sub.user_email}" }
                                                }
                                            }
                                        }
                                        td {
                                            span { class: "badge badge-outline", "{sub.plan}" }
                                        }
                                        td {
                                            span { class: "badge {sub.status.badge_class()}", "{sub.status}" }
                                        }
                                        td { class: "cell-amount", "${sub.amount}/month" }
                                        td { class: "text-muted",
                                            {sub.renewal_date.strftime("%b %d, %Y").to_string()}
                                        }
                                        td { class: "text-right",
                                            // Status-appropriate label, but not wired to any
                                            // store mutation in this scope.
                                            button { class: "btn btn-ghost", {sub.status.action_label()} }
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
