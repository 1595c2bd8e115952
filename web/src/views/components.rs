use dioxus::prelude::*;

/// Avatar image with an initial fallback when no image is set.
#[component]
pub fn Avatar(name: String, src: Option<String>) -> Element {
    match src {
        Some(url) => rsx! {
            img { class: "avatar", src: "{url}", alt: "{name}" }
        },
        None => {
            let initial = name.chars().next().unwrap_or('?').to_uppercase().to_string();
            rsx! {
                div { class: "avatar avatar-fallback", "{initial}" }
            }
        }
    }
}

/// Overview metric card with a month-over-month delta.
#[component]
pub fn StatCard(title: String, value: String, change: String, positive: bool) -> Element {
    let change_class = if positive { "stat-change stat-up" } else { "stat-change stat-down" };
    let sign = if positive { "+" } else { "" };

    rsx! {
        div { class: "card stat-card",
            p { class: "stat-title", "{title}" }
            p { class: "stat-value", "{value}" }
            p { class: "{change_class}",
                "{sign}{change} "
                span { class: "stat-period", "from last month" }
            }
        }
    }
}

/// Plain label/value summary card.
#[component]
pub fn SummaryCard(label: String, value: String) -> Element {
    rsx! {
        div { class: "card summary-card",
            p { class: "summary-label", "{label}" }
            p { class: "summary-value", "{value}" }
        }
    }
}
