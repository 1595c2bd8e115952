use dioxus::prelude::*;

use crate::views::components::StatCard;

struct Stat {
    title: &'static str,
    value: &'static str,
    change: &'static str,
    positive: bool,
}

const STATS: [Stat; 4] = [
    Stat { title: "Total Revenue", value: "$54,239", change: "12.5%", positive: true },
    Stat { title: "Active Users", value: "2,847", change: "8.2%", positive: true },
    Stat { title: "Subscriptions", value: "1,429", change: "3.1%", positive: false },
    Stat { title: "Growth Rate", value: "23.8%", change: "5.4%", positive: true },
];

struct Activity {
    user: &'static str,
    action: &'static str,
    time: &'static str,
    dot: &'static str,
}

const ACTIVITY: [Activity; 4] = [
    Activity { user: "John Doe", action: "New subscription", time: "2 minutes ago", dot: "dot-success" },
    Activity { user: "Jane Smith", action: "Profile updated", time: "15 minutes ago", dot: "dot-info" },
    Activity { user: "Mike Johnson", action: "Payment failed", time: "1 hour ago", dot: "dot-error" },
    Activity { user: "Sarah Wilson", action: "Account upgraded", time: "2 hours ago", dot: "dot-success" },
];

const REVENUE_BY_MONTH: [(&str, u32); 6] = [
    ("Jan", 4200),
    ("Feb", 5100),
    ("Mar", 4800),
    ("Apr", 6200),
    ("May", 7300),
    ("Jun", 8100),
];

/// SVG polyline points for the revenue series, scaled into a
/// `width` x `height` view box with the series min/max pinned to the
/// vertical edges.
fn chart_points(series: &[(&str, u32)], width: f64, height: f64) -> String {
    let min = series.iter().map(|(_, v)| *v).min().unwrap_or(0) as f64;
    let max = series.iter().map(|(_, v)| *v).max().unwrap_or(0) as f64;
    let span = if max > min { max - min } else { 1.0 };
    let step = if series.len() > 1 {
        width / (series.len() - 1) as f64
    } else {
        0.0
    };

    series
        .iter()
        .enumerate()
        .map(|(i, (_, v))| {
            let x = i as f64 * step;
            let y = height - (*v as f64 - min) / span * height;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn Overview() -> Element {
    let today = jiff::Zoned::now().strftime("%A, %B %d, %Y").to_string();
    let points = chart_points(&REVENUE_BY_MONTH, 300.0, 120.0);

    rsx! {
        div {
            div { class: "page-header page-header-split",
                div {
                    h1 { class: "page-title", "Dashboard Overview" }
                    p { class: "page-subtitle",
                        "Welcome back! Here's what's happening with your business today."
                    }
                }
                div { class: "page-header-aside",
                    p { class: "text-muted", "Last updated" }
                    p { class: "page-header-date", "{today}" }
                }
            }

            div { class: "stat-grid",
                for stat in STATS {
                    StatCard {
                        title: stat.title.to_string(),
                        value: stat.value.to_string(),
                        change: stat.change.to_string(),
                        positive: stat.positive,
                    }
                }
            }

            div { class: "overview-grid",
                div { class: "card chart-card",
                    div { class: "card-header",
                        div {
                            h2 { class: "card-title", "Revenue Analytics" }
                            p { class: "card-description", "Monthly revenue breakdown and trends" }
                        }
                        span { class: "stat-change stat-up", "+18.2%" }
                    }
                    div { class: "card-body",
                        svg {
                            class: "chart",
                            view_box: "0 0 300 120",
                            preserve_aspect_ratio: "none",
                            polyline {
                                points: "{points}",
                                fill: "none",
                                stroke: "currentColor",
                                stroke_width: "3",
                                stroke_linecap: "round",
                                stroke_linejoin: "round",
                            }
                        }
                        div { class: "chart-labels",
                            for (month, _) in REVENUE_BY_MONTH {
                                span { key: "{month}", class: "chart-label", {month} }
                            }
                        }
                    }
                }

                div { class: "card",
                    div { class: "card-header",
                        div {
                            h2 { class: "card-title", "Recent Activity" }
                            p { class: "card-description", "Latest user interactions and system events" }
                        }
                    }
                    div { class: "card-body activity-feed",
                        for activity in ACTIVITY {
                            div { key: "{activity.user}", class: "activity-item",
                                span { class: "activity-dot {activity.dot}" }
                                div { class: "activity-info",
                                    p { class: "activity-user", {activity.user} }
                                    p { class: "activity-action", {activity.action} }
                                    p { class: "activity-time", {activity.time} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_points_pin_min_and_max_to_the_edges() {
        let series = [("a", 100), ("b", 300), ("c", 200)];
        let points = chart_points(&series, 200.0, 100.0);
        // min at the bottom edge, max at the top edge, evenly spaced x.
        assert_eq!(points, "0.0,100.0 100.0,0.0 200.0,50.0");
    }

    #[test]
    fn chart_points_handle_flat_and_tiny_series() {
        let flat = [("a", 500), ("b", 500)];
        assert_eq!(chart_points(&flat, 100.0, 50.0), "0.0,50.0 100.0,50.0");

        let single = [("a", 42)];
        assert_eq!(chart_points(&single, 100.0, 50.0), "0.0,50.0");

        assert_eq!(chart_points(&[], 100.0, 50.0), "");
    }
}
