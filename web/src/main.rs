use dioxus::prelude::*;

mod session;
mod views;

use views::{DashboardLayout, Login, NotFound, Overview, Settings, Subscriptions, Users};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(DashboardLayout)]
        #[route("/dashboard")]
        Overview {},
        #[route("/dashboard/users")]
        Users {},
        #[route("/dashboard/subscriptions")]
        Subscriptions {},
        #[route("/dashboard/settings")]
        Settings {},
    #[end_layout]
    #[redirect("/", || Route::Overview {})]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // The session gate lives in explicit context provided at the root;
    // the route guards read it rather than any ambient global.
    session::provide_session();

    rsx! {
        document::Title { "MyAlarmPal" }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}
