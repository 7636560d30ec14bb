use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod random;
mod state {
    pub mod decision;
    pub mod narrative;
}
mod components {
    pub mod floating_hearts;
    pub mod gallery;
    pub mod loading_screen;
    pub mod playlist;
    pub mod progress_bar;
    pub mod proposal;
    pub mod section;
}
mod pages {
    pub mod card;
    pub mod not_found;
}

use pages::{card::Card, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Card,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Card => {
            info!("Rendering card");
            html! { <Card /> }
        }
        Route::NotFound => {
            info!("Rendering not found page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting card");
    yew::Renderer::<App>::new().render();
}
