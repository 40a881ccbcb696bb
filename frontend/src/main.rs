use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod components {
    pub mod carousel;
    pub mod fade_in;
    pub mod icons;
    pub mod navbar;
    pub mod section;
}
mod sections {
    pub mod about;
    pub mod donate;
    pub mod events;
    pub mod footer;
    pub mod gallery;
    pub mod hero;
    pub mod seva;
    pub mod timings;
    pub mod visit;
}
mod pages {
    pub mod home;
}

use components::navbar::Navbar;
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting to Home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Navbar />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_resolve_to_home_or_not_found() {
        assert!(Route::recognize("/") == Some(Route::Home));
        assert!(Route::not_found_route() == Some(Route::NotFound));
        assert_eq!(Route::Home.to_path(), "/");
    }
}
