use std::rc::Rc;

use log::{error, info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod seo;
mod theme;
mod forms {
    pub mod lead;
    pub mod submit;
}
mod motion {
    pub mod active_section;
    pub mod scroll;
    pub mod visibility;
}
mod widgets {
    pub mod hubspot;
    pub mod script_loader;
}
mod components {
    pub mod footer;
    pub mod navigation;
    pub mod reveal;
    pub mod spotlight;
}
mod pages {
    pub mod blog;
    pub mod home;
    pub mod not_found;
    pub mod sections {
        pub mod about;
        pub mod activities;
        pub mod get_involved;
        pub mod hero;
        pub mod mission;
        pub mod team;
        pub mod why_it_matters;
    }
}

use components::{footer::Footer, navigation::Navigation};
use config::SiteConfig;
use content::SiteContent;
use pages::{blog::Blog, home::Home, not_found::NotFound};
use theme::GlobalStyles;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/blog")]
    Blog,
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
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub content: Rc<SiteContent>,
    pub config: Rc<SiteConfig>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <ContextProvider<Rc<SiteContent>> context={props.content.clone()}>
            <ContextProvider<Rc<SiteConfig>> context={props.config.clone()}>
                <GlobalStyles />
                <BrowserRouter>
                    <a href="#main-content" class="sr-only">{"Skip to main content"}</a>
                    <Navigation />
                    <Switch<Route> render={switch} />
                    <Footer />
                </BrowserRouter>
            </ContextProvider<Rc<SiteConfig>>>
        </ContextProvider<Rc<SiteContent>>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    let content = match SiteContent::load() {
        Ok(content) => Rc::new(content),
        Err(e) => {
            error!("Site content failed to parse: {}", e);
            return;
        }
    };
    let config = Rc::new(SiteConfig::from_build_env());
    info!("Starting application, form strategy: {:?}", config.form);

    yew::Renderer::<App>::with_props(AppProps { content, config }).render();
}
