use std::rc::Rc;

use log::{info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

pub mod booking;
pub mod config;
pub mod media;
pub mod scroll;

pub mod components {
    pub mod cta;
    pub mod faq;
    pub mod features;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod pricing;
    pub mod solutions;
    pub mod technologies;
    pub mod testimonials;
    pub mod typewriter;
    pub mod work;
}
pub mod pages {
    pub mod home;
}

use components::header::Header;
use media::{BrowserFacility, MediaEnvironment};
use pages::home::Home;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/work")]
    Work,
    #[at("/pricing")]
    Pricing,
    #[at("/testimonials")]
    Testimonials,
    #[at("/faq")]
    Faq,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Section paths render the home page scrolled to that section.
    pub fn section_id(&self) -> Option<&'static str> {
        match self {
            Route::Work => Some("work"),
            Route::Pricing => Some("pricing"),
            Route::Testimonials => Some("testimonials"),
            Route::Faq => Some("faq"),
            Route::Home | Route::NotFound => None,
        }
    }
}

fn switch(route: Route) -> Html {
    match route.section_id() {
        Some(section) => info!("Rendering Home page at #{section}"),
        None => info!("Rendering Home page"),
    }
    html! { <Home section={route.section_id()} /> }
}

#[function_component]
pub fn App() -> Html {
    let media = use_memo(|_| MediaEnvironment::new(), ());

    // Nothing can be matched until the first render has reached the DOM.
    {
        let media = (*media).clone();
        use_effect_with_deps(
            move |_| {
                match BrowserFacility::from_window() {
                    Some(facility) => media.attach(Rc::new(facility)),
                    None => warn!("no browser window; media conditions stay at their defaults"),
                }
                move || media.detach()
            },
            (),
        );
    }

    html! {
        <ContextProvider<MediaEnvironment> context={(*media).clone()}>
            <BrowserRouter>
                <Header />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<MediaEnvironment>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_routes() {
        assert_eq!(Route::Work.section_id(), Some("work"));
        assert_eq!(Route::Pricing.section_id(), Some("pricing"));
        assert_eq!(Route::Testimonials.section_id(), Some("testimonials"));
        assert_eq!(Route::Faq.section_id(), Some("faq"));
        assert_eq!(Route::Home.section_id(), None);
        assert_eq!(Route::NotFound.section_id(), None);
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Work.to_path(), "/work");
        assert_eq!(Route::Faq.to_path(), "/faq");
        assert_eq!(Route::recognize("/pricing"), Some(Route::Pricing));
    }
}
