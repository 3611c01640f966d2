use yew::prelude::*;

use crate::components::{
    cta::CtaSection,
    faq::Faq,
    features::Features,
    footer::Footer,
    hero::Hero,
    pricing::Pricing,
    solutions::TailoredSolutions,
    technologies::Technologies,
    testimonials::Testimonials,
    work::RecentWork,
};
use crate::scroll::scroll_to_section;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    /// Section to bring into view once the page has rendered.
    #[prop_or_default]
    pub section: Option<&'static str>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    use_effect_with_deps(
        move |section: &Option<&'static str>| {
            if let Some(section) = section {
                scroll_to_section(section);
            }
            || ()
        },
        props.section,
    );

    html! {
        <main class="landing-page">
            <Hero />
            <RecentWork />
            <Features />
            <TailoredSolutions />
            <Technologies />
            <Pricing />
            <Testimonials />
            <Faq />
            <CtaSection />
            <Footer />
        </main>
    }
}
