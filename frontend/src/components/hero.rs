use yew::prelude::*;

use crate::booking::booking_callback;
use crate::components::typewriter::TypewriterText;
use crate::config::{self, breakpoints};
use crate::media::use_variant;
use crate::scroll::smooth_scroll;

/// Headline copy, most specific layout first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Headline {
    /// Tuned line breaks for the iPhone XR viewport.
    Device,
    Compact,
    Full,
}

impl Headline {
    pub fn lines(self) -> &'static [&'static str] {
        match self {
            Headline::Device => &["Craft Pages", "That Boost"],
            Headline::Compact => &["Pages That Boost"],
            Headline::Full => &["Craft High-Converting Pages That Boost"],
        }
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let headline = use_variant(
        vec![
            (breakpoints::IPHONE_XR, Headline::Device),
            (breakpoints::MOBILE, Headline::Compact),
        ],
        Headline::Full,
    );

    html! {
        <section id="hero" class="hero">
            <h1 class="hero-title">
                { for headline.lines().iter().map(|line| html! { <span class="hero-line">{*line}</span> }) }
                <TypewriterText words={vec!["Sales", "Signups", "Revenue"]} />
            </h1>
            <p class="hero-subtitle">
                {"Conversion-focused landing pages, built and shipped fast."}
            </p>
            <div class="hero-cta-group">
                <button class="hero-cta" onclick={booking_callback(config::BOOKING_LINK)}>
                    {"Get Your Free Conversion Audit"}
                </button>
                <a href="/testimonials" class="hero-secondary" onclick={smooth_scroll("testimonials")}>
                    {"See Success Stories"}
                </a>
            </div>
        </section>
    }
}
