use yew::prelude::*;

use crate::booking::booking_callback;
use crate::config::{self, breakpoints};
use crate::media::{use_media_query, use_variant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSize {
    Desktop,
    Small,
    Medium,
}

impl IconSize {
    pub fn badge_class(self) -> &'static str {
        match self {
            IconSize::Desktop => "size-10 sm:size-12 md:size-16",
            IconSize::Small => "size-14",
            IconSize::Medium => "size-16",
        }
    }

    pub fn label_class(self) -> &'static str {
        match self {
            IconSize::Desktop => "text-xs sm:text-sm md:text-base lg:text-lg",
            IconSize::Small => "text-sm",
            IconSize::Medium => "text-base",
        }
    }
}

struct CtaItem {
    icon: &'static str,
    text: &'static str,
    mobile_text: &'static str,
}

const CTA_ITEMS: [CtaItem; 4] = [
    CtaItem { icon: "bar-chart", text: "Crank Up Sales", mobile_text: "Boost Sales" },
    CtaItem { icon: "users", text: "Hook Your Users", mobile_text: "Engage Users" },
    CtaItem { icon: "target", text: "Nail Your Funnels", mobile_text: "Optimize Funnels" },
    CtaItem { icon: "trending-up", text: "Pump Up Revenue", mobile_text: "Grow Revenue" },
];

#[function_component(CtaSection)]
pub fn cta_section() -> Html {
    let is_desktop = use_media_query(breakpoints::DESKTOP);
    let size = use_variant(
        vec![
            (breakpoints::DESKTOP, IconSize::Desktop),
            (breakpoints::SMALL_DEVICE, IconSize::Small),
        ],
        IconSize::Medium,
    );

    let (heading, body, button) = if is_desktop {
        (
            "Supercharge Your Conversion Rates",
            "Our battle-tested strategies have helped businesses like yours grow their online performance. Ready to join them?",
            "Let's Talk Strategy",
        )
    } else {
        (
            "Boost Your Conversions",
            "Our strategies boost online performance. Ready to join?",
            "Talk Strategy",
        )
    };

    html! {
        <section id="cta" class="cta-section">
            <div class="cta-copy">
                <h2>{heading}</h2>
                <p>{body}</p>
                <button
                    class={classes!("cta-button", (!is_desktop).then_some("w-full"))}
                    onclick={booking_callback(config::BOOKING_LINK)}
                >
                    {button}
                </button>
            </div>
            <div class="cta-grid">
                { for CTA_ITEMS.iter().map(|item| html! {
                    <div class="cta-item">
                        <div class={classes!("cta-badge", size.badge_class())}>
                            <i class={classes!("icon", format!("icon-{}", item.icon))}></i>
                        </div>
                        <p class={classes!("cta-label", size.label_class())}>
                            { if is_desktop { item.text } else { item.mobile_text } }
                        </p>
                    </div>
                }) }
            </div>
        </section>
    }
}
