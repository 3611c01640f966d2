use yew::prelude::*;

use crate::booking::booking_callback;
use crate::config;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "line-chart",
        title: "Data-Driven Optimization",
        description: "Leverage analytics to continuously improve conversion rates.",
    },
    Feature {
        icon: "zap",
        title: "Psychology-Driven Design",
        description: "Implement persuasive design principles to boost engagement.",
    },
    Feature {
        icon: "target",
        title: "Conversion-Focused Copy",
        description: "Craft compelling narratives that drive action and sales.",
    },
    Feature {
        icon: "rocket",
        title: "Rapid Implementation",
        description: "Quick turnaround times to get your optimized pages live fast.",
    },
];

#[function_component(Features)]
pub fn features() -> Html {
    let hovered = use_state(|| None::<usize>);

    html! {
        <section id="features" class="features">
            <div class="section-heading">
                <h2>{"Unlock the Power of High-Converting Pages"}</h2>
                <p>
                    {"Transform your website into a sales-generating machine with our proven conversion optimization strategies."}
                </p>
            </div>
            <div class="feature-grid">
                { for FEATURES.iter().enumerate().map(|(index, feature)| {
                    let enter = {
                        let hovered = hovered.clone();
                        Callback::from(move |_: MouseEvent| hovered.set(Some(index)))
                    };
                    let leave = {
                        let hovered = hovered.clone();
                        Callback::from(move |_: MouseEvent| hovered.set(None))
                    };
                    html! {
                        <div
                            class={classes!("feature-card", (*hovered == Some(index)).then_some("active"))}
                            onmouseenter={enter}
                            onmouseleave={leave}
                        >
                            <div class="feature-icon">
                                <i class={classes!("icon", format!("icon-{}", feature.icon))}></i>
                            </div>
                            <h4>{feature.title}</h4>
                            <p>{feature.description}</p>
                        </div>
                    }
                }) }
            </div>
            <button class="cta-button" onclick={booking_callback(config::BOOKING_LINK)}>
                {"Boost Your Conversions Now"}
            </button>
        </section>
    }
}
