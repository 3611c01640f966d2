use yew::prelude::*;

use crate::booking::booking_callback;
use crate::config::{self, breakpoints};
use crate::media::{use_media_query, use_variant};

/// Card density; the narrow phone layout shrinks the icon and type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Density {
    Desktop,
    Narrow,
    Phone,
}

impl Density {
    pub fn icon_px(self) -> u32 {
        match self {
            Density::Narrow => 32,
            Density::Desktop | Density::Phone => 40,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Density::Desktop => "density-desktop",
            Density::Narrow => "density-narrow",
            Density::Phone => "density-phone",
        }
    }
}

struct ClientType {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const CLIENT_TYPES: [ClientType; 3] = [
    ClientType {
        icon: "/images/icons/graphIcon.png",
        title: "B2B Service Providers",
        description: "Our landing pages clearly communicate your value proposition, generate quality leads, and drive conversions. We tailor designs to showcase your expertise, build trust, and guide potential clients through your sales process effectively.",
    },
    ClientType {
        icon: "/images/icons/target.png",
        title: "E-commerce Brands",
        description: "We craft high-converting landing pages that showcase your products effectively, optimize your sales funnel, and significantly boost your conversion rates. From product launches to seasonal campaigns, we turn visitors into loyal customers.",
    },
    ClientType {
        icon: "/images/icons/lightningIcon.png",
        title: "SaaS Companies",
        description: "We design landing pages that simplify complex offerings, highlight key features, and drive user signups. Our conversion-focused approach ensures your SaaS product stands out in a crowded market and attracts the right users.",
    },
];

fn cta_label(title: &str, is_desktop: bool) -> String {
    if is_desktop {
        format!("Elevate Your {title} Conversions")
    } else {
        format!("Boost Your {title}")
    }
}

#[function_component(TailoredSolutions)]
pub fn tailored_solutions() -> Html {
    let active = use_state(|| 0usize);
    let is_desktop = use_media_query(breakpoints::DESKTOP);
    let density = use_variant(
        vec![
            (breakpoints::DESKTOP, Density::Desktop),
            (breakpoints::SMALL_DEVICE, Density::Narrow),
        ],
        Density::Phone,
    );

    let client = &CLIENT_TYPES[*active % CLIENT_TYPES.len()];
    let icon_px = density.icon_px().to_string();

    html! {
        <section id="solutions" class={classes!("tailored-solutions", density.class())}>
            <div class="section-heading">
                <h2>{"Tailored Solutions for Every Business"}</h2>
                <p>
                    { if is_desktop {
                        "Discover how our conversion-focused design empowers different business types to thrive in their unique markets."
                    } else {
                        "See how we help different businesses thrive."
                    } }
                </p>
            </div>
            <div class="solution-card">
                <div class="solution-icon">
                    <img src={client.icon} alt="" width={icon_px.clone()} height={icon_px} />
                </div>
                <h3>{client.title}</h3>
                <p>{client.description}</p>
            </div>
            <div class={classes!("solution-tabs", (!is_desktop).then_some("stacked"))}>
                { for CLIENT_TYPES.iter().enumerate().map(|(index, client)| {
                    let select = {
                        let active = active.clone();
                        Callback::from(move |_: MouseEvent| active.set(index))
                    };
                    html! {
                        <button
                            class={classes!("solution-tab", (*active == index).then_some("active"))}
                            onclick={select}
                        >
                            {client.title}
                        </button>
                    }
                }) }
            </div>
            <button class="cta-button" onclick={booking_callback(config::BOOKING_LINK)}>
                {cta_label(client.title, is_desktop)}
            </button>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{VariantSelector, Viewport};

    #[test]
    fn test_density_by_breakpoint_priority() {
        let selector = VariantSelector::from_rules(
            [
                (breakpoints::DESKTOP, Density::Desktop),
                (breakpoints::SMALL_DEVICE, Density::Narrow),
            ],
            Density::Phone,
        )
        .unwrap();
        assert_eq!(*selector.select_for(&Viewport::new(1280.0, 800.0)), Density::Desktop);
        assert_eq!(*selector.select_for(&Viewport::new(375.0, 667.0)), Density::Narrow);
        assert_eq!(*selector.select_for(&Viewport::new(600.0, 900.0)), Density::Phone);
        assert_eq!(Density::Narrow.icon_px(), 32);
    }

    #[test]
    fn test_cta_label() {
        assert_eq!(cta_label("SaaS Companies", true), "Elevate Your SaaS Companies Conversions");
        assert_eq!(cta_label("SaaS Companies", false), "Boost Your SaaS Companies");
    }
}
