use yew::prelude::*;
use web_sys::MouseEvent;

use crate::booking::{booking_callback, open_booking_modal};
use crate::config::breakpoints;
use crate::media::use_media_query;

const DISCOVERY_CALL_LINK: &str = "speedweb/free-discovery-call";

struct Plan {
    name: &'static str,
    wire_price: &'static str,
    crypto_price: Option<&'static str>,
    desktop: &'static str,
    mobile: &'static str,
    features: &'static [&'static str],
    best_value: bool,
    cal_link: &'static str,
}

impl Plan {
    fn description(&self, is_mobile: bool) -> &'static str {
        if is_mobile { self.mobile } else { self.desktop }
    }

    /// Custom-priced plans are quoted per engagement, not per project.
    fn is_custom(&self) -> bool {
        self.crypto_price.is_none()
    }
}

const PLANS: [Plan; 3] = [
    Plan {
        name: "Starter",
        wire_price: "$999",
        crypto_price: Some("999 USDT"),
        desktop: "Perfect for small businesses and startups.",
        mobile: "For small businesses & startups.",
        features: &[
            "1 High-Converting Landing Page",
            "Performance Analysis",
            "User-Focused Design",
            "Persuasive Content Writing",
            "30-Day Support",
            "1 Round of Revisions",
        ],
        best_value: false,
        cal_link: "speedweb/starter",
    },
    Plan {
        name: "Growth",
        wire_price: "$2,499",
        crypto_price: Some("2,499 USDT"),
        desktop: "Ideal for growing businesses seeking expansion.",
        mobile: "For growing businesses.",
        features: &[
            "3 High-Converting Landing Pages",
            "Advanced Performance Tracking",
            "Conversion Rate Optimization",
            "Marketing Tool Integration",
            "90-Day Support",
            "3 Rounds of Revisions",
            "Priority Support",
        ],
        best_value: true,
        cal_link: "speedweb/growth",
    },
    Plan {
        name: "Enterprise",
        wire_price: "Custom",
        crypto_price: None,
        desktop: "Tailored solutions for large-scale operations.",
        mobile: "For large-scale operations.",
        features: &[
            "Unlimited Landing Pages",
            "Complete Sales Process Optimization",
            "Tailored System Integrations",
            "Personal Account Manager",
            "Ongoing Support",
            "Unlimited Revisions",
            "24/7 Priority Support",
        ],
        best_value: false,
        cal_link: "speedweb/enterprise",
    },
];

const PAYMENT_METHODS: [(&str, &str, &str); 2] = [
    ("bitcoin", "Cryptocurrency", "Pay with BTC, ETH, or USDT"),
    ("building", "Wire Transfer", "Traditional bank transfer"),
];

#[derive(Properties, PartialEq)]
struct PaymentDialogProps {
    plan: usize,
    on_close: Callback<()>,
}

/// Payment method picker; either choice schedules a call for the plan.
#[function_component(PaymentDialog)]
fn payment_dialog(props: &PaymentDialogProps) -> Html {
    let Some(plan) = PLANS.get(props.plan) else {
        return html! {};
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    html! {
        <div class="dialog-backdrop" onclick={close.clone()}>
            <div class="dialog" role="dialog" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <h3>{"Choose Payment Method"}</h3>
                <p class="dialog-description">
                    {"Select your preferred payment method. We'll schedule a call to provide payment details."}
                </p>
                <div class="payment-methods">
                    { for PAYMENT_METHODS.iter().map(|(icon, name, description)| {
                        let on_close = props.on_close.clone();
                        let cal_link = plan.cal_link;
                        let onclick = Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            on_close.emit(());
                            open_booking_modal(cal_link);
                        });
                        html! {
                            <button class="payment-method" onclick={onclick}>
                                <i class={classes!("icon", format!("icon-{icon}"))}></i>
                                <span class="payment-name">{*name}</span>
                                <span class="payment-description">{*description}</span>
                            </button>
                        }
                    }) }
                </div>
                <button class="dialog-close" onclick={close}>{"Close"}</button>
            </div>
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let is_mobile = use_media_query(breakpoints::MOBILE);
    let selected = use_state(|| None::<usize>);

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    html! {
        <section id="pricing" class="pricing">
            <div class="section-heading">
                <h2>{ if is_mobile { "Pricing Plans" } else { "Invest in Your Success" } }</h2>
                <p>
                    { if is_mobile {
                        "Choose your plan and boost conversions."
                    } else {
                        "Choose the plan that fits your business needs and start boosting your conversions today."
                    } }
                </p>
            </div>
            <div class="plan-grid">
                { for PLANS.iter().enumerate().map(|(index, plan)| {
                    let select = {
                        let selected = selected.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            selected.set(Some(index));
                        })
                    };
                    html! {
                        <article class={classes!("plan-card", plan.best_value.then_some("best-value"))}>
                            if plan.best_value {
                                <span class="plan-badge">{"Most Popular"}</span>
                            }
                            <h3>{plan.name}</h3>
                            <p class="plan-description">{plan.description(is_mobile)}</p>
                            <div class="plan-price">
                                <span class="price">{plan.wire_price}</span>
                                if !plan.is_custom() {
                                    <span class="price-unit">{"/project"}</span>
                                }
                                if let Some(crypto) = plan.crypto_price {
                                    <div class="price-alt">{format!("or {crypto}")}</div>
                                }
                            </div>
                            <ul class={classes!("plan-features", is_mobile.then_some("compact"))}>
                                { for plan.features.iter().map(|feature| html! {
                                    <li><i class="icon icon-check"></i>{*feature}</li>
                                }) }
                            </ul>
                            <button class="cta-button w-full" onclick={select}>
                                {"View Payment Options"}
                            </button>
                        </article>
                    }
                }) }
            </div>
            if let Some(plan) = *selected {
                <PaymentDialog plan={plan} on_close={on_close} />
            }
            <div class="pricing-footer">
                <p>
                    { if is_mobile {
                        "Not sure? Let's talk."
                    } else {
                        "Not sure which plan is right for you? Let's discuss your needs."
                    } }
                </p>
                <button class="outline-button" onclick={booking_callback(DISCOVERY_CALL_LINK)}>
                    { if is_mobile { "Free Discovery Call" } else { "Schedule a Free Discovery Call" } }
                </button>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::normalize_cal_link;

    #[test]
    fn test_mobile_descriptions_are_shorter() {
        for plan in &PLANS {
            assert!(plan.description(true).len() < plan.description(false).len(), "{}", plan.name);
        }
    }

    #[test]
    fn test_only_custom_plan_lacks_crypto_price() {
        let custom: Vec<_> = PLANS.iter().filter(|plan| plan.is_custom()).map(|plan| plan.name).collect();
        assert_eq!(custom, vec!["Enterprise"]);
        assert_eq!(PLANS.iter().filter(|plan| plan.best_value).count(), 1);
    }

    #[test]
    fn test_booking_links_are_valid() {
        for link in PLANS.iter().map(|plan| plan.cal_link).chain([DISCOVERY_CALL_LINK]) {
            assert_eq!(normalize_cal_link(link).as_deref(), Some(link));
        }
    }
}
