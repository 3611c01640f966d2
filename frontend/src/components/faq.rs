use yew::prelude::*;
use web_sys::MouseEvent;

use crate::booking::booking_callback;
use crate::config::{self, breakpoints};
use crate::media::use_media_query;

struct FaqEntry {
    question: &'static str,
    desktop: &'static str,
    mobile: &'static str,
}

impl FaqEntry {
    fn answer(&self, is_mobile: bool) -> &'static str {
        if is_mobile { self.mobile } else { self.desktop }
    }
}

const FAQS: [FaqEntry; 4] = [
    FaqEntry {
        question: "How soon can I expect results?",
        desktop: "Fast. We typically see meaningful improvements within 1-2 weeks, delivering quick wins while building long-term success.",
        mobile: "Fast. We typically see improvements within 1-2 weeks.",
    },
    FaqEntry {
        question: "What sets your service apart?",
        desktop: "We design and build high-performance websites and connect them to a CMS, so you can update content without relying on a tech team.",
        mobile: "Fast websites with a CMS you control, no tech team needed.",
    },
    FaqEntry {
        question: "Can I edit my website without a developer?",
        desktop: "Yes. Text, images and layouts are all editable from the CMS without touching a single line of code.",
        mobile: "Yes. Everything is editable from the CMS, no code required.",
    },
    FaqEntry {
        question: "What if I'm not happy with the results?",
        desktop: "We keep iterating with you until the page performs. If we cannot agree on a direction, you do not pay for the next milestone.",
        mobile: "We iterate until it performs, or you skip the next milestone.",
    },
];

/// Accordion state: at most one answer is expanded.
fn toggled(open: Option<usize>, index: usize) -> Option<usize> {
    if open == Some(index) { None } else { Some(index) }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    is_mobile: bool,
    open: bool,
    on_toggle: Callback<usize>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let Some(entry) = FAQS.get(props.index) else {
        return html! {};
    };

    let toggle = {
        let index = props.index;
        props.on_toggle.reform(move |e: MouseEvent| {
            e.prevent_default();
            index
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then_some("open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={props.open.to_string()}>
                <span class="question-text">{entry.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            if props.open {
                <div class="faq-answer">
                    <p>{entry.answer(props.is_mobile)}</p>
                </div>
            }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let is_mobile = use_media_query(breakpoints::MOBILE);
    let open = use_state(|| None::<usize>);

    let on_toggle = {
        let open = open.clone();
        Callback::from(move |index: usize| open.set(toggled(*open, index)))
    };

    html! {
        <section id="faq" class="faq-section">
            <h2>{"Frequently Asked Questions"}</h2>
            { for (0..FAQS.len()).map(|index| html! {
                <FaqItem
                    index={index}
                    is_mobile={is_mobile}
                    open={*open == Some(index)}
                    on_toggle={on_toggle.clone()}
                />
            }) }
            <div class="faq-cta">
                <p>{"Still have questions?"}</p>
                <button class="faq-cta-button" onclick={booking_callback(config::BOOKING_LINK)}>
                    {if is_mobile { "Book a Call" } else { "Book a Free Strategy Call" }}
                </button>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_answers_are_shorter() {
        for entry in &FAQS {
            assert!(entry.answer(true).len() < entry.answer(false).len(), "{}", entry.question);
        }
    }

    #[test]
    fn test_accordion_keeps_one_item_open() {
        let open = toggled(None, 1);
        assert_eq!(open, Some(1));
        assert_eq!(toggled(open, 2), Some(2));
        assert_eq!(toggled(Some(2), 2), None);
    }
}
