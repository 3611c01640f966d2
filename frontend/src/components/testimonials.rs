use yew::prelude::*;

use crate::config::breakpoints;
use crate::media::use_media_query;

struct Testimonial {
    author: &'static str,
    role: &'static str,
    quote: &'static str,
    short_quote: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        author: "Maria L.",
        role: "Founder, Northwind Coffee",
        quote: "Our new landing page doubled online orders within a month, and we can edit every section ourselves.",
        short_quote: "Online orders doubled within a month.",
    },
    Testimonial {
        author: "James K.",
        role: "CEO, Ledgerly",
        quote: "Trial signups went up 60% after the redesign. The team was fast and easy to work with.",
        short_quote: "Trial signups up 60% after the redesign.",
    },
    Testimonial {
        author: "Priya S.",
        role: "Owner, Atlas Fitness",
        quote: "We finally have a site that books consultations for us instead of just looking nice.",
        short_quote: "A site that actually books consultations.",
    },
];

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let is_mobile = use_media_query(breakpoints::MOBILE);

    html! {
        <section id="testimonials" class="testimonials">
            <h2>{"What Our Clients Say"}</h2>
            <div class="testimonial-list">
                { for TESTIMONIALS.iter().map(|t| html! {
                    <figure class="testimonial">
                        <blockquote>
                            { if is_mobile { t.short_quote } else { t.quote } }
                        </blockquote>
                        <figcaption>
                            <span class="testimonial-author">{t.author}</span>
                            if !is_mobile {
                                <span class="testimonial-role">{t.role}</span>
                            }
                        </figcaption>
                    </figure>
                }) }
            </div>
        </section>
    }
}
