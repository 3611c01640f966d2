use yew::prelude::*;

use crate::config::breakpoints;
use crate::media::use_media_query;

const TECHNOLOGIES: [(&str, &str); 6] = [
    ("nextdotjs", "Next.js"),
    ("react", "React"),
    ("tailwindcss", "Tailwind CSS"),
    ("radixui", "Radix UI"),
    ("typescript", "TypeScript"),
    ("vercel", "Vercel"),
];

fn copy(is_mobile: bool) -> (&'static str, &'static str) {
    if is_mobile {
        ("Our Tech Stack", "Modern tools for high-performance web apps.")
    } else {
        (
            "Cutting-Edge Technology Stack",
            "We leverage the most modern and powerful tools to build high-performance, scalable web applications.",
        )
    }
}

#[function_component(Technologies)]
pub fn technologies() -> Html {
    let is_mobile = use_media_query(breakpoints::MOBILE);
    let (heading, body) = copy(is_mobile);

    html! {
        <section id="technologies" class="technologies">
            <div class="section-heading">
                <h2>{heading}</h2>
                <p>{body}</p>
            </div>
            <div class="tech-grid">
                { for TECHNOLOGIES.iter().map(|(icon, name)| html! {
                    <div class="tech-card" title={*name}>
                        <i class={classes!("icon", format!("icon-{icon}"))} aria-hidden="true"></i>
                        <span class="tech-name">{*name}</span>
                    </div>
                }) }
            </div>
        </section>
    }
}
