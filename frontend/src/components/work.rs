use yew::prelude::*;

use crate::config::breakpoints;
use crate::media::use_media_query;

struct Project {
    name: &'static str,
    category: &'static str,
    image: &'static str,
}

const PROJECTS: [Project; 4] = [
    Project { name: "Northwind Coffee", category: "E-commerce", image: "/assets/work/northwind.webp" },
    Project { name: "Ledgerly", category: "SaaS", image: "/assets/work/ledgerly.webp" },
    Project { name: "Atlas Fitness", category: "Local business", image: "/assets/work/atlas.webp" },
    Project { name: "Brightside Dental", category: "Healthcare", image: "/assets/work/brightside.webp" },
];

/// How many project cards fit the layout.
fn visible_projects(is_mobile: bool) -> usize {
    if is_mobile { 2 } else { PROJECTS.len() }
}

#[function_component(RecentWork)]
pub fn recent_work() -> Html {
    let is_mobile = use_media_query(breakpoints::MOBILE);

    html! {
        <section id="work" class={classes!("recent-work", is_mobile.then_some("stacked"))}>
            <h2>{"Our Recent Work"}</h2>
            <div class="work-grid">
                { for PROJECTS.iter().take(visible_projects(is_mobile)).map(|project| html! {
                    <article class="work-card">
                        <img src={project.image} alt={project.name} loading="lazy" />
                        <h3>{project.name}</h3>
                        <p class="work-category">{project.category}</p>
                    </article>
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_shows_fewer_projects() {
        assert_eq!(visible_projects(true), 2);
        assert_eq!(visible_projects(false), PROJECTS.len());
    }
}
