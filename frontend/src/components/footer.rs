use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::config;

const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("Meta (Facebook)", "https://facebook.com"),
    ("X (Twitter)", "https://x.com"),
    ("LinkedIn", "https://linkedin.com"),
    ("Instagram", "https://www.instagram.com/speedwebofficial/"),
];

fn copyright(year: i32) -> String {
    format!("© {year} {}, Inc. All rights reserved.", config::SITE_NAME)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-content">
                <a href={config::get_base_url()} class="footer-brand">
                    <img src="/assets/rocketicon.png" alt={config::SITE_NAME} width="40" height="40" />
                    <span>{config::SITE_NAME}</span>
                </a>
                <div class="footer-social">
                    { for SOCIAL_LINKS.iter().map(|&(title, url)| html! {
                        <a href={url} target="_blank" rel="noopener noreferrer" aria-label={title}>{title}</a>
                    }) }
                </div>
            </div>
            <p class="footer-copyright">{copyright(Utc::now().year())}</p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright(2026), "© 2026 Speedweb, Inc. All rights reserved.");
    }
}
