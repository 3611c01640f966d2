use yew::prelude::*;
use yew_hooks::use_window_scroll;
use web_sys::MouseEvent;

use crate::booking::booking_callback;
use crate::config::{self, breakpoints};
use crate::media::use_media_query;
use crate::scroll::scroll_to_section;

const NAV_ITEMS: [(&str, &str, &str); 4] = [
    ("/work", "work", "Work"),
    ("/pricing", "pricing", "Pricing"),
    ("/testimonials", "testimonials", "Testimonials"),
    ("/faq", "faq", "FAQ"),
];

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let is_mobile = use_media_query(breakpoints::MOBILE);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > 80.0;

    // A menu left open on mobile should not linger after growing to desktop.
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |is_mobile: &bool| {
                if !*is_mobile {
                    menu_open.set(false);
                }
                || ()
            },
            is_mobile,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_links = NAV_ITEMS
        .iter()
        .map(|&(href, section, label)| {
            let onclick = {
                let menu_open = menu_open.clone();
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    menu_open.set(false);
                    scroll_to_section(section);
                })
            };
            html! {
                <a href={href} class="nav-link" onclick={onclick}>{label}</a>
            }
        })
        .collect::<Html>();

    let menu = if !is_mobile {
        html! {
            <nav class="nav-links">{nav_links}</nav>
        }
    } else if *menu_open {
        html! {
            <nav class="nav-links mobile-menu-open">{nav_links}</nav>
        }
    } else {
        html! {}
    };

    html! {
        <header class={classes!("top-nav", is_scrolled.then_some("scrolled"))}>
            <div class="nav-content">
                <a href="/" class="nav-logo">{config::SITE_NAME}</a>
                if is_mobile {
                    <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                }
                {menu}
                if !is_mobile {
                    <button class="nav-cta" onclick={booking_callback(config::BOOKING_LINK)}>
                        {"Get Started"}
                    </button>
                }
            </div>
        </header>
    }
}
