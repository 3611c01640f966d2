use log::debug;
use web_sys::{window, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::Callback;

/// Smoothly scrolls the element with `target_id` into view.
/// Returns `false` when there is no such element.
pub fn scroll_to_section(target_id: &str) -> bool {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(target_id));
    let Some(element) = element else {
        debug!("no section with id `{target_id}` to scroll to");
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Click handler for in-page anchors: cancels the jump and scrolls smoothly.
pub fn smooth_scroll(target_id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(target_id);
    })
}
