//! `window.matchMedia` backed facility.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryList, MediaQueryListEvent, Window};

use crate::media::condition::Condition;
use crate::media::error::MediaError;
use crate::media::facility::{ListenerId, MatchingFacility, MediaEvent, Notify};

struct BrowserListener {
    list: MediaQueryList,
    callback: Closure<dyn Fn(MediaQueryListEvent)>,
}

impl BrowserListener {
    fn detach(&self) {
        if self
            .list
            .remove_event_listener_with_callback("change", self.callback.as_ref().unchecked_ref())
            .is_err()
        {
            warn!("failed to remove change listener for `{}`", self.list.media());
        }
    }
}

pub struct BrowserFacility {
    window: Window,
    listeners: RefCell<HashMap<ListenerId, BrowserListener>>,
    next_id: Cell<u64>,
}

impl BrowserFacility {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            listeners: RefCell::new(HashMap::new()),
            next_id: Cell::new(0),
        }
    }

    /// `None` outside a browser window (workers, tests).
    pub fn from_window() -> Option<Self> {
        web_sys::window().map(Self::new)
    }

    fn query(&self, condition: &Condition) -> Result<MediaQueryList, MediaError> {
        match self.window.match_media(condition.as_str()) {
            Ok(Some(list)) => Ok(list),
            Ok(None) => Err(MediaError::FacilityUnavailable),
            Err(_) => Err(MediaError::descriptor(
                condition.as_str(),
                "rejected by matchMedia",
            )),
        }
    }
}

impl MatchingFacility for BrowserFacility {
    fn name(&self) -> &'static str {
        "browser"
    }

    fn matches(&self, condition: &Condition) -> Result<bool, MediaError> {
        Ok(self.query(condition)?.matches())
    }

    fn listen(&self, condition: &Condition, notify: Notify) -> Result<ListenerId, MediaError> {
        let list = self.query(condition)?;
        let callback = Closure::<dyn Fn(MediaQueryListEvent)>::new(move |event: MediaQueryListEvent| {
            notify(MediaEvent::Changed(event.matches()));
        });
        list.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
            .map_err(|_| MediaError::FacilityUnavailable)?;

        let id = ListenerId::from_raw(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.listeners
            .borrow_mut()
            .insert(id, BrowserListener { list, callback });
        Ok(id)
    }

    fn unlisten(&self, id: ListenerId) {
        let listener = self.listeners.borrow_mut().remove(&id);
        if let Some(listener) = listener {
            listener.detach();
        }
    }
}

impl Drop for BrowserFacility {
    fn drop(&mut self) {
        for (_, listener) in self.listeners.get_mut().drain() {
            listener.detach();
        }
    }
}
