//! In-memory matching facility driven by an explicit [`Viewport`].

use std::cell::RefCell;

use log::debug;

use crate::media::condition::{Condition, Viewport};
use crate::media::error::MediaError;
use crate::media::facility::{ListenerId, MatchingFacility, MediaEvent, Notify};

struct SimulatedListener {
    id: ListenerId,
    condition: Condition,
    last: bool,
    notify: Notify,
}

struct State {
    viewport: Viewport,
    listeners: Vec<SimulatedListener>,
    next_id: u64,
}

/// Evaluates conditions itself and raises a change event for every listener
/// whose match state flips when the viewport changes, like `matchMedia` does.
pub struct SimulatedFacility {
    state: RefCell<State>,
}

impl SimulatedFacility {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            state: RefCell::new(State {
                viewport,
                listeners: Vec::new(),
                next_id: 0,
            }),
        }
    }

    pub fn with_size(width: f64, height: f64) -> Self {
        Self::new(Viewport::new(width, height))
    }

    pub fn viewport(&self) -> Viewport {
        self.state.borrow().viewport
    }

    pub fn resize(&self, width: f64, height: f64) {
        let mut viewport = self.viewport();
        viewport.width = width;
        viewport.height = height;
        self.set_viewport(viewport);
    }

    /// Replaces the viewport and notifies flipped listeners in registration order.
    pub fn set_viewport(&self, viewport: Viewport) {
        let pending: Vec<(Notify, bool)> = {
            let mut state = self.state.borrow_mut();
            state.viewport = viewport;
            state
                .listeners
                .iter_mut()
                .filter_map(|listener| {
                    let now = listener.condition.matches(&viewport);
                    if now == listener.last {
                        return None;
                    }
                    listener.last = now;
                    Some((listener.notify.clone(), now))
                })
                .collect()
        };

        // Listeners may re-enter the facility, so no borrow is held here.
        for (notify, matches) in pending {
            notify(MediaEvent::Changed(matches));
        }
    }

    /// Drops every listener after telling it the channel is gone.
    pub fn close(&self) {
        let listeners = std::mem::take(&mut self.state.borrow_mut().listeners);
        debug!("simulated facility closing {} listeners", listeners.len());
        for listener in listeners {
            (listener.notify)(MediaEvent::Closed);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }
}

impl MatchingFacility for SimulatedFacility {
    fn name(&self) -> &'static str {
        "simulated"
    }

    fn matches(&self, condition: &Condition) -> Result<bool, MediaError> {
        Ok(condition.matches(&self.state.borrow().viewport))
    }

    fn listen(&self, condition: &Condition, notify: Notify) -> Result<ListenerId, MediaError> {
        let mut state = self.state.borrow_mut();
        let id = ListenerId::from_raw(state.next_id);
        state.next_id += 1;
        let last = condition.matches(&state.viewport);
        state.listeners.push(SimulatedListener {
            id,
            condition: condition.clone(),
            last,
            notify,
        });
        Ok(id)
    }

    fn unlisten(&self, id: ListenerId) {
        self.state.borrow_mut().listeners.retain(|l| l.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<MediaEvent>>>, Notify) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        (events, Rc::new(move |ev: MediaEvent| sink.borrow_mut().push(ev)))
    }

    #[test]
    fn test_fires_only_on_flip() {
        let facility = SimulatedFacility::with_size(1024.0, 768.0);
        let condition = Condition::parse("(max-width: 640px)").unwrap();
        let (events, notify) = recorder();
        facility.listen(&condition, notify).unwrap();

        facility.resize(900.0, 768.0);
        assert!(events.borrow().is_empty());

        facility.resize(500.0, 768.0);
        facility.resize(400.0, 768.0);
        facility.resize(700.0, 768.0);
        assert_eq!(
            *events.borrow(),
            vec![MediaEvent::Changed(true), MediaEvent::Changed(false)]
        );
    }

    #[test]
    fn test_unlisten_stops_events() {
        let facility = SimulatedFacility::with_size(1024.0, 768.0);
        let condition = Condition::parse("(max-width: 640px)").unwrap();
        let (events, notify) = recorder();
        let id = facility.listen(&condition, notify).unwrap();
        assert_eq!(facility.listener_count(), 1);

        facility.unlisten(id);
        facility.unlisten(id);
        assert_eq!(facility.listener_count(), 0);

        facility.resize(500.0, 768.0);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_close_sends_closed() {
        let facility = SimulatedFacility::with_size(1024.0, 768.0);
        let condition = Condition::parse("(min-width: 769px)").unwrap();
        let (events, notify) = recorder();
        facility.listen(&condition, notify).unwrap();

        facility.close();
        assert_eq!(*events.borrow(), vec![MediaEvent::Closed]);
        assert_eq!(facility.listener_count(), 0);
    }
}
