//! The host capability the observer is built on.
//!
//! A facility answers "does this condition hold right now" and notifies
//! registered listeners when that answer changes. In the browser this is
//! `window.matchMedia`; tests and pre-mount rendering use
//! [`SimulatedFacility`](crate::media::simulated::SimulatedFacility).

use std::rc::Rc;

use crate::media::condition::Condition;
use crate::media::error::MediaError;

/// Handle to one listener registered with a facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    pub fn from_raw(raw: u64) -> Self {
        ListenerId(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// What a facility tells a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    /// The condition's match state flipped to the carried value.
    Changed(bool),
    /// The notification channel is gone; no further events will follow.
    Closed,
}

pub type Notify = Rc<dyn Fn(MediaEvent)>;

pub trait MatchingFacility {
    /// Name used in log lines.
    fn name(&self) -> &'static str;

    fn matches(&self, condition: &Condition) -> Result<bool, MediaError>;

    /// Registers `notify` for change events on `condition`.
    ///
    /// Implementations must not call `notify` from inside `listen`.
    fn listen(&self, condition: &Condition, notify: Notify) -> Result<ListenerId, MediaError>;

    /// Removes a listener. Unknown ids are ignored.
    fn unlisten(&self, id: ListenerId);
}
