//! # Media condition observer.
//!
//! [`MediaEnvironment`] hands out one [`Subscription`] per `observe` call and
//! keeps its match state current until the subscription is released.
//!
//! ## Two-phase initialization
//! ```text
//! observe(c) ── facility attached? ──yes──► value = facility.matches(c), listen
//!                     │
//!                     no
//!                     ▼
//!              value = false (pending)
//!                     │
//! attach(facility) ───┴──► matches(c), listen; deliver once if it differs
//! ```
//!
//! ## Rules
//! - Before a facility is attached every condition reports `false`.
//! - Each facility change event is delivered as exactly one update, in order.
//! - A released subscription never sees another update, even one already in flight.
//! - Losing the notification channel freezes the subscription at its last value.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use log::{debug, error, info, warn};

use crate::media::condition::Condition;
use crate::media::error::MediaError;
use crate::media::facility::{ListenerId, MatchingFacility, MediaEvent, Notify};

type OnChange = Rc<dyn Fn(bool)>;

struct Entry {
    condition: Condition,
    matches: Rc<Cell<bool>>,
    frozen: Rc<Cell<bool>>,
    listener: Option<ListenerId>,
    on_change: OnChange,
}

impl Entry {
    fn is_pending(&self) -> bool {
        self.listener.is_none() && !self.frozen.get()
    }

    fn freeze(&mut self) {
        self.listener = None;
        self.frozen.set(true);
    }
}

#[derive(Default)]
struct Registry {
    facility: Option<Rc<dyn MatchingFacility>>,
    entries: BTreeMap<u64, Entry>,
    next_id: u64,
}

/// Shared entry point for observing media conditions.
///
/// Cloning is cheap and clones share the same facility and subscriptions.
#[derive(Clone, Default)]
pub struct MediaEnvironment {
    inner: Rc<RefCell<Registry>>,
}

impl PartialEq for MediaEnvironment {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for MediaEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.inner.borrow();
        f.debug_struct("MediaEnvironment")
            .field("facility", &registry.facility.as_ref().map(|f| f.name()))
            .field("subscriptions", &registry.entries.len())
            .finish()
    }
}

impl MediaEnvironment {
    /// Creates an environment with no facility; everything reports `false`
    /// until [`attach`](Self::attach) is called.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_facility(facility: Rc<dyn MatchingFacility>) -> Self {
        let env = Self::new();
        env.attach(facility);
        env
    }

    pub fn is_attached(&self) -> bool {
        self.inner.borrow().facility.is_some()
    }

    /// Number of live (unreleased) subscriptions.
    pub fn subscription_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// One-shot check of `condition` without subscribing.
    ///
    /// Returns the provisional `false` when no facility is available.
    pub fn current(&self, condition: &str) -> Result<bool, MediaError> {
        let condition = Condition::parse(condition)?;
        let facility = self.inner.borrow().facility.clone();
        match facility.map(|f| f.matches(&condition)) {
            Some(Ok(matches)) => Ok(matches),
            Some(Err(MediaError::FacilityUnavailable)) | None => Ok(false),
            Some(Err(err)) => Err(err),
        }
    }

    /// Starts observing `condition`.
    ///
    /// `on_change` runs once per facility change event (and once more for the
    /// correction after a late [`attach`](Self::attach)). The initial value is
    /// available from [`Subscription::matches`].
    pub fn observe<F>(&self, condition: &str, on_change: F) -> Result<Subscription, MediaError>
    where
        F: Fn(bool) + 'static,
    {
        self.observe_condition(Condition::parse(condition)?, on_change)
    }

    pub fn observe_condition<F>(
        &self,
        condition: Condition,
        on_change: F,
    ) -> Result<Subscription, MediaError>
    where
        F: Fn(bool) + 'static,
    {
        let (id, facility) = {
            let mut registry = self.inner.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            (id, registry.facility.clone())
        };

        let (initial, listener) = match facility {
            Some(facility) => match self.connect(facility.as_ref(), id, &condition) {
                Ok((matches, listener)) => (matches, Some(listener)),
                Err(MediaError::FacilityUnavailable) => (false, None),
                Err(err) => return Err(err),
            },
            None => (false, None),
        };
        debug!(
            "observing `{}` (id {id}): initial={initial}, pending={}",
            condition,
            listener.is_none()
        );

        let matches = Rc::new(Cell::new(initial));
        let frozen = Rc::new(Cell::new(false));
        self.inner.borrow_mut().entries.insert(
            id,
            Entry {
                condition: condition.clone(),
                matches: matches.clone(),
                frozen: frozen.clone(),
                listener,
                on_change: Rc::new(on_change),
            },
        );

        Ok(Subscription {
            id,
            condition,
            registry: Rc::downgrade(&self.inner),
            matches,
            frozen,
            released: Cell::new(false),
        })
    }

    /// Installs the matching facility and resolves every pending subscription.
    ///
    /// Subscriptions whose real state is not the provisional `false` receive
    /// exactly one corrective update. Attaching over an existing facility
    /// moves every live listener to the new one.
    pub fn attach(&self, facility: Rc<dyn MatchingFacility>) {
        info!("attaching media facility `{}`", facility.name());

        let (previous, stale, pending) = {
            let mut registry = self.inner.borrow_mut();
            let previous = registry.facility.replace(facility.clone());
            let mut stale = Vec::new();
            for entry in registry.entries.values_mut() {
                if let Some(listener) = entry.listener.take() {
                    stale.push(listener);
                }
            }
            let pending: Vec<(u64, Condition)> = registry
                .entries
                .iter()
                .filter(|(_, entry)| entry.is_pending())
                .map(|(id, entry)| (*id, entry.condition.clone()))
                .collect();
            (previous, stale, pending)
        };

        if let Some(previous) = previous {
            for listener in stale {
                previous.unlisten(listener);
            }
        }

        let mut corrections: Vec<(u64, bool)> = Vec::new();
        for (id, condition) in pending {
            match self.connect(facility.as_ref(), id, &condition) {
                Ok((matches, listener)) => {
                    let orphaned = {
                        let mut registry = self.inner.borrow_mut();
                        match registry.entries.get_mut(&id) {
                            Some(entry) => {
                                entry.listener = Some(listener);
                                if entry.matches.get() != matches {
                                    entry.matches.set(matches);
                                    corrections.push((id, matches));
                                }
                                false
                            }
                            None => true,
                        }
                    };
                    if orphaned {
                        facility.unlisten(listener);
                    }
                }
                Err(MediaError::FacilityUnavailable) => {
                    debug!("facility still unavailable for `{condition}`");
                    // Back to pending: report the provisional value again.
                    if let Some(entry) = self.inner.borrow_mut().entries.get_mut(&id) {
                        if entry.matches.replace(false) {
                            corrections.push((id, false));
                        }
                    }
                }
                Err(err) => {
                    error!("{}: {err}", err.as_label());
                    if let Some(entry) = self.inner.borrow_mut().entries.get_mut(&id) {
                        entry.freeze();
                    }
                }
            }
        }

        // An earlier correction may have released a later subscription.
        for (id, matches) in corrections {
            let on_change = self
                .inner
                .borrow()
                .entries
                .get(&id)
                .filter(|entry| !entry.frozen.get())
                .map(|entry| entry.on_change.clone());
            match on_change {
                Some(on_change) => on_change(matches),
                None => debug!("dropping correction for released subscription {id}"),
            }
        }
    }

    /// Removes the facility. Live subscriptions freeze at their last value.
    pub fn detach(&self) {
        let (facility, listeners) = {
            let mut registry = self.inner.borrow_mut();
            let Some(facility) = registry.facility.take() else {
                return;
            };
            let mut listeners = Vec::new();
            for entry in registry.entries.values_mut() {
                if let Some(listener) = entry.listener {
                    listeners.push(listener);
                    entry.freeze();
                }
            }
            (facility, listeners)
        };

        if !listeners.is_empty() {
            warn!(
                "media facility `{}` detached; {} subscriptions frozen at their last value",
                facility.name(),
                listeners.len()
            );
        }
        for listener in listeners {
            facility.unlisten(listener);
        }
    }

    fn connect(
        &self,
        facility: &dyn MatchingFacility,
        id: u64,
        condition: &Condition,
    ) -> Result<(bool, ListenerId), MediaError> {
        let matches = facility.matches(condition)?;
        let listener = facility.listen(condition, self.notifier(id))?;
        Ok((matches, listener))
    }

    fn notifier(&self, id: u64) -> Notify {
        let registry = Rc::downgrade(&self.inner);
        Rc::new(move |event: MediaEvent| {
            if let Some(registry) = registry.upgrade() {
                deliver(&registry, id, event);
            }
        })
    }
}

fn deliver(registry: &RefCell<Registry>, id: u64, event: MediaEvent) {
    let update = {
        let mut registry = registry.borrow_mut();
        // Liveness check: released subscriptions have no entry.
        let Some(entry) = registry.entries.get_mut(&id) else {
            debug!("dropping {event:?} for released subscription {id}");
            return;
        };
        if entry.frozen.get() {
            return;
        }
        match event {
            MediaEvent::Changed(matches) => {
                entry.matches.set(matches);
                Some((entry.on_change.clone(), matches))
            }
            MediaEvent::Closed => {
                warn!(
                    "notification channel for `{}` closed; freezing at {}",
                    entry.condition,
                    entry.matches.get()
                );
                entry.freeze();
                None
            }
        }
    };

    if let Some((on_change, matches)) = update {
        on_change(matches);
    }
}

/// A live observation of one condition.
///
/// Released exactly once: explicitly via [`release`](Self::release) or when
/// dropped. Further releases are no-ops.
pub struct Subscription {
    id: u64,
    condition: Condition,
    registry: Weak<RefCell<Registry>>,
    matches: Rc<Cell<bool>>,
    frozen: Rc<Cell<bool>>,
    released: Cell<bool>,
}

impl Subscription {
    /// Match state at the most recent check or change event.
    pub fn matches(&self) -> bool {
        self.matches.get()
    }

    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    /// True once the notification channel was lost; the value no longer updates.
    pub fn is_frozen(&self) -> bool {
        self.frozen.get()
    }

    pub fn is_released(&self) -> bool {
        self.released.get()
    }

    pub fn release(&self) {
        if self.released.replace(true) {
            return;
        }
        let Some(registry) = self.registry.upgrade() else {
            return;
        };

        let (entry, facility) = {
            let mut registry = registry.borrow_mut();
            (registry.entries.remove(&self.id), registry.facility.clone())
        };
        debug!("released subscription {} for `{}`", self.id, self.condition);

        if let (Some(Entry { listener: Some(listener), .. }), Some(facility)) = (entry, facility) {
            facility.unlisten(listener);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("condition", &self.condition.as_str())
            .field("matches", &self.matches.get())
            .field("frozen", &self.frozen.get())
            .field("released", &self.released.get())
            .finish()
    }
}
