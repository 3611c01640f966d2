//! Responsive media-condition observation.
//!
//! [`MediaEnvironment`] is the single place components learn about the
//! viewport. Components use [`use_media_query`] for one condition and
//! [`use_variant`] to pick between pre-authored variants in priority order.

pub mod browser;
pub mod condition;
pub mod error;
pub mod facility;
pub mod hooks;
pub mod observer;
pub mod simulated;
pub mod variant;

pub use browser::BrowserFacility;
pub use condition::{Condition, Viewport};
pub use error::MediaError;
pub use facility::{ListenerId, MatchingFacility, MediaEvent, Notify};
pub use hooks::{use_media_environment, use_media_query, use_variant};
pub use observer::{MediaEnvironment, Subscription};
pub use simulated::SimulatedFacility;
pub use variant::VariantSelector;
