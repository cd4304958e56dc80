//! Herald Accessibility
//!
//! ARIA vocabulary and screen reader plumbing for the Herald announcement
//! engine.
//!
//! Features:
//! - ARIA roles and live-region politeness levels
//! - Live-region attribute application and readback
//! - Live-region snapshot of a document
//! - Screen reader announcement queue

pub mod aria;
pub mod live;
pub mod output;

pub use aria::{AriaRole, LivePoliteness};
pub use live::{LiveRegion, SR_ONLY_CLASS, SR_ONLY_CSS};
pub use output::{live_regions, LiveAnnouncement, LiveRegionView, ScreenReaderOutput};

/// Accessibility error
#[derive(Debug, thiserror::Error)]
pub enum A11yError {
    #[error("node is not an element")]
    NotAnElement,

    #[error("element is not a live region")]
    NotALiveRegion,

    #[error("invalid ARIA role: {0}")]
    InvalidRole(String),
}
