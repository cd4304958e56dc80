//! Herald
//!
//! A screen-reader announcement engine: a visually hidden ARIA live region
//! plus a controller that updates it on focus, hover, and blur
//! interactions.
//!
//! # Example
//! ```rust
//! use herald::dom::Document;
//! use herald::Announcer;
//!
//! let mut doc = Document::new();
//! let mut announcer = Announcer::new();
//!
//! announcer.mount(&mut doc);
//! announcer.announce(&mut doc, Some("Save button, saves the current draft"));
//! announcer.clear(&mut doc, None);
//! announcer.unmount(&mut doc);
//! ```

mod announcer;
mod config;
mod region;

pub use announcer::Announcer;
pub use config::AnnouncerConfig;
pub use region::Region;

// Re-export sub-crates for advanced usage
pub use herald_a11y as a11y;
pub use herald_dom as dom;

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
