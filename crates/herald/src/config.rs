//! Announcer configuration

use herald_a11y::{AriaRole, LivePoliteness, LiveRegion, SR_ONLY_CLASS};

/// Announcer configuration
///
/// The defaults reproduce the markup assistive technology expects from the
/// announcement region: `aria-live="polite"`, `role="region"`,
/// `aria-atomic="true"`, `class="sr-only"`.
#[derive(Debug, Clone)]
pub struct AnnouncerConfig {
    /// `id` attribute of the mounted container element
    pub container_id: String,
    /// Politeness level of the announcement region
    pub politeness: LivePoliteness,
    /// Announce the whole region per update instead of the changed diff
    pub atomic: bool,
    /// Role exposed to assistive technology
    pub role: AriaRole,
    /// Class hiding the region visually without removing it from the
    /// accessibility tree
    pub hidden_class: String,
}

impl Default for AnnouncerConfig {
    fn default() -> Self {
        Self {
            container_id: "screen-reader-supporter".to_string(),
            politeness: LivePoliteness::Polite,
            atomic: true,
            role: AriaRole::Region,
            hidden_class: SR_ONLY_CLASS.to_string(),
        }
    }
}

impl AnnouncerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interrupting announcements (aria-live="assertive")
    pub fn assertive(mut self) -> Self {
        self.politeness = LivePoliteness::Assertive;
        self
    }

    /// Override the container's `id` attribute
    pub fn with_container_id(mut self, id: &str) -> Self {
        self.container_id = id.to_string();
        self
    }

    pub(crate) fn live_region(&self) -> LiveRegion {
        LiveRegion {
            politeness: self.politeness,
            atomic: self.atomic,
            role: self.role,
        }
    }
}
