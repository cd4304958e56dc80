//! ARIA Support
//!
//! The role and politeness vocabulary announcement regions are built from.

/// ARIA role
///
/// Covers the landmark and live-region roles Herald mounts or observes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AriaRole {
    // Landmark roles
    Banner,
    Complementary,
    ContentInfo,
    Form,
    Main,
    Navigation,
    Region,
    Search,

    // Live region roles
    Alert,
    Log,
    Marquee,
    Status,
    Timer,
}

impl AriaRole {
    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_lowercase().as_str() {
            "banner" => Self::Banner,
            "complementary" => Self::Complementary,
            "contentinfo" => Self::ContentInfo,
            "form" => Self::Form,
            "main" => Self::Main,
            "navigation" => Self::Navigation,
            "region" => Self::Region,
            "search" => Self::Search,
            "alert" => Self::Alert,
            "log" => Self::Log,
            "marquee" => Self::Marquee,
            "status" => Self::Status,
            "timer" => Self::Timer,
            _ => return None,
        })
    }

    /// Attribute value for this role
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Banner => "banner",
            Self::Complementary => "complementary",
            Self::ContentInfo => "contentinfo",
            Self::Form => "form",
            Self::Main => "main",
            Self::Navigation => "navigation",
            Self::Region => "region",
            Self::Search => "search",
            Self::Alert => "alert",
            Self::Log => "log",
            Self::Marquee => "marquee",
            Self::Status => "status",
            Self::Timer => "timer",
        }
    }

    /// Check if role is landmark
    pub fn is_landmark(&self) -> bool {
        matches!(
            self,
            Self::Banner | Self::Complementary | Self::ContentInfo |
            Self::Form | Self::Main | Self::Navigation | Self::Region | Self::Search
        )
    }

    /// Check if role is an implicit live region
    pub fn is_live_region(&self) -> bool {
        matches!(
            self,
            Self::Alert | Self::Log | Self::Marquee | Self::Status | Self::Timer
        )
    }

    /// Politeness implied by the role when `aria-live` is absent
    pub fn implied_politeness(&self) -> LivePoliteness {
        match self {
            Self::Alert => LivePoliteness::Assertive,
            Self::Log | Self::Status => LivePoliteness::Polite,
            _ => LivePoliteness::Off,
        }
    }
}

/// Live region politeness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LivePoliteness {
    #[default]
    Off,
    Polite,
    Assertive,
}

impl LivePoliteness {
    /// Parse from an `aria-live` attribute value
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_lowercase().as_str() {
            "off" => Self::Off,
            "polite" => Self::Polite,
            "assertive" => Self::Assertive,
            _ => return None,
        })
    }

    /// Attribute value for this politeness level
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Polite => "polite",
            Self::Assertive => "assertive",
        }
    }
}
