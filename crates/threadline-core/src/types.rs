//! Shared types for the threadline upload wizard.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Create a new set of dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}px", self.width, self.height)
    }
}

/// Which print placement a reference image belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Print on the front of the garment.
    Front,
    /// Print on the back of the garment.
    Back,
}

impl Side {
    /// Both sides, in display order.
    pub const ALL: [Self; 2] = [Self::Front, Self::Back];

    /// Capitalized display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Front => "Front",
            Self::Back => "Back",
        }
    }

    /// Lowercase key used in DOM ids and serialized manifests.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
        }
    }

    /// DOM id of the hidden file input for this side.
    #[must_use]
    pub const fn input_id(self) -> &'static str {
        match self {
            Self::Front => "front-file",
            Self::Back => "back-file",
        }
    }

    /// Colored marker shown next to the side's headings.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Front => "🔵",
            Self::Back => "🟣",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_display_matches_catalog_copy() {
        assert_eq!(Dimensions::new(3000, 4000).to_string(), "3000x4000px");
    }

    #[test]
    fn side_input_ids_are_distinct() {
        assert_ne!(Side::Front.input_id(), Side::Back.input_id());
        assert_eq!(Side::Front.input_id(), "front-file");
    }

    #[test]
    fn side_serializes_lowercase() {
        let json = serde_json::to_string(&Side::Back).ok();
        assert_eq!(json.as_deref(), Some("\"back\""));
    }

    #[test]
    fn side_order_is_front_then_back() {
        assert_eq!(Side::ALL, [Side::Front, Side::Back]);
        assert!(Side::Front < Side::Back);
    }
}
