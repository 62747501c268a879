//! Classification status and its display styling.

use std::fmt;

/// Classification of one measurement slot against its norm.
///
/// Derived, never stored: recomputed on every read from the current
/// record state and the static parameter definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Numeric value below the reference range.
    Low,
    /// Numeric value above the reference range.
    High,
    /// Within the reference range, or a negative sign.
    Normal,
    /// Positive radiographic sign.
    Abnormal,
    /// Empty, unparseable, or no norm declared.
    Neutral,
}

impl Status {
    /// Returns the canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Low => "low",
            Status::High => "high",
            Status::Normal => "normal",
            Status::Abnormal => "abnormal",
            Status::Neutral => "neutral",
        }
    }

    /// Returns the display style for this status.
    ///
    /// Total by construction: every status maps to exactly one style, so
    /// no fallback arm for unknown codes can exist.
    pub fn style(&self) -> StatusStyle {
        match self {
            Status::Low => StatusStyle::Amber,
            Status::High => StatusStyle::Red,
            Status::Normal => StatusStyle::Green,
            Status::Abnormal => StatusStyle::Red,
            Status::Neutral => StatusStyle::Gray,
        }
    }

    /// Returns true when the value deviates from its norm.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Status::Low | Status::High | Status::Abnormal)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Visual style of a classified field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusStyle {
    Amber,
    Red,
    Green,
    Gray,
}

impl StatusStyle {
    /// Returns the canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusStyle::Amber => "amber",
            StatusStyle::Red => "red",
            StatusStyle::Green => "green",
            StatusStyle::Gray => "gray",
        }
    }
}

impl fmt::Display for StatusStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
