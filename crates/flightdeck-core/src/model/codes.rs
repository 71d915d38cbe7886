// ── Closed code sets ──
//
// Gates and statuses are fixed enumerations. Pickers iterate `all()`,
// which returns the variants in declaration order.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Boarding gate. Concourses A through C, seven gates each.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    VariantArray,
)]
#[strum(ascii_case_insensitive)]
pub enum Gate {
    #[default]
    A1,
    A2,
    A3,
    A4,
    A5,
    A6,
    A7,
    B1,
    B2,
    B3,
    B4,
    B5,
    B6,
    B7,
    C1,
    C2,
    C3,
    C4,
    C5,
    C6,
    C7,
}

impl Gate {
    /// Every gate, in picker order.
    pub fn all() -> &'static [Gate] {
        Self::VARIANTS
    }
}

/// Flight status as reported by the flights service.
///
/// Assigned server-side; the client never sends one on create.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[strum(ascii_case_insensitive)]
pub enum FlightStatus {
    Scheduled,
    Delayed,
    Cancelled,
    Boarding,
    Departed,
    Landed,
}

impl FlightStatus {
    /// Every status, in picker order.
    pub fn all() -> &'static [FlightStatus] {
        Self::VARIANTS
    }

    /// No further status changes are expected.
    pub fn is_final(self) -> bool {
        matches!(self, Self::Cancelled | Self::Landed)
    }
}
