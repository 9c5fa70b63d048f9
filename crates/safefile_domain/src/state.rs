use serde::{Deserialize, Serialize};

use crate::ErrorCode;

/// Recovery state of a sidecar group, as derived from which slots exist.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SafeState {
    /// Only the base file is present, or the base with nothing in flight.
    Normal,
    /// A ready payload or a backup slot can be promoted into the base.
    Recoverable,
    /// An ephemeral payload was abandoned with nothing to fall back on.
    Intervene,
    /// No slot of the group exists.
    DoesNotExist,
}

impl SafeState {
    pub const fn code(self) -> u16 {
        match self {
            Self::Normal => 0,
            Self::Recoverable => 110,
            Self::Intervene => 111,
            Self::DoesNotExist => ErrorCode::DoesNotExist.as_u16(),
        }
    }
}
