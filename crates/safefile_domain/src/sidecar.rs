use std::ffi::OsString;
use std::path::{Path, PathBuf};

use strum::IntoEnumIterator;

/// One slot of a sidecar group.
///
/// Variants are declared in lifecycle order: a payload is born as
/// `Ephemeral`, confirmed as `Ready`, promoted to `Base`, then demoted to
/// `Backup`. `Tertiary` is only ever consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display, strum_macros::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Sidecar {
    Ephemeral,
    Ready,
    Base,
    Backup,
    Tertiary,
}

impl Sidecar {
    /// Literal suffix appended to the full base file name.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Ephemeral => ".eph",
            Self::Ready => ".rdy",
            Self::Base => "",
            Self::Backup => ".bak",
            Self::Tertiary => ".bk2",
        }
    }
}

/// The five filesystem slots derived from one base path.
///
/// Holds paths only; whether a slot exists is always re-read from the
/// filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidecarGroup {
    ephemeral: PathBuf,
    ready: PathBuf,
    base: PathBuf,
    backup: PathBuf,
    tertiary: PathBuf,
}

impl SidecarGroup {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        Self {
            ephemeral: with_suffix(&base, Sidecar::Ephemeral),
            ready: with_suffix(&base, Sidecar::Ready),
            backup: with_suffix(&base, Sidecar::Backup),
            tertiary: with_suffix(&base, Sidecar::Tertiary),
            base,
        }
    }

    pub fn path(&self, sidecar: Sidecar) -> &Path {
        match sidecar {
            Sidecar::Ephemeral => &self.ephemeral,
            Sidecar::Ready => &self.ready,
            Sidecar::Base => &self.base,
            Sidecar::Backup => &self.backup,
            Sidecar::Tertiary => &self.tertiary,
        }
    }

    pub fn ephemeral(&self) -> &Path {
        &self.ephemeral
    }

    pub fn ready(&self) -> &Path {
        &self.ready
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn backup(&self) -> &Path {
        &self.backup
    }

    pub fn tertiary(&self) -> &Path {
        &self.tertiary
    }

    /// Iterates every slot in lifecycle order.
    pub fn iter(&self) -> impl Iterator<Item = (Sidecar, &Path)> + '_ {
        Sidecar::iter().map(move |sidecar| (sidecar, self.path(sidecar)))
    }
}

// Appends rather than `Path::with_extension`, which would replace `.txt`.
fn with_suffix(base: &Path, sidecar: Sidecar) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(sidecar.suffix());
    PathBuf::from(name)
}
