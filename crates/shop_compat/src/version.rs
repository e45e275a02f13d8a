//! # Host Version Detection
//!
//! Parses the host server's version tag and turns it into capability
//! choices selected once at startup.
//!
//! The host reports its internals revision as a tag of the form
//! `v<RELEASE>_<MAJOR>_R<REVISION>` (e.g. `v1_9_R2`). Only the major
//! component drives behavior differences: hosts at major 9 and above use the
//! dual-hand actor model and carry an extra off-hand storage slot in
//! player-owned containers.
//!
//! Rather than re-inspecting the version on every call, callers build a
//! [`HostContext`] at plugin startup and pass its [`HostCapabilities`] to the
//! helpers that need them.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// First host major version with the dual-hand actor model and the
/// off-hand storage slot.
pub const DUAL_WIELD_MAJOR: u32 = 9;

/// Errors raised while interpreting a host version tag.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("host version tag `{0}` is not of the form v<RELEASE>_<MAJOR>_R<REVISION>")]
    MalformedTag(String),
}

/// Parsed form of the host's version tag.
///
/// # Examples
///
/// ```rust
/// use shop_compat::HostVersion;
///
/// let version: HostVersion = "v1_9_R2".parse()?;
/// assert_eq!(version.major(), 9);
/// assert_eq!(version.to_string(), "v1_9_R2");
/// # Ok::<(), shop_compat::VersionError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HostVersion {
    release: u32,
    major: u32,
    revision: u32,
}

impl HostVersion {
    pub fn new(release: u32, major: u32, revision: u32) -> Self {
        Self {
            release,
            major,
            revision,
        }
    }

    /// The leading release number (the `1` in `v1_9_R2`).
    pub fn release(&self) -> u32 {
        self.release
    }

    /// The major version number (the `9` in `v1_9_R2`), the only component
    /// used to select behavior variants.
    pub fn major(&self) -> u32 {
        self.major
    }

    /// The internals revision number (the `2` in `v1_9_R2`).
    pub fn revision(&self) -> u32 {
        self.revision
    }
}

impl FromStr for HostVersion {
    type Err = VersionError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let malformed = || VersionError::MalformedTag(tag.to_string());

        let body = tag.strip_prefix('v').ok_or_else(malformed)?;
        let mut parts = body.split('_');
        let release = parts.next().ok_or_else(malformed)?;
        let major = parts.next().ok_or_else(malformed)?;
        let revision = parts
            .next()
            .and_then(|p| p.strip_prefix('R'))
            .ok_or_else(malformed)?;
        if parts.next().is_some() {
            return Err(malformed());
        }

        Ok(Self {
            release: release.parse().map_err(|_| malformed())?,
            major: major.parse().map_err(|_| malformed())?,
            revision: revision.parse().map_err(|_| malformed())?,
        })
    }
}

impl std::fmt::Display for HostVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}_{}_R{}", self.release, self.major, self.revision)
    }
}

/// How the host models an actor's hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandModel {
    /// One held-item slot only (hosts before major 9).
    Single,
    /// Separate main-hand and off-hand slots.
    MainAndOff,
}

/// How the host lays out a player-owned container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageModel {
    /// Body slots only.
    Standard,
    /// Body slots plus the off-hand storage slot.
    WithOffhandSlot,
}

/// Behavior variants detected from the host version, selected once at
/// startup instead of re-branching on the version at every call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostCapabilities {
    pub hand_model: HandModel,
    pub storage_model: StorageModel,
}

impl HostCapabilities {
    /// Selects the capability set for the given host version.
    pub fn detect(version: &HostVersion) -> Self {
        if version.major() >= DUAL_WIELD_MAJOR {
            Self {
                hand_model: HandModel::MainAndOff,
                storage_model: StorageModel::WithOffhandSlot,
            }
        } else {
            Self {
                hand_model: HandModel::Single,
                storage_model: StorageModel::Standard,
            }
        }
    }
}

/// Startup bundle of the parsed host version and its detected capabilities.
///
/// # Examples
///
/// ```rust
/// use shop_compat::{HandModel, HostContext};
///
/// let ctx = HostContext::from_tag("v1_10_R1")?;
/// assert_eq!(ctx.capabilities().hand_model, HandModel::MainAndOff);
/// # Ok::<(), shop_compat::VersionError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostContext {
    version: HostVersion,
    capabilities: HostCapabilities,
}

impl HostContext {
    pub fn new(version: HostVersion) -> Self {
        Self {
            version,
            capabilities: HostCapabilities::detect(&version),
        }
    }

    /// Builds a context from the raw tag reported by the host runtime.
    pub fn from_tag(tag: &str) -> Result<Self, VersionError> {
        tag.parse().map(Self::new)
    }

    pub fn version(&self) -> &HostVersion {
        &self.version
    }

    pub fn capabilities(&self) -> HostCapabilities {
        self.capabilities
    }
}
