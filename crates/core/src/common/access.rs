//! Access descriptor passed to both engine entry points.

use serde::Deserialize;

/// Kind of memory access that reached the cache.
///
/// The baseline decision logic treats every kind the same way; the kind is
/// carried so hosts can report it and future policies can special-case it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum AccessKind {
    /// Demand read.
    #[default]
    Load,
    /// Demand write (read-for-ownership).
    #[serde(alias = "RFO")]
    Rfo,
    /// Hardware prefetch fill.
    Prefetch,
    /// Dirty writeback from an upper level.
    Writeback,
}

impl AccessKind {
    /// Maps the numeric access type used by trace formats (0 = load,
    /// 1 = RFO, 2 = prefetch, 3 = writeback). Unknown codes are treated as loads.
    pub const fn from_code(code: u32) -> Self {
        match code {
            1 => Self::Rfo,
            2 => Self::Prefetch,
            3 => Self::Writeback,
            _ => Self::Load,
        }
    }

    /// Returns `true` for demand loads and stores.
    pub const fn is_demand(self) -> bool {
        matches!(self, Self::Load | Self::Rfo)
    }
}

/// Metadata describing one access to the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Access {
    /// Physical byte address. The engine aligns it to the line size itself.
    pub address: u64,
    /// Program counter of the instruction that issued the access.
    pub pc: u64,
    /// Access kind.
    pub kind: AccessKind,
}

impl Access {
    /// Creates a demand load descriptor.
    pub const fn load(address: u64, pc: u64) -> Self {
        Self {
            address,
            pc,
            kind: AccessKind::Load,
        }
    }

    /// Creates a descriptor with an explicit access kind.
    pub const fn new(address: u64, pc: u64, kind: AccessKind) -> Self {
        Self { address, pc, kind }
    }
}
