//! The enumerated set of sellable pendrive capacities.

use serde::{Deserialize, Serialize};
use std::fmt;

use musicadrive_core::AppError;

/// A pendrive capacity, restricted to the sizes the store actually sells.
///
/// Serialized as its capacity in gigabytes (e.g. `16`), both over the wire
/// and in the database. Any other value is rejected at the boundary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, PartialOrd, Ord,
)]
#[serde(try_from = "u32", into = "u32")]
#[repr(i32)]
pub enum PendriveSize {
    /// 2 GB.
    Gb2 = 2,
    /// 4 GB.
    Gb4 = 4,
    /// 8 GB.
    Gb8 = 8,
    /// 16 GB (storefront default).
    Gb16 = 16,
    /// 32 GB.
    Gb32 = 32,
    /// 64 GB.
    Gb64 = 64,
    /// 128 GB.
    Gb128 = 128,
}

/// All sellable sizes, smallest first.
pub const PENDRIVE_SIZES: [PendriveSize; 7] = [
    PendriveSize::Gb2,
    PendriveSize::Gb4,
    PendriveSize::Gb8,
    PendriveSize::Gb16,
    PendriveSize::Gb32,
    PendriveSize::Gb64,
    PendriveSize::Gb128,
];

impl PendriveSize {
    /// Return the capacity in gigabytes.
    pub fn as_gb(&self) -> u32 {
        *self as i32 as u32
    }
}

impl Default for PendriveSize {
    fn default() -> Self {
        Self::Gb16
    }
}

impl fmt::Display for PendriveSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} GB", self.as_gb())
    }
}

impl TryFrom<u32> for PendriveSize {
    type Error = AppError;

    fn try_from(gb: u32) -> Result<Self, Self::Error> {
        match gb {
            2 => Ok(Self::Gb2),
            4 => Ok(Self::Gb4),
            8 => Ok(Self::Gb8),
            16 => Ok(Self::Gb16),
            32 => Ok(Self::Gb32),
            64 => Ok(Self::Gb64),
            128 => Ok(Self::Gb128),
            other => Err(AppError::validation(format!(
                "Invalid pendrive capacity: {other} GB. Expected one of: 2, 4, 8, 16, 32, 64, 128"
            ))),
        }
    }
}

impl From<PendriveSize> for u32 {
    fn from(size: PendriveSize) -> Self {
        size.as_gb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_valid() {
        assert_eq!(PendriveSize::try_from(16).unwrap(), PendriveSize::Gb16);
        assert_eq!(PendriveSize::try_from(128).unwrap(), PendriveSize::Gb128);
    }

    #[test]
    fn test_try_from_invalid() {
        assert!(PendriveSize::try_from(0).is_err());
        assert!(PendriveSize::try_from(3).is_err());
        assert!(PendriveSize::try_from(256).is_err());
    }

    #[test]
    fn test_default_is_16gb() {
        assert_eq!(PendriveSize::default().as_gb(), 16);
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&PendriveSize::Gb32).unwrap();
        assert_eq!(json, "32");
        let back: PendriveSize = serde_json::from_str("64").unwrap();
        assert_eq!(back, PendriveSize::Gb64);
        assert!(serde_json::from_str::<PendriveSize>("5").is_err());
    }
}
