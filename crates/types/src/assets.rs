/// Asset identifiers and registry references

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::constants::ASSET_ID_LEN;

// ============================================================================
// Asset Identifier
// ============================================================================

/// Fixed-length on-chain asset identifier.
///
/// Ordering is lexicographic over the raw bytes. This order is total,
/// reflexive, and antisymmetric, and determines which asset of a pair plays
/// the "asset 1" role in a position, independent of which side the UI calls
/// base or quote.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetId(pub [u8; ASSET_ID_LEN]);

impl AssetId {
    /// Create an identifier from raw bytes
    pub const fn new(bytes: [u8; ASSET_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw identifier bytes
    pub const fn as_bytes(&self) -> &[u8; ASSET_ID_LEN] {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// Compare two asset identifiers under the canonical pair order.
///
/// Equivalent to `a.cmp(&b)`; exposed as a named operation because pair
/// canonicalization is a load-bearing protocol rule, not an implementation
/// detail of the derive.
pub fn cmp_asset_ids(a: &AssetId, b: &AssetId) -> Ordering {
    a.0.cmp(&b.0)
}

// ============================================================================
// Asset Reference
// ============================================================================

/// Display metadata for an asset, sourced from the external asset registry.
///
/// `exponent` is the number of display decimal places: one display unit is
/// `10^exponent` base units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetRef {
    /// On-chain identifier
    pub id: AssetId,
    /// Display decimal places (base units per display unit = 10^exponent)
    pub exponent: u32,
    /// Display symbol
    pub symbol: String,
}

impl AssetRef {
    pub fn new(id: AssetId, exponent: u32, symbol: impl Into<String>) -> Self {
        Self {
            id,
            exponent,
            symbol: symbol.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(first: u8) -> AssetId {
        let mut bytes = [0u8; ASSET_ID_LEN];
        bytes[0] = first;
        AssetId::new(bytes)
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        assert_eq!(cmp_asset_ids(&id(1), &id(2)), Ordering::Less);
        assert_eq!(cmp_asset_ids(&id(2), &id(1)), Ordering::Greater);
        assert_eq!(cmp_asset_ids(&id(7), &id(7)), Ordering::Equal);

        // Later bytes break ties
        let mut a = [0u8; ASSET_ID_LEN];
        let mut b = [0u8; ASSET_ID_LEN];
        a[ASSET_ID_LEN - 1] = 1;
        b[ASSET_ID_LEN - 1] = 2;
        assert_eq!(cmp_asset_ids(&AssetId::new(a), &AssetId::new(b)), Ordering::Less);
    }

    #[test]
    fn test_ordering_is_antisymmetric() {
        let (a, b) = (id(3), id(9));
        assert_eq!(cmp_asset_ids(&a, &b), cmp_asset_ids(&b, &a).reverse());
    }

    #[test]
    fn test_display_is_hex() {
        let mut bytes = [0u8; ASSET_ID_LEN];
        bytes[0] = 0xab;
        bytes[1] = 0x01;
        let rendered = AssetId::new(bytes).to_string();
        assert!(rendered.starts_with("ab01"));
        assert_eq!(rendered.len(), ASSET_ID_LEN * 2);
    }
}
