//! # Item Descriptors
//!
//! The item abstraction consumed by the counting, hand-resolution and codec
//! helpers, plus [`ItemStack`], the stock descriptor used by shop plugins.
//!
//! Similarity is the host's notion of "same item, quantity aside" — it is
//! what stacking and counting are defined over. The helpers in this crate
//! only consume the predicate; [`ItemStack`] supplies the stock definition.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Material id of the empty-slot sentinel.
pub const AIR: &str = "air";

/// An opaque, stackable game item as seen by the helpers.
pub trait ItemDescriptor {
    /// Stack quantity carried by this descriptor.
    fn quantity(&self) -> u32;

    /// Whether this descriptor is the host's "no item" sentinel.
    fn is_empty(&self) -> bool;

    /// Host-defined equality ignoring quantity.
    fn is_similar(&self, other: &Self) -> bool;
}

/// Stock item descriptor: material, quantity and display metadata.
///
/// Two stacks are similar when everything but the quantity matches.
///
/// # Examples
///
/// ```rust
/// use shop_compat::{ItemDescriptor, ItemStack};
///
/// let three = ItemStack::new("oak_log", 3);
/// let sixty_four = ItemStack::new("oak_log", 64);
/// assert!(three.is_similar(&sixty_four));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub material: String,
    pub amount: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lore: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub enchantments: BTreeMap<String, u32>,
}

impl ItemStack {
    pub fn new(material: impl Into<String>, amount: u32) -> Self {
        Self {
            material: material.into(),
            amount,
            display_name: None,
            lore: Vec::new(),
            enchantments: BTreeMap::new(),
        }
    }

    /// The empty-slot sentinel.
    pub fn air() -> Self {
        Self::new(AIR, 0)
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_lore(mut self, lore: Vec<String>) -> Self {
        self.lore = lore;
        self
    }

    pub fn with_enchantment(mut self, name: impl Into<String>, level: u32) -> Self {
        self.enchantments.insert(name.into(), level);
        self
    }
}

impl ItemDescriptor for ItemStack {
    fn quantity(&self) -> u32 {
        self.amount
    }

    fn is_empty(&self) -> bool {
        self.material == AIR
    }

    fn is_similar(&self, other: &Self) -> bool {
        self.material == other.material
            && self.display_name == other.display_name
            && self.lore == other.lore
            && self.enchantments == other.enchantments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similarity_ignores_quantity() {
        let a = ItemStack::new("emerald", 1);
        let b = ItemStack::new("emerald", 64);
        assert!(a.is_similar(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_similarity_respects_metadata() {
        let plain = ItemStack::new("iron_sword", 1);
        let named = ItemStack::new("iron_sword", 1).with_display_name("Excalibur");
        let enchanted = ItemStack::new("iron_sword", 1).with_enchantment("sharpness", 5);
        assert!(!plain.is_similar(&named));
        assert!(!plain.is_similar(&enchanted));
        assert!(named.is_similar(&named.clone()));
    }

    #[test]
    fn test_air_is_empty() {
        assert!(ItemStack::air().is_empty());
        assert!(!ItemStack::new("stone", 1).is_empty());
    }
}
