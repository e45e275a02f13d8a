//! # Inventory Counting
//!
//! Sums matching item quantities across a container's slots.
//!
//! Player-owned containers are traversed in a fixed order: the off-hand
//! storage slot first (on hosts whose storage model has one), then the 36
//! body slots. General containers are traversed front to back over their
//! full size. Empty slots are skipped; the count is a pure read.

use crate::item::ItemDescriptor;
use crate::version::{HostCapabilities, StorageModel};

/// Number of body slots in a player-owned container.
pub const PLAYER_BODY_SLOTS: usize = 36;

/// Slot index of the off-hand storage slot in a player-owned container.
pub const OFFHAND_STORAGE_SLOT: usize = 40;

/// Distinguishes the player-owned container layout from general storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// Plain storage: every slot from 0 to `size - 1` counts.
    General,
    /// A player's own inventory: body slots plus, on newer hosts, the
    /// off-hand storage slot.
    PlayerOwned,
}

/// A slot-indexed holder of item descriptors, supplied by the host runtime.
pub trait Container {
    type Item: ItemDescriptor;

    fn kind(&self) -> ContainerKind;

    /// Total number of addressable slots.
    fn size(&self) -> usize;

    /// Content of the given slot, or `None` when the slot is vacant.
    fn item(&self, slot: usize) -> Option<&Self::Item>;
}

/// Counts how many of `target` the container holds.
///
/// Sums the quantity of every non-empty slot whose content is similar to
/// `target` under the traversal order for the container's kind.
///
/// # Examples
///
/// ```rust,ignore
/// let caps = HostContext::from_tag("v1_9_R1")?.capabilities();
/// let total = count_similar(&inventory, caps, &ItemStack::new("emerald", 1));
/// ```
pub fn count_similar<C: Container>(container: &C, caps: HostCapabilities, target: &C::Item) -> u32 {
    let slots: Vec<usize> = match container.kind() {
        ContainerKind::PlayerOwned => {
            let mut slots = Vec::with_capacity(PLAYER_BODY_SLOTS + 1);
            if caps.storage_model == StorageModel::WithOffhandSlot {
                slots.push(OFFHAND_STORAGE_SLOT);
            }
            slots.extend(0..PLAYER_BODY_SLOTS);
            slots
        }
        ContainerKind::General => (0..container.size()).collect(),
    };

    slots
        .into_iter()
        .filter_map(|slot| container.item(slot))
        .filter(|item| item.is_similar(target))
        .map(|item| item.quantity())
        .sum()
}
