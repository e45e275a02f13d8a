//! # Hand Resolution
//!
//! Determines which item an actor is currently holding, across the host's
//! single-hand and dual-hand actor models.
//!
//! The model is a [`HandModel`] value picked once at startup (see
//! [`crate::version`]); resolution itself never consults the host version.

use crate::item::ItemDescriptor;
use crate::version::HandModel;

/// An actor's hand slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Main,
    Off,
}

/// Read access to an actor's hand slots, supplied by the host runtime.
///
/// `held_item` returns the raw slot content, which may be the host's
/// empty-item sentinel; it returns `None` when the host has no such slot at
/// all (single-hand hosts expose only [`Hand::Main`]).
pub trait HandHolder {
    type Item: ItemDescriptor;

    fn held_item(&self, hand: Hand) -> Option<&Self::Item>;
}

impl HandModel {
    /// The item in the actor's main hand, or `None` when the slot is empty.
    pub fn main_hand<'a, H: HandHolder>(&self, holder: &'a H) -> Option<&'a H::Item> {
        holder.held_item(Hand::Main).filter(|item| !item.is_empty())
    }

    /// The item in the actor's off hand, or `None` when the slot is empty.
    ///
    /// Always `None` on single-hand hosts: the slot does not exist there,
    /// which is the intended compatibility behavior.
    pub fn off_hand<'a, H: HandHolder>(&self, holder: &'a H) -> Option<&'a H::Item> {
        match self {
            HandModel::Single => None,
            HandModel::MainAndOff => holder.held_item(Hand::Off).filter(|item| !item.is_empty()),
        }
    }

    /// The item the actor most plausibly means to use: the main hand if it
    /// holds anything, otherwise the off hand.
    pub fn preferred_hand<'a, H: HandHolder>(&self, holder: &'a H) -> Option<&'a H::Item> {
        match self {
            HandModel::Single => self.main_hand(holder),
            HandModel::MainAndOff => self.main_hand(holder).or_else(|| self.off_hand(holder)),
        }
    }
}
