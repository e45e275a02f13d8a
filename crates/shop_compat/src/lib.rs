//! # Shop Compat
//!
//! Host compatibility helpers for inventory-trading plugins running on a
//! versioned game-server host.
//!
//! The host owns every entity this crate touches — containers, actors,
//! connections — and its internals shift between versions. This crate wraps
//! the version-sensitive operations a shop plugin needs behind a small,
//! stable surface:
//!
//! - **Version detection**: parse the host's version tag once at startup and
//!   derive [`HostCapabilities`] from it ([`version`]).
//! - **Inventory counting**: sum matching item quantities across a
//!   container's slots under the host's layout rules ([`inventory`]).
//! - **Hand resolution**: find what an actor is holding across the
//!   single-hand and dual-hand models ([`hands`]).
//! - **Host bindings**: probe version-scoped integration points without hard
//!   failures ([`bindings`]).
//! - **Packet dispatch**: push a pre-built packet straight to an actor's
//!   connection, with soft failure ([`packet`]).
//! - **Identifier validation**: canonical UUID grammar check ([`ident`]).
//! - **Item tokens**: Base64 round trip of an item descriptor ([`codec`]).
//!
//! ## Quick Start Example
//!
//! ```rust
//! use shop_compat::{HandModel, HostContext};
//!
//! # fn main() -> Result<(), shop_compat::VersionError> {
//! // Once, at plugin startup:
//! let ctx = HostContext::from_tag("v1_9_R2")?;
//! assert_eq!(ctx.capabilities().hand_model, HandModel::MainAndOff);
//! # Ok(())
//! # }
//! ```
//!
//! Every failure mode here is soft: lookups return `None`, dispatch reports
//! a typed error or a boolean, malformed tokens decode to `None`. Nothing in
//! this crate panics across its API or raises into the host's event loop.

pub mod bindings;
pub mod codec;
pub mod hands;
pub mod ident;
pub mod inventory;
pub mod item;
pub mod packet;
pub mod types;
pub mod version;

pub use bindings::{
    qualified_name, BindingNamespace, BindingRegistry, HostBinding, BRIDGE_NAMESPACE,
    INTERNAL_NAMESPACE,
};
pub use codec::{decode_item, encode_item, try_decode_item, CodecError};
pub use hands::{Hand, HandHolder};
pub use ident::is_uuid;
pub use inventory::{
    count_similar, Container, ContainerKind, OFFHAND_STORAGE_SLOT, PLAYER_BODY_SLOTS,
};
pub use item::{ItemDescriptor, ItemStack, AIR};
pub use packet::{dispatch, dispatch_or_log, Actor, DispatchError, Packet, RawConnection};
pub use types::ActorId;
pub use version::{
    HandModel, HostCapabilities, HostContext, HostVersion, StorageModel, VersionError,
    DUAL_WIELD_MAJOR,
};
