//! # Packet Dispatch
//!
//! Delivers a pre-built low-level packet straight to an actor's underlying
//! connection, bypassing the host's per-tick packet queue.
//!
//! Out-of-band dispatch is inherently version-fragile: resolving an actor's
//! raw connection handle can fail on host versions the embedder does not
//! support. [`dispatch`] surfaces that as a typed [`DispatchError`] and does
//! no logging of its own, so callers can wire failures into their own
//! observability. [`dispatch_or_log`] keeps the legacy boolean contract for
//! plugin call sites that treat failure as "not available on this host".

use crate::hands::HandHolder;
use crate::types::ActorId;
use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;
use tracing::{debug, error};

/// A pre-built low-level message ready for the wire.
///
/// The body is an opaque JSON value assembled by the embedder's
/// version-specific adapter; this crate only carries it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Packet {
    pub name: String,
    pub body: serde_json::Value,
}

impl Packet {
    pub fn new(name: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }

    /// Renders the packet for transmission.
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

/// The host's raw, immediate connection write.
pub trait RawConnection {
    fn send_raw(&self, packet: &Packet) -> io::Result<()>;
}

/// A connected actor: hand slots, identity, and (when the embedder could
/// resolve one for this host version) a raw connection handle.
pub trait Actor: HandHolder {
    fn id(&self) -> ActorId;

    /// The actor's raw connection, or `None` when the handle could not be
    /// resolved on the running host version.
    fn connection(&self) -> Option<&dyn RawConnection>;
}

/// Why a packet could not be delivered.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No packet was supplied; nothing was attempted.
    #[error("no packet to send")]
    EmptyPacket,

    /// The actor's raw connection handle is unavailable on this host.
    #[error("connection handle unavailable for actor {0}")]
    NoConnection(ActorId),

    /// The host connection rejected the write.
    #[error("host connection rejected packet `{name}`: {source}")]
    SendFailed {
        name: String,
        #[source]
        source: io::Error,
    },
}

/// Sends `packet` over `actor`'s raw connection.
///
/// An absent packet fails with [`DispatchError::EmptyPacket`] before the
/// connection is touched. This function never logs; see [`dispatch_or_log`]
/// for the logging variant.
pub fn dispatch<A: Actor>(packet: Option<&Packet>, actor: &A) -> Result<(), DispatchError> {
    let packet = packet.ok_or(DispatchError::EmptyPacket)?;
    let connection = actor
        .connection()
        .ok_or_else(|| DispatchError::NoConnection(actor.id()))?;

    connection
        .send_raw(packet)
        .map_err(|source| DispatchError::SendFailed {
            name: packet.name.clone(),
            source,
        })
}

/// Boolean-contract wrapper around [`dispatch`].
///
/// An absent packet yields `false` immediately with nothing logged. Any
/// other failure is logged twice, once on the error channel for operators
/// and once on the debug channel with the error detail, and yields `false`.
pub fn dispatch_or_log<A: Actor>(packet: Option<&Packet>, actor: &A) -> bool {
    match dispatch(packet, actor) {
        Ok(()) => true,
        Err(DispatchError::EmptyPacket) => false,
        Err(err) => {
            // Every non-EmptyPacket error implies a packet was supplied.
            let name = packet.map(|p| p.name.as_str()).unwrap_or_default();
            error!("Failed to send packet {}", name);
            debug!("Failed to send packet {}: {}", name, err);
            false
        }
    }
}
