//! # Version-Scoped Host Bindings
//!
//! Lookup of host-internal integration points by name, scoped to the
//! detected host version.
//!
//! The host's internal classes move between versions, so bindings to them
//! cannot be a compile-time contract. Instead the embedding environment
//! registers a [`HostBinding`] handle per supported integration point, keyed
//! by a qualified name that interpolates the running host's version tag into
//! one of two fixed namespaces. Probing for a binding that the current host
//! does not provide is an expected operation: lookups return `None` rather
//! than failing, and callers treat absence as "not available on this host
//! version".

use crate::version::HostVersion;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

/// Namespace prefix for bindings into the host's internal server classes.
pub const INTERNAL_NAMESPACE: &str = "host.internal";

/// Namespace prefix for bindings into the host's plugin-API bridge classes.
pub const BRIDGE_NAMESPACE: &str = "host.bridge";

/// The two namespaces a binding can live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingNamespace {
    Internal,
    Bridge,
}

impl BindingNamespace {
    pub fn prefix(&self) -> &'static str {
        match self {
            BindingNamespace::Internal => INTERNAL_NAMESPACE,
            BindingNamespace::Bridge => BRIDGE_NAMESPACE,
        }
    }
}

/// Builds the fully-qualified name for a binding, e.g.
/// `host.internal.v1_9_R2.Packet`.
pub fn qualified_name(namespace: BindingNamespace, version: &HostVersion, name: &str) -> String {
    format!("{}.{}.{}", namespace.prefix(), version, name)
}

/// An adapter handle the embedding environment provides per host version.
///
/// Handles are opaque to this crate; callers downcast via [`as_any`]
/// (`HostBinding::as_any`) to the concrete adapter type they registered.
pub trait HostBinding: Send + Sync {
    /// Short name of the bound integration point (the last segment of the
    /// qualified name).
    fn name(&self) -> &str;

    fn as_any(&self) -> &dyn Any;
}

/// Version-scoped registry of host bindings.
///
/// # Examples
///
/// ```rust,ignore
/// let mut registry = BindingRegistry::new(ctx.version().clone());
/// registry.register(BindingNamespace::Internal, Arc::new(PacketAdapter::new()));
/// let packet = registry.locate_internal("Packet"); // Some(_) or None
/// ```
pub struct BindingRegistry {
    version: HostVersion,
    entries: HashMap<String, Arc<dyn HostBinding>>,
}

impl BindingRegistry {
    pub fn new(version: HostVersion) -> Self {
        Self {
            version,
            entries: HashMap::new(),
        }
    }

    /// The host version this registry is scoped to.
    pub fn version(&self) -> &HostVersion {
        &self.version
    }

    /// Registers a binding under its qualified name, replacing any previous
    /// binding with the same name.
    pub fn register(&mut self, namespace: BindingNamespace, binding: Arc<dyn HostBinding>) {
        let key = qualified_name(namespace, &self.version, binding.name());
        self.entries.insert(key, binding);
    }

    /// Looks up a binding in the internal-server namespace.
    ///
    /// Returns `None` when no binding with that name was registered for the
    /// current host version; never an error.
    pub fn locate_internal(&self, name: &str) -> Option<Arc<dyn HostBinding>> {
        self.locate(BindingNamespace::Internal, name)
    }

    /// Looks up a binding in the plugin-API bridge namespace.
    pub fn locate_bridge(&self, name: &str) -> Option<Arc<dyn HostBinding>> {
        self.locate(BindingNamespace::Bridge, name)
    }

    fn locate(&self, namespace: BindingNamespace, name: &str) -> Option<Arc<dyn HostBinding>> {
        self.entries
            .get(&qualified_name(namespace, &self.version, name))
            .cloned()
    }
}
