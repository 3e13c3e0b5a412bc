//! Seam to the external CoAP engine

use super::Resource;

/// The CoAP engine that owns the socket, message layer and observer lists.
///
/// The node calls into it during startup to register resources and, while
/// running, to signal that an observable resource changed. The engine in turn
/// dispatches inbound requests through
/// [`ResourceTable::dispatch`](super::ResourceTable::dispatch).
pub trait Engine {
    /// Associated error type
    type Error: core::fmt::Debug;

    /// Initialize the engine. Called once, before any activation.
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Make `resource` reachable under `path`.
    fn activate_resource(&mut self, path: &str, resource: &Resource) -> Result<(), Self::Error>;

    /// Tell every observer of `path` to fetch a fresh representation.
    ///
    /// The engine re-runs the resource's GET handler for each observer; no
    /// payload is passed here.
    fn notify_observers(&mut self, path: &str) -> Result<(), Self::Error>;
}
