//! Network layer seams for the sensor node.
//!
//! The node does not implement any routing or link layer itself. It drives an
//! external RPL stack through [`MeshRouting`] and exposes its resources through
//! an external CoAP engine (see [`application::coap`]).
//!

#![deny(unsafe_code)]

/// Common error types for network operations
pub mod error;

/// Application layer protocols served by the node
pub mod application;

/// Low-power mesh routing stack (RPL over 802.15.4).
///
/// Route discovery, DAG maintenance and address assignment all live behind this
/// trait. The node only decides whether it acts as the DAG root and when the
/// radio interface comes up.
pub trait MeshRouting {
    /// Associated error type
    type Error: core::fmt::Debug;

    /// Start routing as the root of a new DAG.
    fn root_start(&mut self) -> Result<(), Self::Error>;

    /// Enable the network interface (MAC layer on).
    fn interface_on(&mut self) -> Result<(), Self::Error>;
}
