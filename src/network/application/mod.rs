//! # Application Layer Protocols
//!
//! The node speaks a single application protocol: CoAP, served by an external
//! engine. This module holds the node's side of that contract.
//!
//! - **[`coap`]**: message types, the engine seam, the resource table and the
//!   DR1199 resource handlers
//!
//! ## Design Principles
//!
//! - **Engine Agnostic**: works with any engine implementing
//!   [`Engine`](coap::Engine)
//! - **No-std Compatible**: no heap allocation, fixed-size buffers only
//! - **Per-call State**: every handler invocation owns its response buffer

/// CoAP (Constrained Application Protocol) resources.
///
/// CoAP is a specialized web transfer protocol designed for use with constrained
/// nodes and constrained networks in the Internet of Things.
pub mod coap;
