//! CoAP resources for embedded nodes
//!
//! The node never parses or frames CoAP messages. An external engine decodes
//! inbound packets into a [`Request`], looks the path up in the node's
//! [`ResourceTable`] and hands back whatever the handler left in the
//! [`Response`]. Retransmission, block transfer and observer bookkeeping stay
//! with the engine.

#![deny(unsafe_code)]

use heapless::Vec;

pub mod content;
pub mod engine;
pub mod handlers;
pub mod resource;


pub use content::{ContentBuffer, parse_decimal};
pub use engine::Engine;
pub use resource::{Handler, Resource, ResourceTable};

/// Largest payload a single response can carry
pub const MAX_CHUNK_SIZE: usize = 64;
/// Maximum length of a resource path
pub const MAX_PATH_LEN: usize = 32;
/// Maximum number of resources in a table (power of two for the index map)
pub const MAX_RESOURCES: usize = 16;

/// Request methods a resource can answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Read a representation
    Get,
    /// Process the payload
    Post,
    /// Replace the target state
    Put,
    /// Remove the target
    Delete,
}

impl Method {
    /// Method name as used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Registered CoAP content-format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentFormat(pub u16);

impl ContentFormat {
    /// `text/plain; charset=utf-8`
    pub const TEXT_PLAIN: Self = Self(0);
    /// `application/json`
    pub const APPLICATION_JSON: Self = Self(50);
}

/// Decoded inbound request, borrowed from the engine's packet buffer.
#[derive(Debug, Clone, Copy)]
pub struct Request<'a> {
    /// Request method
    pub method: Method,
    /// Resource path without leading slash
    pub path: &'a str,
    /// Accept option, `None` when the client expressed no preference
    pub accept: Option<ContentFormat>,
    /// Request body
    pub payload: &'a [u8],
}

impl<'a> Request<'a> {
    /// Build a request with no accept option and an empty body.
    pub fn new(method: Method, path: &'a str) -> Self {
        Self {
            method,
            path,
            accept: None,
            payload: &[],
        }
    }

    /// Set the accept option.
    pub fn with_accept(mut self, format: ContentFormat) -> Self {
        self.accept = Some(format);
        self
    }

    /// Set the request body.
    pub fn with_payload(mut self, payload: &'a [u8]) -> Self {
        self.payload = payload;
        self
    }

    /// True when the client accepts `format`, either explicitly or by not
    /// asking for anything.
    pub fn accepts(&self, format: ContentFormat) -> bool {
        match self.accept {
            None => true,
            Some(accept) => accept == format,
        }
    }
}

/// Outbound response as filled in by a handler.
///
/// Fields a handler leaves unset are completed by the engine (status code,
/// default content format).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    content_format: Option<ContentFormat>,
    payload: Option<Vec<u8, MAX_CHUNK_SIZE>>,
}

impl Response {
    /// An untouched response
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag the response with a content format.
    pub fn set_content_format(&mut self, format: ContentFormat) {
        self.content_format = Some(format);
    }

    /// Attach a payload. Bytes beyond [`MAX_CHUNK_SIZE`] are dropped.
    pub fn set_payload(&mut self, payload: &[u8]) {
        let len = payload.len().min(MAX_CHUNK_SIZE);
        self.payload = Vec::from_slice(&payload[..len]).ok();
    }

    /// Content format set by the handler, if any
    pub fn content_format(&self) -> Option<ContentFormat> {
        self.content_format
    }

    /// Payload bytes; empty when no payload was attached
    pub fn payload(&self) -> &[u8] {
        self.payload.as_deref().unwrap_or(&[])
    }

    /// True when the handler attached a payload (possibly empty)
    pub fn has_payload(&self) -> bool {
        self.payload.is_some()
    }

    /// True when the handler left the response untouched
    pub fn is_unset(&self) -> bool {
        self.content_format.is_none() && self.payload.is_none()
    }
}

/// Error types for resource registration and dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoapError {
    /// No resource registered at the requested path (4.04)
    NotFound,
    /// The resource has no handler for the method (4.05)
    MethodNotAllowed,
    /// The resource table is full
    RegistryFull,
    /// A resource is already registered at the path
    DuplicatePath,
    /// The path exceeds [`MAX_PATH_LEN`]
    PathTooLong,
    /// A representation does not fit its buffer
    BufferOverflow,
}

#[cfg(feature = "defmt")]
impl defmt::Format for CoapError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            CoapError::NotFound => defmt::write!(f, "NotFound"),
            CoapError::MethodNotAllowed => defmt::write!(f, "MethodNotAllowed"),
            CoapError::RegistryFull => defmt::write!(f, "RegistryFull"),
            CoapError::DuplicatePath => defmt::write!(f, "DuplicatePath"),
            CoapError::PathTooLong => defmt::write!(f, "PathTooLong"),
            CoapError::BufferOverflow => defmt::write!(f, "BufferOverflow"),
        }
    }
}
