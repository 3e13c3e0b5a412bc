//! Potentiometer resource

use super::super::{ContentBuffer, ContentFormat, Request, Resource, Response};
use crate::board::Peripherals;
use core::fmt::Write;

/// `DR1199/Potentiometer`
pub const RESOURCE: Resource = Resource::new("title=\"Potentiometer\"").get(get);

/// GET handler: the reading as a decimal number
pub fn get(request: &Request<'_>, response: &mut Response, peripherals: &mut dyn Peripherals) {
    if !request.accepts(ContentFormat::TEXT_PLAIN) {
        return;
    }

    let mut content: ContentBuffer = ContentBuffer::new();
    let _ = write!(content, "{}", peripherals.potentiometer());
    response.set_content_format(ContentFormat::TEXT_PLAIN);
    response.set_payload(content.as_bytes());
}
