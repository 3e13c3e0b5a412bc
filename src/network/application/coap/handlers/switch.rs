//! Switch and DIO state resources

use super::super::{ContentBuffer, ContentFormat, Request, Resource, Response};
use crate::board::{Peripherals, Switch};
use core::fmt::Write;

/// `DR1199/Switch/SW1`
pub const SW1: Resource = Resource::new("title=\"SW1\"").get(get_sw1);
/// `DR1199/Switch/SW2`
pub const SW2: Resource = Resource::new("title=\"SW2\"").get(get_sw2);
/// `DR1199/Switch/SW3`
pub const SW3: Resource = Resource::new("title=\"SW3\"").get(get_sw3);
/// `DR1199/Switch/SW4`
pub const SW4: Resource = Resource::new("title=\"SW4\"").get(get_sw4);
/// `DR1199/Switch/DIO8`
pub const DIO8: Resource = Resource::new("title=\"DIO8\"").get(get_dio8);

/// Text body for a switch state
pub fn state_text(switch: Switch, mask: i32) -> &'static str {
    if switch.is_pressed(mask) {
        "PRESSED"
    } else {
        "RELEASED"
    }
}

fn respond(
    switch: Switch,
    request: &Request<'_>,
    response: &mut Response,
    peripherals: &mut dyn Peripherals,
) {
    if !request.accepts(ContentFormat::TEXT_PLAIN) {
        return;
    }

    let mut content: ContentBuffer = ContentBuffer::new();
    let _ = content.write_str(state_text(switch, peripherals.switches()));
    response.set_content_format(ContentFormat::TEXT_PLAIN);
    response.set_payload(content.as_bytes());
}

/// GET handler for SW1
pub fn get_sw1(request: &Request<'_>, response: &mut Response, peripherals: &mut dyn Peripherals) {
    respond(Switch::Sw1, request, response, peripherals);
}

/// GET handler for SW2
pub fn get_sw2(request: &Request<'_>, response: &mut Response, peripherals: &mut dyn Peripherals) {
    respond(Switch::Sw2, request, response, peripherals);
}

/// GET handler for SW3
pub fn get_sw3(request: &Request<'_>, response: &mut Response, peripherals: &mut dyn Peripherals) {
    respond(Switch::Sw3, request, response, peripherals);
}

/// GET handler for SW4
pub fn get_sw4(request: &Request<'_>, response: &mut Response, peripherals: &mut dyn Peripherals) {
    respond(Switch::Sw4, request, response, peripherals);
}

/// GET handler for DIO8
pub fn get_dio8(request: &Request<'_>, response: &mut Response, peripherals: &mut dyn Peripherals) {
    respond(Switch::Dio8, request, response, peripherals);
}
