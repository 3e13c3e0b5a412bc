//! LED actuation resources
//!
//! Every LED resource accepts PUT and POST with a decimal body: `0` switches
//! the LED off, anything else switches it on. Bodies that do not parse count
//! as `0`. No response body is produced.

use super::super::{ContentFormat, Request, Resource, Response, parse_decimal};
use crate::board::{Leds, Peripherals};

/// `DR1199/LED/D1`
pub const D1: Resource = Resource::new("title=\"LED D1 <[0,1]>\"")
    .post(put_post_d1)
    .put(put_post_d1);
/// `DR1199/LED/D2`
pub const D2: Resource = Resource::new("title=\"LED D2 <[0,1]>\"")
    .post(put_post_d2)
    .put(put_post_d2);
/// `DR1199/LED/D3`
pub const D3: Resource = Resource::new("title=\"LED D3 <[0,1]>\"")
    .post(put_post_d3)
    .put(put_post_d3);
/// `DR1199/LED/D3On1174`
pub const D3_ON_1174: Resource = Resource::new("title=\"LED D3 1174<[0,1]>\"")
    .post(put_post_d3_on_1174)
    .put(put_post_d3_on_1174);
/// `DR1199/LED/D6On1174`
pub const D6_ON_1174: Resource = Resource::new("title=\"LED D6 1174<[0,1]>\"")
    .post(put_post_d6_on_1174)
    .put(put_post_d6_on_1174);
/// `DR1199/LED/All`
pub const ALL: Resource = Resource::new("title=\"LED All <[0,1]>\"")
    .post(put_post_all)
    .put(put_post_all);

/// Apply the command in `request` to the masked LEDs.
fn set_leds(leds: Leds, request: &Request<'_>, peripherals: &mut dyn Peripherals) {
    if !request.accepts(ContentFormat::TEXT_PLAIN) {
        return;
    }

    if parse_decimal(request.payload) != 0 {
        log::debug!("LEDs {:#04x} on", leds.bits());
        peripherals.leds_on(leds);
    } else {
        log::debug!("LEDs {:#04x} off", leds.bits());
        peripherals.leds_off(leds);
    }
}

/// PUT/POST handler for the green LED
pub fn put_post_d1(request: &Request<'_>, _: &mut Response, peripherals: &mut dyn Peripherals) {
    set_leds(Leds::GREEN, request, peripherals);
}

/// PUT/POST handler for the blue LED
pub fn put_post_d2(request: &Request<'_>, _: &mut Response, peripherals: &mut dyn Peripherals) {
    set_leds(Leds::BLUE, request, peripherals);
}

/// PUT/POST handler for the red LED
pub fn put_post_d3(request: &Request<'_>, _: &mut Response, peripherals: &mut dyn Peripherals) {
    set_leds(Leds::RED, request, peripherals);
}

/// PUT/POST handler for DR1174 LED D3
pub fn put_post_d3_on_1174(
    request: &Request<'_>,
    _: &mut Response,
    peripherals: &mut dyn Peripherals,
) {
    set_leds(Leds::GP0, request, peripherals);
}

/// PUT/POST handler for DR1174 LED D6
pub fn put_post_d6_on_1174(
    request: &Request<'_>,
    _: &mut Response,
    peripherals: &mut dyn Peripherals,
) {
    set_leds(Leds::GP1, request, peripherals);
}

/// PUT/POST handler for every LED
pub fn put_post_all(request: &Request<'_>, _: &mut Response, peripherals: &mut dyn Peripherals) {
    set_leds(Leds::ALL, request, peripherals);
}
