//! Observable aggregate of every DR1199 sensor
//!
//! The representation is only composed when an observer's GET is dispatched;
//! a sensor change merely asks the engine to notify observers.

use super::super::{
    CoapError, ContentFormat, Engine, MAX_CHUNK_SIZE, Request, Resource, Response,
};
use super::ALL_SENSORS;
use crate::board::Peripherals;
use core::fmt::Write;
use heapless::String;
use serde::Serialize;

/// `DR1199/AllSensors`
pub const RESOURCE: Resource = Resource::new("obs;title=\"All_DR1199_sensors\"")
    .get(get)
    .observable();

#[derive(Serialize)]
struct SwitchEntry<'a> {
    #[serde(rename = "Switch")]
    switch: &'a str,
}

#[derive(Serialize)]
struct PotEntry<'a> {
    #[serde(rename = "Pot")]
    pot: &'a str,
}

#[derive(Serialize)]
struct AllSensors<'a> {
    #[serde(rename = "DR1199")]
    readings: (SwitchEntry<'a>, PotEntry<'a>),
}

/// Serialize a switch bitmask and potentiometer reading into `buf`.
///
/// `{"DR1199":[{"Switch":"0x<HEX>"},{"Pot":"<DEC>"}]}`
///
/// Returns the number of bytes written.
pub fn compose(buf: &mut [u8], switches: i32, pot: i32) -> Result<usize, CoapError> {
    let mut switch: String<12> = String::new();
    write!(switch, "0x{:X}", switches).map_err(|_| CoapError::BufferOverflow)?;
    let mut pot_text: String<12> = String::new();
    write!(pot_text, "{}", pot).map_err(|_| CoapError::BufferOverflow)?;

    let body = AllSensors {
        readings: (
            SwitchEntry { switch: &switch },
            PotEntry { pot: &pot_text },
        ),
    };
    serde_json_core::to_slice(&body, buf).map_err(|_| CoapError::BufferOverflow)
}

/// GET handler: JSON only, plain text is not negotiated
pub fn get(request: &Request<'_>, response: &mut Response, peripherals: &mut dyn Peripherals) {
    if !request.accepts(ContentFormat::APPLICATION_JSON) {
        return;
    }

    let mut buf = [0u8; MAX_CHUNK_SIZE];
    match compose(&mut buf, peripherals.switches(), peripherals.potentiometer()) {
        Ok(len) => {
            response.set_content_format(ContentFormat::APPLICATION_JSON);
            response.set_payload(&buf[..len]);
        }
        Err(e) => log::warn!("{} body not composed: {:?}", ALL_SENSORS, e),
    }
}

/// Ask the engine to notify every observer of `DR1199/AllSensors`.
pub fn notify_changed<E: Engine>(engine: &mut E) -> Result<(), E::Error> {
    log::trace!("notifying observers of {}", ALL_SENSORS);
    engine.notify_observers(ALL_SENSORS)
}
