//! DR1199 resource handlers and their registration table

pub mod led;
pub mod potentiometer;
pub mod sensors;
pub mod switch;

use super::{CoapError, Resource, ResourceTable};

/// Switch SW1 state
pub const SWITCH_SW1: &str = "DR1199/Switch/SW1";
/// Switch SW2 state
pub const SWITCH_SW2: &str = "DR1199/Switch/SW2";
/// Switch SW3 state
pub const SWITCH_SW3: &str = "DR1199/Switch/SW3";
/// Switch SW4 state
pub const SWITCH_SW4: &str = "DR1199/Switch/SW4";
/// Digital input DIO8 state
pub const SWITCH_DIO8: &str = "DR1199/Switch/DIO8";
/// Potentiometer reading
pub const POTENTIOMETER: &str = "DR1199/Potentiometer";
/// Green LED
pub const LED_D1: &str = "DR1199/LED/D1";
/// Blue LED
pub const LED_D2: &str = "DR1199/LED/D2";
/// Red LED
pub const LED_D3: &str = "DR1199/LED/D3";
/// LED D3 on the DR1174 base board
pub const LED_D3_ON_1174: &str = "DR1199/LED/D3On1174";
/// LED D6 on the DR1174 base board
pub const LED_D6_ON_1174: &str = "DR1199/LED/D6On1174";
/// Every LED at once
pub const LED_ALL: &str = "DR1199/LED/All";
/// Observable aggregate of all sensors
pub const ALL_SENSORS: &str = "DR1199/AllSensors";

/// Every DR1199 resource in activation order.
pub const RESOURCES: [(&str, Resource); 13] = [
    (SWITCH_SW1, switch::SW1),
    (SWITCH_SW2, switch::SW2),
    (SWITCH_SW3, switch::SW3),
    (SWITCH_SW4, switch::SW4),
    (SWITCH_DIO8, switch::DIO8),
    (POTENTIOMETER, potentiometer::RESOURCE),
    (LED_D1, led::D1),
    (LED_D2, led::D2),
    (LED_D3, led::D3),
    (LED_D3_ON_1174, led::D3_ON_1174),
    (LED_D6_ON_1174, led::D6_ON_1174),
    (LED_ALL, led::ALL),
    (ALL_SENSORS, sensors::RESOURCE),
];

/// Register every DR1199 resource into `table`.
pub fn register(table: &mut ResourceTable) -> Result<(), CoapError> {
    for (path, resource) in RESOURCES {
        table.register(path, resource)?;
    }
    Ok(())
}

/// Build the DR1199 resource table.
pub fn resource_table() -> Result<ResourceTable, CoapError> {
    let mut table = ResourceTable::new();
    register(&mut table)?;
    Ok(table)
}
