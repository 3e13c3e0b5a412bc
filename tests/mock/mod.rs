//! Mock collaborators shared by the integration tests

#![allow(dead_code)]

use dr1199_node::board::{Dr1199, LedDriver, Leds, Sensor};
use dr1199_node::network::MeshRouting;
use dr1199_node::network::application::coap::{Engine, Resource};

/// Board assembled from mock drivers
pub type MockBoard = Dr1199<MockSensor, MockSensor, MockLeds>;

/// Create a board with both sensors reading zero and every LED off
pub fn board() -> MockBoard {
    Dr1199::new(MockSensor::new(0), MockSensor::new(0), MockLeds::default())
}

/// Sensor driver returning a settable value
#[derive(Debug, Default)]
pub struct MockSensor {
    pub value: i32,
    pub active: bool,
    pub fail_activation: bool,
}

impl MockSensor {
    pub fn new(value: i32) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }
}

impl Sensor for MockSensor {
    type Error = &'static str;

    fn activate(&mut self) -> Result<(), Self::Error> {
        if self.fail_activation {
            return Err("sensor unavailable");
        }
        self.active = true;
        Ok(())
    }

    fn value(&self, _kind: u8) -> i32 {
        self.value
    }
}

/// LED driver tracking the lit mask and every call
#[derive(Debug, Default)]
pub struct MockLeds {
    pub lit: u8,
    pub calls: Vec<(bool, Leds)>,
}

impl MockLeds {
    pub fn is_on(&self, leds: Leds) -> bool {
        Leds::from_bits(self.lit).contains(leds)
    }
}

impl LedDriver for MockLeds {
    fn on(&mut self, leds: Leds) {
        self.lit |= leds.bits();
        self.calls.push((true, leds));
    }

    fn off(&mut self, leds: Leds) {
        self.lit &= !leds.bits();
        self.calls.push((false, leds));
    }
}

/// Engine recording everything the node asks of it
#[derive(Debug, Default)]
pub struct MockEngine {
    pub init_calls: usize,
    pub activated: Vec<(String, String, bool)>,
    pub notified: Vec<String>,
    pub fail_init: bool,
    pub fail_notify: bool,
    /// 1-based activation that fails, if any
    pub fail_activation_at: Option<usize>,
}

impl Engine for MockEngine {
    type Error = &'static str;

    fn init(&mut self) -> Result<(), Self::Error> {
        if self.fail_init {
            return Err("engine init failed");
        }
        self.init_calls += 1;
        Ok(())
    }

    fn activate_resource(&mut self, path: &str, resource: &Resource) -> Result<(), Self::Error> {
        if self.init_calls == 0 {
            return Err("activation before init");
        }
        if self.fail_activation_at == Some(self.activated.len() + 1) {
            return Err("activation failed");
        }
        self.activated.push((
            path.to_string(),
            resource.attributes.to_string(),
            resource.observable,
        ));
        Ok(())
    }

    fn notify_observers(&mut self, path: &str) -> Result<(), Self::Error> {
        if self.fail_notify {
            return Err("notify failed");
        }
        self.notified.push(path.to_string());
        Ok(())
    }
}

/// Mesh stack recording startup calls
#[derive(Debug, Default)]
pub struct MockMesh {
    pub root_started: bool,
    pub interface_on: bool,
    pub fail_interface: bool,
}

impl MeshRouting for MockMesh {
    type Error = &'static str;

    fn root_start(&mut self) -> Result<(), Self::Error> {
        self.root_started = true;
        Ok(())
    }

    fn interface_on(&mut self) -> Result<(), Self::Error> {
        if self.fail_interface {
            return Err("radio down");
        }
        self.interface_on = true;
        Ok(())
    }
}
