//! Peripheral capabilities of the DR1199 sensor/actuator board.
//!
//! Sensors and LEDs are driven by external drivers. Handlers never touch those
//! drivers directly: they receive a `&mut dyn Peripherals`, which keeps them
//! testable without hardware.
//!
//! # Switch layout
//!
//! The button sensor reports one bit per input:
//!
//! | Bit | Input |
//! |-----|-------|
//! | 0   | DIO8  |
//! | 1   | SW1   |
//! | 2   | SW2   |
//! | 3   | SW3   |
//! | 4   | SW4   |

use core::ops::BitOr;

/// A sensor driver (button bank, potentiometer).
pub trait Sensor {
    /// Associated error type
    type Error: core::fmt::Debug;

    /// Start measuring. Values are meaningless before activation.
    fn activate(&mut self) -> Result<(), Self::Error>;

    /// Current value of the given measurement type.
    fn value(&self, kind: u8) -> i32;
}

/// An LED driver addressing outputs by mask.
pub trait LedDriver {
    /// Switch the masked LEDs on.
    fn on(&mut self, leds: Leds);
    /// Switch the masked LEDs off.
    fn off(&mut self, leds: Leds);
}

/// Everything the resource handlers need from the board.
pub trait Peripherals {
    /// Activate the button and potentiometer sensors.
    fn activate_sensors(&mut self) -> Result<(), Error>;

    /// Switch bitmask sampled now
    fn switches(&self) -> i32;

    /// Potentiometer reading sampled now
    fn potentiometer(&self) -> i32;

    /// Switch the masked LEDs on.
    fn leds_on(&mut self, leds: Leds);

    /// Switch the masked LEDs off.
    fn leds_off(&mut self, leds: Leds);
}

/// LED output mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Leds(u8);

impl Leds {
    /// Green LED (D1)
    pub const GREEN: Self = Self(1 << 0);
    /// Blue LED (D2)
    pub const BLUE: Self = Self(1 << 1);
    /// Red LED (D3)
    pub const RED: Self = Self(1 << 2);
    /// GPIO driven LED D3 on the DR1174 base board
    pub const GP0: Self = Self(1 << 3);
    /// GPIO driven LED D6 on the DR1174 base board
    pub const GP1: Self = Self(1 << 4);
    /// Every LED
    pub const ALL: Self = Self(Self::GREEN.0 | Self::BLUE.0 | Self::RED.0 | Self::GP0.0 | Self::GP1.0);

    /// Mask from raw bits; unknown bits are dropped
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    /// Raw bits
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// True when every LED in `other` is also in `self`
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Leds {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// A named input of the button sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Switch {
    /// Digital input DIO8
    Dio8 = 0,
    /// Push button SW1
    Sw1 = 1,
    /// Push button SW2
    Sw2 = 2,
    /// Push button SW3
    Sw3 = 3,
    /// Push button SW4
    Sw4 = 4,
}

impl Switch {
    /// Bit position in the switch bitmask
    pub const fn bit(self) -> u8 {
        self as u8
    }

    /// True when this switch's bit is set in `mask`
    pub const fn is_pressed(self, mask: i32) -> bool {
        mask & (1 << self.bit()) != 0
    }
}

/// Errors raised by board drivers
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The button sensor could not be activated
    ButtonActivation,
    /// The potentiometer could not be activated
    PotentiometerActivation,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::ButtonActivation => defmt::write!(f, "ButtonActivation"),
            Error::PotentiometerActivation => defmt::write!(f, "PotentiometerActivation"),
        }
    }
}

/// The DR1199 board assembled from its drivers.
#[derive(Debug)]
pub struct Dr1199<B, P, L> {
    /// Button/switch bank sensor
    pub button: B,
    /// Potentiometer sensor
    pub pot: P,
    /// LED driver
    pub leds: L,
}

impl<B, P, L> Dr1199<B, P, L>
where
    B: Sensor,
    P: Sensor,
    L: LedDriver,
{
    /// Assemble the board from its drivers
    pub fn new(button: B, pot: P, leds: L) -> Self {
        Self { button, pot, leds }
    }
}

impl<B, P, L> Peripherals for Dr1199<B, P, L>
where
    B: Sensor,
    P: Sensor,
    L: LedDriver,
{
    fn activate_sensors(&mut self) -> Result<(), Error> {
        self.button.activate().map_err(|e| {
            log::error!("button sensor activation failed: {:?}", e);
            Error::ButtonActivation
        })?;
        self.pot.activate().map_err(|e| {
            log::error!("potentiometer activation failed: {:?}", e);
            Error::PotentiometerActivation
        })?;
        Ok(())
    }

    fn switches(&self) -> i32 {
        self.button.value(0)
    }

    fn potentiometer(&self) -> i32 {
        self.pot.value(0)
    }

    fn leds_on(&mut self, leds: Leds) {
        self.leds.on(leds);
    }

    fn leds_off(&mut self, leds: Leds) {
        self.leds.off(leds);
    }
}
