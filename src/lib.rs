//! # dr1199-node - CoAP resources for the DR1199 board
//!
//! Exposes the sensors (switch bank, potentiometer) and actuators (LEDs) of a
//! DR1199 sensor/actuator board as CoAP resources on a node that joins an RPL
//! mesh network. The CoAP engine, the mesh stack and the drivers are external
//! collaborators reached through traits; this crate holds the resource
//! handlers, the registration table, the sensor-change bridge and the startup
//! sequence.
//!
//! ## Resources
//!
//! | Path | Methods | Format |
//! |------|---------|--------|
//! | `DR1199/Switch/SW1`..`SW4`, `DR1199/Switch/DIO8` | GET | text/plain |
//! | `DR1199/Potentiometer` | GET | text/plain |
//! | `DR1199/LED/D1`, `D2`, `D3`, `D3On1174`, `D6On1174`, `All` | PUT, POST | text/plain |
//! | `DR1199/AllSensors` | GET (observable) | application/json |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dr1199_node::board::{Dr1199, Leds, LedDriver, Sensor};
//! use dr1199_node::config::NodeConfig;
//! use dr1199_node::network::MeshRouting;
//! use dr1199_node::network::application::coap::{Engine, Resource};
//! use dr1199_node::node::{Event, Node};
//! # struct Drv;
//! # impl Sensor for Drv {
//! #     type Error = ();
//! #     fn activate(&mut self) -> Result<(), ()> { Ok(()) }
//! #     fn value(&self, _kind: u8) -> i32 { 0 }
//! # }
//! # impl LedDriver for Drv {
//! #     fn on(&mut self, _leds: Leds) {}
//! #     fn off(&mut self, _leds: Leds) {}
//! # }
//! # struct Rpl;
//! # impl MeshRouting for Rpl {
//! #     type Error = ();
//! #     fn root_start(&mut self) -> Result<(), ()> { Ok(()) }
//! #     fn interface_on(&mut self) -> Result<(), ()> { Ok(()) }
//! # }
//! # struct Coap;
//! # impl Engine for Coap {
//! #     type Error = ();
//! #     fn init(&mut self) -> Result<(), ()> { Ok(()) }
//! #     fn activate_resource(&mut self, _: &str, _: &Resource) -> Result<(), ()> { Ok(()) }
//! #     fn notify_observers(&mut self, _: &str) -> Result<(), ()> { Ok(()) }
//! # }
//! # fn sensor_events() -> impl Iterator<Item = Event> { core::iter::empty() }
//!
//! let board = Dr1199::new(Drv, Drv, Drv);
//! let mut node = Node::new(Coap, Rpl, board, NodeConfig::default());
//! node.start().unwrap();
//! node.run(&mut sensor_events()).unwrap();
//! ```
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `async`: Enable the async event loop ([`node::Node::run_async`])
//! - `defmt`: Enable defmt formatting of error types

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

/// Mesh routing seam and the CoAP application layer.
///
/// Holds the traits the node drives (mesh stack, CoAP engine), the resource
/// table and every DR1199 resource handler.
pub mod network;

/// Board peripherals: sensor and LED capabilities, switch layout, LED masks.
pub mod board;

/// Node configuration loaded at startup.
pub mod config;

/// Startup sequence and sensor-event loop.
pub mod node;
