//! DR1199 node process: startup sequence and event loop.
//!
//! ```text
//!  ┌────────────────────────────────────┐        ┌──────────────────────────┐
//!  │ Initializing                       │        │ Running                  │
//!  │  activate sensors                  │ start  │  wait for event          │
//!  │  [coordinator] start RPL root      │───────▶│  button/pot change ──▶   │
//!  │  interface on, engine init         │        │   notify AllSensors      │
//!  │  activate resources                │        │                          │
//!  └────────────────────────────────────┘        └──────────────────────────┘
//! ```
//!
//! A startup step that fails moves the node to `Failed`. Steps already taken
//! (sensor activation, engine init, activated resources) are not undone, so
//! the node only leaves `Failed` through a reset.

#![allow(async_fn_in_trait)]

pub mod event;

pub use event::{Event, EventSource, SensorId};

#[cfg(feature = "async")]
pub use event::AsyncEventSource;

use crate::board::{self, Peripherals};
use crate::config::NodeConfig;
use crate::network::MeshRouting;
use crate::network::application::coap::{
    CoapError, Engine, Request, Response, ResourceTable, handlers,
};
use crate::network::error::Error as NetworkError;

/// Lifecycle state of the node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    /// Startup has not completed
    Initializing,
    /// Resources are registered and events are being bridged
    Running,
    /// A startup step failed; the node needs a reset
    Failed,
}

/// Errors raised while starting or running the node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A board driver failed
    Board(board::Error),
    /// The engine or mesh stack failed
    Network(NetworkError),
    /// Resource registration or dispatch failed
    Coap(CoapError),
    /// The operation needs a running node
    NotRunning,
    /// The node was already started
    AlreadyRunning,
    /// An earlier startup attempt failed
    StartupFailed,
}

impl From<board::Error> for Error {
    fn from(err: board::Error) -> Self {
        Error::Board(err)
    }
}

impl From<NetworkError> for Error {
    fn from(err: NetworkError) -> Self {
        Error::Network(err)
    }
}

impl From<CoapError> for Error {
    fn from(err: CoapError) -> Self {
        Error::Coap(err)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::Board(e) => defmt::write!(f, "Board({})", e),
            Error::Network(e) => defmt::write!(f, "Network({})", e),
            Error::Coap(e) => defmt::write!(f, "Coap({})", e),
            Error::NotRunning => defmt::write!(f, "NotRunning"),
            Error::AlreadyRunning => defmt::write!(f, "AlreadyRunning"),
            Error::StartupFailed => defmt::write!(f, "StartupFailed"),
        }
    }
}

/// The sensor node: board, mesh stack and CoAP engine wired together.
pub struct Node<E, M, P>
where
    E: Engine,
    M: MeshRouting,
    P: Peripherals,
{
    engine: E,
    mesh: M,
    peripherals: P,
    resources: ResourceTable,
    config: NodeConfig,
    state: NodeState,
}

impl<E, M, P> Node<E, M, P>
where
    E: Engine,
    M: MeshRouting,
    P: Peripherals,
{
    /// Create a node in the `Initializing` state.
    pub fn new(engine: E, mesh: M, peripherals: P, config: NodeConfig) -> Self {
        Self {
            engine,
            mesh,
            peripherals,
            resources: ResourceTable::new(),
            config,
            state: NodeState::Initializing,
        }
    }

    /// Run the startup sequence and enter `Running`.
    ///
    /// Runs at most once: after a failure the node stays `Failed` and later
    /// calls report [`Error::StartupFailed`].
    pub fn start(&mut self) -> Result<(), Error> {
        match self.state {
            NodeState::Running => return Err(Error::AlreadyRunning),
            NodeState::Failed => return Err(Error::StartupFailed),
            NodeState::Initializing => {}
        }

        match self.bring_up() {
            Ok(()) => {
                self.state = NodeState::Running;
                Ok(())
            }
            Err(e) => {
                log::error!("node startup failed: {:?}", e);
                self.state = NodeState::Failed;
                Err(e)
            }
        }
    }

    fn bring_up(&mut self) -> Result<(), Error> {
        self.peripherals.activate_sensors()?;

        if self.config.coordinator {
            log::info!("Starting RPL root");
            self.mesh.root_start().map_err(|e| {
                log::error!("RPL root start failed: {:?}", e);
                NetworkError::RootStart
            })?;
        }
        self.mesh.interface_on().map_err(|e| {
            log::error!("network interface failed: {:?}", e);
            NetworkError::InterfaceDown
        })?;
        log::info!("Starting RPL node");

        self.engine.init().map_err(|e| {
            log::error!("CoAP engine init failed: {:?}", e);
            NetworkError::EngineInit
        })?;

        let resources = handlers::resource_table()?;
        for (path, resource) in resources.iter() {
            self.engine.activate_resource(path, resource).map_err(|e| {
                log::error!("activating {} failed: {:?}", path, e);
                NetworkError::Activation
            })?;
        }
        log::debug!("{} resources active", resources.len());
        self.resources = resources;
        Ok(())
    }

    /// Dispatch a request decoded by the engine.
    pub fn handle(&mut self, request: &Request<'_>) -> Result<Response, Error> {
        if self.state != NodeState::Running {
            return Err(Error::NotRunning);
        }
        Ok(self.resources.dispatch(request, &mut self.peripherals)?)
    }

    /// Bridge one event to the engine.
    ///
    /// Returns `true` when observers of `DR1199/AllSensors` were notified.
    pub fn on_event(&mut self, event: Event) -> Result<bool, Error> {
        if self.state != NodeState::Running {
            return Err(Error::NotRunning);
        }
        if !event.is_dr1199_sensor_change() {
            return Ok(false);
        }

        handlers::sensors::notify_changed(&mut self.engine).map_err(|e| {
            log::warn!("observer notification failed: {:?}", e);
            NetworkError::Notify
        })?;
        Ok(true)
    }

    /// Wait for events and bridge them until the source is exhausted.
    pub fn run<S: EventSource>(&mut self, events: &mut S) -> Result<(), Error> {
        if self.state != NodeState::Running {
            return Err(Error::NotRunning);
        }
        while let Some(event) = events.wait_event() {
            self.on_event(event)?;
        }
        Ok(())
    }

    /// Async flavour of [`run`](Self::run).
    #[cfg(feature = "async")]
    pub async fn run_async<S: AsyncEventSource>(&mut self, events: &mut S) -> Result<(), Error> {
        if self.state != NodeState::Running {
            return Err(Error::NotRunning);
        }
        while let Some(event) = events.wait_event().await {
            self.on_event(event)?;
        }
        Ok(())
    }

    /// Current lifecycle state
    pub fn state(&self) -> NodeState {
        self.state
    }

    /// Startup configuration
    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    /// Registered resources; empty until started
    pub fn resources(&self) -> &ResourceTable {
        &self.resources
    }

    /// The CoAP engine
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The mesh stack
    pub fn mesh(&self) -> &M {
        &self.mesh
    }

    /// The board peripherals
    pub fn peripherals(&self) -> &P {
        &self.peripherals
    }

    /// Mutable access to the board peripherals
    pub fn peripherals_mut(&mut self) -> &mut P {
        &mut self.peripherals
    }
}

impl<E, M, P> core::fmt::Debug for Node<E, M, P>
where
    E: Engine,
    M: MeshRouting,
    P: Peripherals,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Node")
            .field("resources", &self.resources)
            .field("config", &self.config)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
