//! Common error types for network operations

/// A common error type for network operations.
///
/// Collaborator errors (engine, mesh stack) carry their own associated types;
/// the node maps them onto this enum so callers get one portable error for
/// `no_std` environments.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The CoAP engine failed to initialize.
    EngineInit,
    /// The CoAP engine refused to activate a resource.
    Activation,
    /// The CoAP engine failed to notify observers.
    Notify,
    /// The mesh stack could not start as DAG root.
    RootStart,
    /// The network interface could not be enabled.
    InterfaceDown,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::EngineInit => defmt::write!(f, "EngineInit"),
            Error::Activation => defmt::write!(f, "Activation"),
            Error::Notify => defmt::write!(f, "Notify"),
            Error::RootStart => defmt::write!(f, "RootStart"),
            Error::InterfaceDown => defmt::write!(f, "InterfaceDown"),
        }
    }
}
