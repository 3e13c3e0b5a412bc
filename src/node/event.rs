//! Events delivered to the node's wait loop

/// Sensors that can post a change event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorId {
    /// Button/switch bank
    Button,
    /// Potentiometer
    Potentiometer,
    /// Any other sensor on the node, by driver index
    Other(u8),
}

/// An event posted to the node's process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A sensor reported a new value
    SensorChanged(SensorId),
    /// Anything else (timers, network events); ignored by the node
    Other,
}

impl Event {
    /// True for changes the aggregate resource reflects
    pub fn is_dr1199_sensor_change(&self) -> bool {
        matches!(
            self,
            Event::SensorChanged(SensorId::Button | SensorId::Potentiometer)
        )
    }
}

/// Blocking source of events.
///
/// On hardware `wait_event` never returns `None`; host-side sources return
/// `None` once they are exhausted, which ends [`Node::run`](super::Node::run).
pub trait EventSource {
    /// Block until the next event.
    fn wait_event(&mut self) -> Option<Event>;
}

impl<I: Iterator<Item = Event>> EventSource for I {
    fn wait_event(&mut self) -> Option<Event> {
        self.next()
    }
}

/// Asynchronous source of events.
#[cfg(feature = "async")]
pub trait AsyncEventSource {
    /// Wait for the next event.
    async fn wait_event(&mut self) -> Option<Event>;
}
