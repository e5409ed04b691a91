//! Network ports associated with an address.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Anything that can be recorded as an open port of an [`super::Address`].
///
/// Only the port number identifies it; the display string is kept for
/// reporting.
pub trait ServicePort: fmt::Display {
    fn number(&self) -> u16;

    /// Text recorded for reports.
    fn label(&self) -> String {
        self.to_string()
    }
}

// A bare number stands for a port with an unknown application.
impl ServicePort for u16 {
    fn number(&self) -> u16 {
        *self
    }

    fn label(&self) -> String {
        Port::from(*self).to_string()
    }
}

/// Whether a port accepts connections.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum PortState {
    Closed,
    #[default]
    Opened,
}

/// A TCP/UDP port and the application behind it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Port {
    pub number: u16,
    pub application: String,
    pub state: PortState,
}

impl Port {
    pub fn new(number: u16, application: &str) -> Port {
        Port {
            number,
            application: application.to_string(),
            state: PortState::Opened,
        }
    }

    pub fn with_state(mut self, state: PortState) -> Port {
        self.state = state;
        self
    }
}

impl Default for Port {
    fn default() -> Self {
        Port::from(80)
    }
}

impl From<u16> for Port {
    fn from(number: u16) -> Self {
        Port::new(number, "Unknown")
    }
}

impl ServicePort for Port {
    fn number(&self) -> u16 {
        self.number
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.application, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_display() {
        assert_eq!(Port::new(443, "https").to_string(), "https(443)");
        assert_eq!(Port::from(22).to_string(), "Unknown(22)");
        assert_eq!(Port::default().number(), 80);
    }

    #[test]
    fn test_port_state() {
        let port = Port::new(25, "smtp");
        assert_eq!(port.state, PortState::Opened);
        assert_eq!(port.with_state(PortState::Closed).state, PortState::Closed);
    }

    #[test]
    fn test_bare_number_is_a_port() {
        assert_eq!(8080u16.number(), 8080);
        assert_eq!(8080u16.label(), "Unknown(8080)");
        assert_eq!(Port::new(53, "dns").label(), "dns(53)");
        assert_eq!(ServicePort::number(&Port::new(53, "dns")), 53);
    }
}
