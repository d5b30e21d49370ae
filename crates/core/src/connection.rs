//! Database connection state as reported by the health endpoint.

use serde::Serialize;

/// Lifecycle state of the database connection.
///
/// The numeric codes are stable and appear in the `/health` payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionState {
    Disconnected,
    Connected,
    Connecting,
    Disconnecting,
}

impl ConnectionState {
    pub fn code(self) -> u8 {
        match self {
            Self::Disconnected => 0,
            Self::Connected => 1,
            Self::Connecting => 2,
            Self::Disconnecting => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Disconnected => "disconnected",
            Self::Connected => "connected",
            Self::Connecting => "connecting",
            Self::Disconnecting => "disconnecting",
        }
    }

    pub fn is_connected(self) -> bool {
        self == Self::Connected
    }
}

impl std::fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
