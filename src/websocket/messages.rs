//! WebSocket Message Types
//!
//! Defines all message types exchanged between a dashboard page and its
//! server-side session.

use serde::{Deserialize, Serialize};

use crate::view::{CountyChart, DashboardView, SummaryCards};

/// Messages sent from client to server
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// The hour slider moved
    SelectHour {
        /// Slider value, `"0"`..`"23"`
        hour: String,
    },
    /// A county polygon was clicked
    FocusCounty {
        county: String,
    },
    /// The reset button was pressed
    Reset,
    /// A county popup opened and needs its chart
    OpenPopup {
        county: String,
    },
    /// Ping for keepalive
    Ping,
}

/// Messages sent from server to client
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Connection established
    Connected {
        /// Unique connection identifier
        connection_id: String,
    },
    /// Full re-render: map layer, table and cards
    View {
        view: Box<DashboardView>,
    },
    /// Cards changed without an hour change
    Cards {
        cards: SummaryCards,
    },
    /// Chart for an opened popup
    CountyChart {
        chart: CountyChart,
    },
    /// Pong response to ping
    Pong,
    /// Error message
    Error {
        /// Error description
        message: String,
    },
}
