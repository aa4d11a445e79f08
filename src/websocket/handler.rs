//! WebSocket Handler
//!
//! Handles WebSocket upgrade requests and manages the connection lifecycle.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{stream::SplitSink, SinkExt, StreamExt};
use std::sync::Arc;

use super::messages::{ClientMessage, ServerMessage};
use super::session::DashboardSession;
use crate::api::AppState;

/// WebSocket upgrade handler
///
/// This is the entry point for WebSocket connections.
/// It upgrades the HTTP connection and starts a dashboard session.
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Response {
    let session = DashboardSession::new(Arc::clone(&state.dataset), state.default_hour);
    ws.on_upgrade(move |socket| handle_socket(socket, session))
}

/// Handle an established WebSocket connection
async fn handle_socket(socket: WebSocket, mut session: DashboardSession) {
    let (mut sender, mut receiver) = socket.split();
    let connection_id = uuid::Uuid::new_v4().to_string();

    tracing::debug!(connection_id = %connection_id, "Dashboard session opened");

    let connected = ServerMessage::Connected {
        connection_id: connection_id.clone(),
    };
    if send(&mut sender, &connected).await.is_err()
        || send(&mut sender, &session.initial_view()).await.is_err()
    {
        tracing::error!(connection_id = %connection_id, "Failed to send initial view");
        return;
    }

    while let Some(result) = receiver.next().await {
        let message = match result {
            Ok(message) => message,
            Err(e) => {
                tracing::debug!(
                    connection_id = %connection_id,
                    error = %e,
                    "WebSocket receive error"
                );
                break;
            }
        };

        let reply = match message {
            Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
                Ok(client_msg) => session.handle(client_msg),
                Err(e) => {
                    tracing::debug!(
                        connection_id = %connection_id,
                        error = %e,
                        text = %text,
                        "Invalid client message"
                    );
                    // Send error but keep connection open
                    ServerMessage::Error {
                        message: format!("Invalid message format: {}", e),
                    }
                }
            },
            Message::Binary(_) => ServerMessage::Error {
                message: "Binary messages not supported".to_string(),
            },
            // Axum answers pings itself
            Message::Ping(_) | Message::Pong(_) => continue,
            Message::Close(_) => {
                tracing::debug!(connection_id = %connection_id, "Client requested close");
                break;
            }
        };

        if send(&mut sender, &reply).await.is_err() {
            tracing::debug!(
                connection_id = %connection_id,
                "WebSocket send failed, closing connection"
            );
            break;
        }
    }

    tracing::debug!(connection_id = %connection_id, "Dashboard session closed");
}

/// Serialize and send one message
async fn send(
    sender: &mut SplitSink<WebSocket, Message>,
    message: &ServerMessage,
) -> Result<(), axum::Error> {
    let text = serde_json::to_string(message).map_err(axum::Error::new)?;
    sender.send(Message::Text(text)).await
}
