//! WebSocket Dashboard Sessions
//!
//! Each connection to `/ws` is one dashboard page. The page reports slider,
//! click, reset and popup events; the server keeps that page's view state
//! and replies with what needs redrawing.
//!
//! ## Architecture
//!
//! - **Session**: the per-connection view state and event handling
//! - **Handler**: handles WebSocket upgrade and message processing
//! - **Messages**: defines client and server message formats
//!
//! ## Example
//!
//! ```javascript
//! // Browser
//! const ws = new WebSocket('ws://localhost:8090/ws');
//!
//! slider.addEventListener('input', () => {
//!   ws.send(JSON.stringify({type: 'select_hour', hour: slider.value}));
//! });
//!
//! ws.onmessage = (event) => {
//!   const msg = JSON.parse(event.data);
//!   if (msg.type === 'view') redraw(msg.view);
//! };
//! ```

mod handler;
mod messages;
mod session;

pub use handler::websocket_handler;
pub use messages::{ClientMessage, ServerMessage};
pub use session::DashboardSession;
