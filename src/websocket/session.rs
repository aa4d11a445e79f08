//! Dashboard Session
//!
//! One `ViewState` per connection. Each client event is applied to the
//! state and answered with the views it invalidates.

use std::sync::Arc;

use super::messages::{ClientMessage, ServerMessage};
use crate::dataset::{Dataset, DatasetResult, Hour};
use crate::view::{county_demand_chart, ViewState};

pub struct DashboardSession {
    dataset: Arc<Dataset>,
    state: ViewState,
}

impl DashboardSession {
    pub fn new(dataset: Arc<Dataset>, hour: Hour) -> Self {
        Self {
            dataset,
            state: ViewState::new(hour),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Full render of the current state
    pub fn initial_view(&self) -> ServerMessage {
        self.view_message()
    }

    /// Apply a client event; failures become an `Error` reply and leave the state as it was
    pub fn handle(&mut self, message: ClientMessage) -> ServerMessage {
        match self.apply(message) {
            Ok(reply) => reply,
            Err(e) => {
                tracing::debug!(error = %e, "Rejected dashboard event");
                ServerMessage::Error {
                    message: e.to_string(),
                }
            }
        }
    }

    fn apply(&mut self, message: ClientMessage) -> DatasetResult<ServerMessage> {
        match message {
            ClientMessage::SelectHour { hour } => {
                self.state.select_hour(hour.parse()?);
                Ok(self.view_message())
            }
            ClientMessage::FocusCounty { county } => {
                self.state.focus_county(&self.dataset, &county)?;
                Ok(ServerMessage::Cards {
                    cards: self.state.cards(&self.dataset)?,
                })
            }
            ClientMessage::Reset => {
                self.state.reset();
                Ok(ServerMessage::Cards {
                    cards: self.state.cards(&self.dataset)?,
                })
            }
            ClientMessage::OpenPopup { county } => Ok(ServerMessage::CountyChart {
                chart: county_demand_chart(&self.dataset, &county)?,
            }),
            ClientMessage::Ping => Ok(ServerMessage::Pong),
        }
    }

    fn view_message(&self) -> ServerMessage {
        match self.state.render(&self.dataset) {
            Ok(view) => ServerMessage::View {
                view: Box::new(view),
            },
            Err(e) => ServerMessage::Error {
                message: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fixtures::{two_county_dataset, KANAWHA};
    use crate::view::Focus;

    fn session() -> DashboardSession {
        DashboardSession::new(Arc::new(two_county_dataset()), Hour::NOON)
    }

    #[test]
    fn test_initial_view_is_statewide_noon() {
        match session().initial_view() {
            ServerMessage::View { view } => {
                assert_eq!(view.hour, Hour::NOON);
                assert_eq!(view.cards.scope, Focus::Statewide);
            }
            other => panic!("Expected View, got {:?}", other),
        }
    }

    #[test]
    fn test_select_hour_rerenders() {
        let mut session = session();
        let reply = session.handle(ClientMessage::SelectHour { hour: "5".into() });

        match reply {
            ServerMessage::View { view } => {
                assert_eq!(view.hour_label, "5:00");
                assert_eq!(view.layer.features.len(), 2);
                assert_eq!(view.table.rows.len(), 2);
            }
            other => panic!("Expected View, got {:?}", other),
        }
        assert_eq!(session.state().hour().get(), 5);
    }

    #[test]
    fn test_bad_hour_keeps_state() {
        let mut session = session();
        let reply = session.handle(ClientMessage::SelectHour { hour: "25".into() });

        assert!(matches!(reply, ServerMessage::Error { .. }));
        assert_eq!(session.state().hour(), Hour::NOON);
    }

    #[test]
    fn test_focus_then_reset() {
        let mut session = session();

        match session.handle(ClientMessage::FocusCounty { county: KANAWHA.into() }) {
            ServerMessage::Cards { cards } => {
                assert_eq!(cards.total_card, "Kanawha County: 1,200");
            }
            other => panic!("Expected Cards, got {:?}", other),
        }
        assert_eq!(session.state().focus(), &Focus::County(KANAWHA.to_string()));

        match session.handle(ClientMessage::Reset) {
            ServerMessage::Cards { cards } => assert_eq!(cards.scope, Focus::Statewide),
            other => panic!("Expected Cards, got {:?}", other),
        }
    }

    #[test]
    fn test_open_popup() {
        let mut session = session();
        match session.handle(ClientMessage::OpenPopup { county: KANAWHA.into() }) {
            ServerMessage::CountyChart { chart } => {
                assert_eq!(chart.series.values.len(), 24);
                assert_eq!(chart.chart_id, "chart_Kanawha_County");
            }
            other => panic!("Expected CountyChart, got {:?}", other),
        }

        assert!(matches!(
            session.handle(ClientMessage::OpenPopup { county: "Nope".into() }),
            ServerMessage::Error { .. }
        ));
    }

    #[test]
    fn test_ping() {
        assert!(matches!(session().handle(ClientMessage::Ping), ServerMessage::Pong));
    }
}
