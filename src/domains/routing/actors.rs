// Session actor: one task owns the session, callers talk to it over channels.
use super::events::SelectionEvent;
use super::projections::RouteProjection;
use super::session::{SelectionOutcome, SelectionSession};
use super::types::Poi;
use crate::common::{AggregateRoot, ApplicationError, ApplicationResult};
use tokio::sync::{mpsc, oneshot};

pub enum SessionCommand {
    Select {
        poi: Poi,
        reply: oneshot::Sender<SelectionOutcome>,
    },
    Projection {
        reply: oneshot::Sender<RouteProjection>,
    },
    TakeEvents {
        reply: oneshot::Sender<Vec<SelectionEvent>>,
    },
}

/// Cloneable handle to a session running on its own task. Commands from all
/// clones are applied one at a time in arrival order.
#[derive(Clone)]
pub struct SessionActor {
    sender: mpsc::Sender<SessionCommand>,
}

impl SessionActor {
    /// Move `session` onto its own task. The task ends once every handle is
    /// dropped.
    pub fn spawn(session: SelectionSession, capacity: usize) -> Self {
        let (sender, mut receiver) = mpsc::channel::<SessionCommand>(capacity);
        tokio::spawn(async move {
            let mut session = session;
            while let Some(command) = receiver.recv().await {
                match command {
                    SessionCommand::Select { poi, reply } => {
                        let _ = reply.send(session.select_point(poi));
                    }
                    SessionCommand::Projection { reply } => {
                        let _ = reply.send(RouteProjection::from_session(&session));
                    }
                    SessionCommand::TakeEvents { reply } => {
                        let _ = reply.send(session.take_uncommitted_events());
                    }
                }
            }
        });
        Self { sender }
    }

    pub async fn select(&self, poi: Poi) -> ApplicationResult<SelectionOutcome> {
        let (reply, response) = oneshot::channel();
        self.send(SessionCommand::Select { poi, reply }).await?;
        response
            .await
            .map_err(|e| ApplicationError::SessionActor(format!("dropped reply: {}", e)))
    }

    pub async fn projection(&self) -> ApplicationResult<RouteProjection> {
        let (reply, response) = oneshot::channel();
        self.send(SessionCommand::Projection { reply }).await?;
        response
            .await
            .map_err(|e| ApplicationError::SessionActor(format!("dropped reply: {}", e)))
    }

    pub async fn take_events(&self) -> ApplicationResult<Vec<SelectionEvent>> {
        let (reply, response) = oneshot::channel();
        self.send(SessionCommand::TakeEvents { reply }).await?;
        response
            .await
            .map_err(|e| ApplicationError::SessionActor(format!("dropped reply: {}", e)))
    }

    async fn send(&self, command: SessionCommand) -> ApplicationResult<()> {
        self.sender
            .send(command)
            .await
            .map_err(|_| ApplicationError::SessionActor("session task stopped".to_string()))
    }
}
