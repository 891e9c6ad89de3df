use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

use crate::error::ClientError;
use crate::services::game_flow::{Effect, Event, GameFlow};
use crate::sync::{Authority, AuthorityRequest};

/// Owns the flow and carries out its requests one at a time.
pub struct SessionDriver<A: Authority> {
    authority: A,
    flow: GameFlow,
}

impl<A: Authority> SessionDriver<A> {
    pub fn new(authority: A, flow: GameFlow) -> Self {
        Self { authority, flow }
    }

    pub fn flow(&self) -> &GameFlow {
        &self.flow
    }

    pub fn authority(&self) -> &A {
        &self.authority
    }

    /// Issues the initial fetch and settles whatever follows from it.
    pub async fn start(&mut self, cancel: &CancellationToken) -> Result<Vec<Effect>, ClientError> {
        let effects = self.flow.start()?;
        self.settle(effects, cancel).await
    }

    /// Dispatch `event`, then perform every request it leads to until the
    /// flow is waiting on the player again. Returns prompts and notices in
    /// the order they were produced.
    #[instrument(skip(self, cancel), level = "debug")]
    pub async fn drive(
        &mut self,
        event: Event,
        cancel: &CancellationToken,
    ) -> Result<Vec<Effect>, ClientError> {
        let effects = self.flow.dispatch(event)?;
        self.settle(effects, cancel).await
    }

    async fn settle(
        &mut self,
        mut effects: Vec<Effect>,
        cancel: &CancellationToken,
    ) -> Result<Vec<Effect>, ClientError> {
        let mut surfaced = Vec::new();
        loop {
            let mut request = None;
            for effect in effects {
                match effect {
                    Effect::Request(r) => request = Some(r),
                    other => surfaced.push(other),
                }
            }
            let Some(request) = request else {
                return Ok(surfaced);
            };
            let outcome = self.perform(request, cancel).await;
            effects = self.flow.dispatch(outcome)?;
        }
    }

    async fn perform(&self, request: AuthorityRequest, cancel: &CancellationToken) -> Event {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!(%request, "request cancelled");
                Event::NetworkError(ClientError::Cancelled)
            }
            result = self.authority.send(&request) => match result {
                Ok(state) => Event::ReplyReceived(state),
                Err(err) => Event::NetworkError(err.into()),
            },
        }
    }
}
