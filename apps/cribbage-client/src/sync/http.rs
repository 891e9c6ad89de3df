use async_trait::async_trait;
use reqwest::{Client, Method, Url};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::AuthorityConfig;
use crate::domain::{Card, Phase, SessionState};
use crate::protocol::{self, GameStateReply, PlayCardRequest};
use crate::sync::retry::{jittered_backoff, RetryPolicy};
use crate::sync::{Authority, AuthorityRequest, SyncError};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// `Authority` over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct HttpAuthority {
    client: Client,
    base: Url,
    retry: RetryPolicy,
}

impl HttpAuthority {
    pub fn new(config: &AuthorityConfig) -> Result<Self, SyncError> {
        let base = Url::parse(&config.base_url).map_err(|e| SyncError::InvalidUrl(e.to_string()))?;
        if base.scheme() != "http" && base.scheme() != "https" {
            return Err(SyncError::InvalidScheme(base.scheme().to_string()));
        }
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            client,
            base,
            retry: config.retry,
        })
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(request: &AuthorityRequest) -> (Method, &'static str) {
        match request {
            AuthorityRequest::FetchCurrentGame => (Method::GET, protocol::CURRENT_GAME_PATH),
            AuthorityRequest::StartNewGame => (Method::POST, protocol::START_NEW_GAME_PATH),
            AuthorityRequest::StartNewRound => (Method::POST, protocol::START_NEW_ROUND_PATH),
            AuthorityRequest::ShowScore => (Method::POST, protocol::SHOW_SCORE_PATH),
            AuthorityRequest::PlayCard { .. } => (Method::POST, protocol::PLAY_CARD_PATH),
        }
    }

    async fn attempt(
        &self,
        method: Method,
        url: &Url,
        body: Option<&PlayCardRequest>,
        request_id: &str,
    ) -> Result<SessionState, SyncError> {
        let mut builder = self
            .client
            .request(method, url.clone())
            .header(REQUEST_ID_HEADER, request_id);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(SyncError::Rejected { status, body: text });
        }

        let reply: GameStateReply =
            serde_json::from_str(&text).map_err(|e| SyncError::InvalidReply(e.to_string()))?;
        Ok(reply.into())
    }

    /// One logical request: a fresh request id, retried while the failure is transient.
    async fn execute(&self, request: &AuthorityRequest) -> Result<SessionState, SyncError> {
        let (method, path) = Self::endpoint(request);
        let url = self
            .base
            .join(path)
            .map_err(|e| SyncError::InvalidUrl(e.to_string()))?;
        let body = match *request {
            AuthorityRequest::PlayCard { card, phase } => Some(PlayCardRequest::new(card, phase)),
            _ => None,
        };
        let request_id = Uuid::new_v4().to_string();
        let attempts = self.retry.attempts();

        let mut attempt = 1;
        loop {
            debug!(request_id = %request_id, %method, %url, attempt, "authority request");
            match self
                .attempt(method.clone(), &url, body.as_ref(), &request_id)
                .await
            {
                Ok(state) => {
                    info!(
                        request_id = %request_id,
                        request = %request,
                        phase = state.phase.as_wire(),
                        running_sum = state.running_sum,
                        "authority replied"
                    );
                    return Ok(state);
                }
                Err(err) if attempt < attempts && err.is_transient(request.is_idempotent()) => {
                    let delay = jittered_backoff(&mut rand::rng(), self.retry.backoff_for(attempt));
                    warn!(
                        request_id = %request_id,
                        request = %request,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "transient authority failure; retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => {
                    warn!(request_id = %request_id, request = %request, error = %err, "authority request failed");
                    return Err(err);
                }
            }
        }
    }
}

#[async_trait]
impl Authority for HttpAuthority {
    async fn fetch_current_game(&self) -> Result<SessionState, SyncError> {
        self.execute(&AuthorityRequest::FetchCurrentGame).await
    }

    async fn start_new_game(&self) -> Result<SessionState, SyncError> {
        self.execute(&AuthorityRequest::StartNewGame).await
    }

    async fn start_new_round(&self) -> Result<SessionState, SyncError> {
        self.execute(&AuthorityRequest::StartNewRound).await
    }

    async fn show_score(&self) -> Result<SessionState, SyncError> {
        self.execute(&AuthorityRequest::ShowScore).await
    }

    async fn submit_card(&self, card: Card, phase: Phase) -> Result<SessionState, SyncError> {
        self.execute(&AuthorityRequest::PlayCard { card, phase }).await
    }
}
