//! Live intake service that backs the host view's `wizard.*` calls.
//!
//! Owns the single [`Session`], paces replies with the configured cosmetic
//! delays, and performs the handoff on completion. Responses are JSON
//! payloads ready for a message-history view: `prompt` is what the bot says
//! next, `options` (when present) is the finite button set.

use std::sync::Arc;

use {
    serde_json::{Value, json},
    tokio::time::{Duration, sleep},
    tracing::{info, warn},
};

use {
    atende_config::AtendeConfig,
    atende_handoff::{LinkOpener, deep_link, format_summary},
};

use crate::{
    script::{AnswerField, CLOSING_MESSAGE},
    state::{Session, Submission},
};

/// Live intake service backed by one [`Session`] and a [`LinkOpener`].
pub struct LiveIntakeService {
    session: tokio::sync::Mutex<Option<Session>>,
    config: AtendeConfig,
    opener: Arc<dyn LinkOpener>,
}

impl LiveIntakeService {
    pub fn new(config: AtendeConfig, opener: Arc<dyn LinkOpener>) -> Self {
        Self {
            session: tokio::sync::Mutex::new(None),
            config,
            opener,
        }
    }

    /// Open the widget: create a fresh session and return the first prompt.
    ///
    /// `preset_request_type` pre-seeds the request-type answer (the "open
    /// for quote" entry point); out-of-set labels are ignored with a warning.
    pub async fn start(&self, preset_request_type: Option<&str>) -> Value {
        let mut session = Session::new();
        if let Some(label) = preset_request_type
            && !session.preset_request_type(label)
        {
            warn!(label, "ignoring out-of-set request-type preset");
        }
        let resp = step_response(&session);
        *self.session.lock().await = Some(session);
        resp
    }

    /// Feed one typed answer to the wizard.
    pub async fn submit(&self, input: &str) -> Result<Value, String> {
        let outcome = {
            let mut guard = self.session.lock().await;
            let session = guard.as_mut().ok_or("no active intake session")?;
            session.submit(input)
        };
        self.finish_turn(outcome).await
    }

    /// Select one of the fixed options on the request-type step.
    pub async fn select(&self, label: &str) -> Result<Value, String> {
        let outcome = {
            let mut guard = self.session.lock().await;
            let session = guard.as_mut().ok_or("no active intake session")?;
            session.select(label)
        };
        self.finish_turn(outcome).await
    }

    /// Reset to the first step, creating a session if none is active.
    pub async fn reset(&self) -> Value {
        let mut guard = self.session.lock().await;
        match guard.as_mut() {
            Some(session) => {
                session.reset();
                step_response(session)
            },
            None => {
                let session = Session::new();
                let resp = step_response(&session);
                *guard = Some(session);
                resp
            },
        }
    }

    /// Drop the active session (widget closed for good).
    pub async fn cancel(&self) {
        *self.session.lock().await = None;
    }

    /// Current session status.
    pub async fn status(&self) -> Value {
        let guard = self.session.lock().await;
        match guard.as_ref() {
            Some(session) => json!({
                "active": true,
                "step": session.step_index(),
                "advancing": session.is_advancing(),
                "completed": session.is_complete(),
            }),
            None => json!({ "active": false }),
        }
    }

    /// Turn a [`Submission`] into the host-facing response, applying the
    /// cosmetic pacing and, on completion, the handoff.
    async fn finish_turn(&self, outcome: Submission) -> Result<Value, String> {
        match outcome {
            Submission::Rejected { reprompt } => Ok(json!({
                "accepted": false,
                "prompt": reprompt,
            })),
            Submission::Busy => Err("a transition is already in progress".into()),
            Submission::Accepted => {
                // The advancing flag set by the session keeps concurrent
                // submits out while the lock is released for the pause.
                sleep(Duration::from_millis(self.config.wizard.reply_delay_ms)).await;
                let mut guard = self.session.lock().await;
                let session = guard.as_mut().ok_or("no active intake session")?;
                session.next_prompt();
                let mut resp = step_response(session);
                resp["accepted"] = json!(true);
                Ok(resp)
            },
            Submission::Completed => {
                let (request, link) = {
                    let guard = self.session.lock().await;
                    let session = guard.as_ref().ok_or("no active intake session")?;
                    let request = session.answers().to_request();
                    let summary = format_summary(&request, &self.config.handoff);
                    (request, deep_link(&self.config.handoff.destination, &summary))
                };

                sleep(Duration::from_millis(self.config.wizard.reply_delay_ms)).await;
                sleep(Duration::from_millis(self.config.wizard.redirect_delay_ms)).await;

                // Fire-and-forget: a failed open is logged, never surfaced.
                if let Err(error) = self.opener.open_link(&link) {
                    warn!(%error, "failed to open handoff link");
                }
                info!("intake complete, session reset");

                let mut guard = self.session.lock().await;
                if let Some(session) = guard.as_mut() {
                    session.reset();
                }

                Ok(json!({
                    "accepted": true,
                    "done": true,
                    "prompt": CLOSING_MESSAGE,
                    "link": link,
                    "request": request,
                }))
            },
        }
    }
}

fn step_response(session: &Session) -> Value {
    let mut resp = json!({
        "step": session.step_index(),
        "field": session.field().map(AnswerField::key),
        "prompt": session.prompt(),
        "done": session.is_complete(),
    });
    if let Some(options) = session.options() {
        resp["options"] = json!(options);
    }
    resp
}
