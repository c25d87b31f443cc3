//! Generation request controller.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use vesti_core::error::{Result, VestiError};
use vesti_core::gateway::ApiGateway;
use vesti_core::generation::GenerationStatus;

#[derive(Default)]
struct GenerationState {
    prompt: String,
    status: GenerationStatus,
}

/// Manages the single "generate outfit from prompt" request.
///
/// At most one request is honored at a time: each submit bumps a monotonic
/// sequence number, and a response is applied only when its captured number
/// still equals the current one. A superseded request keeps running at the
/// transport level; its eventual response is simply dropped.
pub struct GenerationController {
    gateway: Arc<dyn ApiGateway>,
    sequence: AtomicU64,
    state: Mutex<GenerationState>,
}

impl GenerationController {
    pub fn new(gateway: Arc<dyn ApiGateway>) -> Self {
        Self {
            gateway,
            sequence: AtomicU64::new(0),
            state: Mutex::new(GenerationState::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, GenerationState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn status(&self) -> GenerationStatus {
        self.lock().status.clone()
    }

    pub fn prompt(&self) -> String {
        self.lock().prompt.clone()
    }

    /// Submits a generation request for `prompt`.
    ///
    /// The trimmed prompt must be non-empty, checked before any network
    /// traffic. A submit while a prior request is in flight supersedes it:
    /// the new call starts immediately and the old response, whenever it
    /// lands, is discarded without touching state.
    pub async fn submit(&self, prompt: &str) -> Result<()> {
        let trimmed = prompt.trim();
        if trimmed.is_empty() {
            return Err(VestiError::validation(
                "Please describe the outfit you want",
            ));
        }

        let ticket = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.lock();
            state.prompt = trimmed.to_string();
            state.status = GenerationStatus::InFlight;
        }

        let outcome = self.gateway.generate_outfit(trimmed).await;

        let mut state = self.lock();
        if self.sequence.load(Ordering::SeqCst) != ticket {
            tracing::debug!(ticket, "discarding superseded generation response");
            return Ok(());
        }
        match outcome {
            Ok(outcome) => {
                state.status = GenerationStatus::Succeeded(outcome);
                Ok(())
            }
            Err(e) => {
                state.status = GenerationStatus::Failed(e.user_message());
                Err(e)
            }
        }
    }

    /// Returns to idle, clearing the prompt and any result. An in-flight
    /// request is not cancelled; bumping the sequence makes its response
    /// stale instead.
    pub fn reset(&self) {
        self.sequence.fetch_add(1, Ordering::SeqCst);
        let mut state = self.lock();
        state.prompt.clear();
        state.status = GenerationStatus::Idle;
    }

    /// Saves the current successful result under `name` (trimmed,
    /// non-empty). Generation status is left untouched either way.
    pub async fn save_result(&self, name: &str) -> Result<()> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(VestiError::validation(
                "Please enter a name for this outfit",
            ));
        }
        let (prompt, image_url) = {
            let state = self.lock();
            match state.status.outcome() {
                Some(outcome) => (state.prompt.clone(), outcome.image_url.clone()),
                None => {
                    return Err(VestiError::validation("No generated outfit to save"));
                }
            }
        };
        self.gateway.save_outfit(trimmed, &image_url, &prompt).await
    }
}
