//! Scripted [`GuiApi`] for poller and app tests.

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use tokio::time::Instant;

use super::error::{AppError, Result};
use super::service::GuiApi;

/// Answers per endpoint: queued one-shot replies first, then a repeating reply.
/// Endpoints without any script fail with a network error.
#[derive(Default)]
pub(crate) struct ScriptedApi {
    queued: Mutex<HashMap<String, VecDeque<Result<Value>>>>,
    repeating: Mutex<HashMap<String, Result<Value>>>,
    calls: Mutex<Vec<(String, Instant)>>,
}

impl ScriptedApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Reply with `result` on every call once the queue for `endpoint` is empty.
    pub(crate) fn always(&self, endpoint: &str, result: Result<Value>) -> &Self {
        self.repeating.lock().insert(endpoint.to_string(), result);
        self
    }

    /// Reply with `result` once, before any repeating reply.
    pub(crate) fn once(&self, endpoint: &str, result: Result<Value>) -> &Self {
        self.queued
            .lock()
            .entry(endpoint.to_string())
            .or_default()
            .push_back(result);
        self
    }

    /// Times at which `endpoint` was requested.
    pub(crate) fn calls_to(&self, endpoint: &str) -> Vec<Instant> {
        self.calls
            .lock()
            .iter()
            .filter(|(e, _)| e == endpoint)
            .map(|(_, at)| *at)
            .collect()
    }

    pub(crate) fn call_count(&self, endpoint: &str) -> usize {
        self.calls_to(endpoint).len()
    }
}

#[async_trait]
impl GuiApi for ScriptedApi {
    async fn fetch(&self, endpoint: &str) -> Result<Value> {
        self.calls.lock().push((endpoint.to_string(), Instant::now()));

        if let Some(result) = self
            .queued
            .lock()
            .get_mut(endpoint)
            .and_then(VecDeque::pop_front)
        {
            return result;
        }

        self.repeating
            .lock()
            .get(endpoint)
            .cloned()
            .unwrap_or_else(|| Err(AppError::Network(format!("no script for {}", endpoint))))
    }
}
