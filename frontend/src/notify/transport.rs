use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use log::debug;
use serde::Serialize;

use super::clock::iso_timestamp;
use super::error::TransportError;

const CONTENT_TYPE: &str = "text/plain;charset=utf-8";

/// Body of the notify-me POST.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct NotifyPayload {
    pub email: String,
    pub timestamp: String,
    pub source: String,
}

impl NotifyPayload {
    pub fn new(email: &str, now_millis: i64, source: &str) -> Self {
        Self {
            email: email.to_string(),
            timestamp: iso_timestamp(now_millis),
            source: source.to_string(),
        }
    }

    /// The form backend reads a plain-text body holding JSON.
    pub fn to_body(&self) -> Result<String, TransportError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Something that can deliver a payload to the form backend. Futures are
/// `!Send` since everything runs on the browser's single thread.
pub trait NotifyTransport {
    fn send<'a>(&'a self, payload: &'a NotifyPayload) -> LocalBoxFuture<'a, Result<(), TransportError>>;
}

pub struct GlooTransport {
    endpoint: String,
}

impl GlooTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

impl NotifyTransport for GlooTransport {
    fn send<'a>(&'a self, payload: &'a NotifyPayload) -> LocalBoxFuture<'a, Result<(), TransportError>> {
        Box::pin(async move {
            let body = payload.to_body()?;
            let response = Request::post(&self.endpoint)
                .header("Content-Type", CONTENT_TYPE)
                .body(body)
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;

            let status = response.status();
            debug!("Notify endpoint answered with status {}", status);
            let text = response.text().await.unwrap_or_default();

            if response.ok() {
                Ok(())
            } else {
                Err(TransportError::Status { status, body: text })
            }
        })
    }
}

/// Records every body it is asked to send and answers with a fixed status.
#[cfg(test)]
pub struct ScriptedTransport {
    pub status: u16,
    pub bodies: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl ScriptedTransport {
    pub fn answering(status: u16) -> Self {
        Self { status, bodies: std::cell::RefCell::new(Vec::new()) }
    }

    pub fn calls(&self) -> usize {
        self.bodies.borrow().len()
    }
}

#[cfg(test)]
impl NotifyTransport for ScriptedTransport {
    fn send<'a>(&'a self, payload: &'a NotifyPayload) -> LocalBoxFuture<'a, Result<(), TransportError>> {
        Box::pin(async move {
            self.bodies.borrow_mut().push(payload.to_body()?);
            if (200..300).contains(&self.status) {
                Ok(())
            } else {
                Err(TransportError::Status { status: self.status, body: "scripted failure".to_string() })
            }
        })
    }
}
