//! DTO for the health check endpoint.

use chrono::Local;
use serde::Serialize;

/// `yyyy-MM-ddTHH:mm:ss`, local clock, no offset.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Health check response.
///
/// The timestamp is captured once, when the value is built.
#[derive(Debug, Clone, Serialize)]
pub struct Health {
    status: String,
    message: String,
    timestamp: String,
}

impl Health {
    pub fn new(status: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            message: message.into(),
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}
