use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Why a call to att-server did not produce a usable JSON answer.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Connection, TLS or timeout failure before any response arrived
    #[error("Could not reach att-server: {source} {location}")]
    Transport {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    /// The server answered with a non-2xx status and its `{"error": ...}` envelope
    #[error("att-server refused the request ({status} {code}): {message} {location}")]
    Rejected {
        status: u16,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("att-server sent a body that is not JSON: {source} {location}")]
    Decode {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Server error code such as `EXPIRED_TOKEN`; only rejections carry one.
    pub fn code(&self) -> Option<&str> {
        match self {
            ClientError::Rejected { code, .. } => Some(code),
            _ => None,
        }
    }

    /// HTTP status of a rejection.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        ClientError::Transport {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        ClientError::Decode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
