//! Ошибки, видимые хосту.
//!
//! Синхронная точка входа бросает [`HostError`] как исключение, асинхронная
//! отклоняет им промис. Сообщение нативной ошибки передаётся без изменений.

use crate::config::ApiVersion;
use crate::utils::error::BridgeError;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidArgument,
    Native,
    NotFound,
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::Native => "native",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Internal => "internal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HostError {
    pub kind: ErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
}

impl HostError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            trace: None,
        }
    }

    /// Переводит внутреннюю ошибку в форму хоста.
    ///
    /// `ApiVersion::Legacy` отдаёт только сообщение, `ApiVersion::Current`
    /// добавляет структурированный trace, если библиотека его вернула.
    pub fn from_bridge(error: BridgeError, version: ApiVersion) -> Self {
        let (kind, message, trace) = match error {
            BridgeError::Native(native) => (ErrorKind::Native, native.message, native.trace),
            BridgeError::InvalidArgument { .. } | BridgeError::MissingMethod { .. } => {
                (ErrorKind::InvalidArgument, error.to_string(), None)
            }
            BridgeError::NotFound(_) => (ErrorKind::NotFound, error.to_string(), None),
            BridgeError::SerializationError(_) | BridgeError::InternalError(_) => {
                (ErrorKind::Internal, error.to_string(), None)
            }
        };

        Self {
            kind,
            message,
            trace: match version {
                ApiVersion::Legacy => None,
                ApiVersion::Current => trace,
            },
        }
    }
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for HostError {}
