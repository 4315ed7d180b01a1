// Типы ошибок

use crate::bindings::NativeError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BridgeError {
    /// Аргумент хоста отсутствует или имеет не тот тип
    #[error("Invalid argument {index}: expected {expected}, got {found}")]
    InvalidArgument {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },

    /// У объекта-callback на стороне хоста нет нужного метода
    #[error("Invalid argument {index}: object has no method {method}")]
    MissingMethod { index: usize, method: &'static str },

    /// Ошибка, которую вернула нативная библиотека. Сообщение не меняется.
    #[error("{0}")]
    Native(#[from] NativeError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl BridgeError {
    pub fn invalid_argument(index: usize, expected: &'static str, found: &'static str) -> Self {
        BridgeError::InvalidArgument {
            index,
            expected,
            found,
        }
    }
}

impl From<serde_json::Error> for BridgeError {
    fn from(error: serde_json::Error) -> Self {
        BridgeError::SerializationError(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
