// Messenger Bridge
// Мост между хостом JS/WASM и нативной клиентской библиотекой

#![warn(clippy::all)]
#![allow(clippy::too_many_arguments)]

// Модули
pub mod adapter;
pub mod bindings;
pub mod bridge;
pub mod config;
pub mod error;
pub mod host;
pub mod registry;
pub mod utils;

// Re-exports для удобства
pub use adapter::{EntryKind, EntryPointTable, Outcome};
pub use bridge::{Bridge, NO_CIPHER};
pub use config::{ApiVersion, Config};
pub use error::{ErrorKind, HostError};
pub use host::{HostFunction, HostValue, Promise};
pub use registry::Registry;

// WASM-specific bindings
#[cfg(target_arch = "wasm32")]
pub mod wasm;
