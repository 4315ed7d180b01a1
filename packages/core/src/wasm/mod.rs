// WASM-специфичные привязки: преобразование значений JS и публикация таблиц

pub mod console;
pub mod convert;
pub mod expose;

pub use expose::{expose, init_logging};
