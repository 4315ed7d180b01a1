// Публикация таблицы уровня модуля в глобальном объекте JS

use super::convert::entry_to_js;
use crate::bridge::Bridge;
use crate::config::Config;
use js_sys::Reflect;
use wasm_bindgen::prelude::*;

/// Регистрирует все функции уровня модуля (`NewCmix`, `LoadCmix`, ...)
/// как глобальные функции хоста.
pub fn expose(bridge: &Bridge) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let table = bridge.module_table();
    let global = js_sys::global();
    for name in table.names() {
        Reflect::set(&global, &JsValue::from_str(name), &entry_to_js(table.clone(), name))?;
    }

    tracing::info!(entries = table.len(), "bindings exposed");
    Ok(())
}

/// Инициализация логирования из JS; без аргумента берётся фильтр из конфигурации
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(filter: Option<String>) -> bool {
    let filter = filter.unwrap_or_else(|| Config::global().log_filter.clone());
    crate::utils::logging::init_logging(&filter)
}
