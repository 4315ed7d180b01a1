// Логирование
//
// Все модули пишут через tracing. Подписчик ставится один раз на процесс;
// на wasm32 вывод идёт в консоль браузера.

use tracing_subscriber::EnvFilter;

/// Устанавливает глобальный подписчик tracing.
///
/// Повторный вызов ничего не меняет и возвращает `false`.
pub fn init_logging(filter: &str) -> bool {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    #[cfg(target_arch = "wasm32")]
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(false)
        .without_time()
        .with_writer(crate::wasm::console::ConsoleMakeWriter);

    #[cfg(not(target_arch = "wasm32"))]
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);

    builder.try_init().is_ok()
}
