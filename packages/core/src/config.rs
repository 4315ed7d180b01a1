//! Централизованная конфигурация моста
//!
//! Различия между версиями API хоста задаются здесь параметром, а не
//! отдельными копиями адаптеров.

use std::sync::OnceLock;

/// Глобальная конфигурация (синглтон)
static GLOBAL_CONFIG: OnceLock<Config> = OnceLock::new();

/// Версия контракта ошибок, которую ожидает хост
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiVersion {
    /// Исключения несут только сообщение
    Legacy,
    /// Исключения несут сообщение и структурированный trace
    #[default]
    Current,
}

impl ApiVersion {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "legacy" | "v1" => Some(ApiVersion::Legacy),
            "current" | "v2" => Some(ApiVersion::Current),
            _ => None,
        }
    }
}

/// Основная структура конфигурации
#[derive(Debug, Clone)]
pub struct Config {
    /// Формат ошибок, отдаваемых хосту
    pub api_version: ApiVersion,

    /// Фильтр для tracing-subscriber (синтаксис EnvFilter)
    pub log_filter: String,

    /// Имя фоновых потоков, выполняющих асинхронные точки входа
    pub worker_thread_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_version: ApiVersion::Current,
            log_filter: "info".to_string(),
            worker_thread_name: "bridge-worker".to_string(),
        }
    }
}

impl Config {
    /// Создать конфигурацию из переменных окружения
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("BRIDGE_API_VERSION") {
            if let Some(parsed) = ApiVersion::parse(&val) {
                config.api_version = parsed;
            }
        }

        if let Ok(val) = std::env::var("BRIDGE_LOG") {
            if !val.trim().is_empty() {
                config.log_filter = val;
            }
        }

        if let Ok(val) = std::env::var("BRIDGE_WORKER_THREAD_NAME") {
            if !val.trim().is_empty() {
                config.worker_thread_name = val;
            }
        }

        config
    }

    /// Получить глобальный экземпляр конфигурации
    ///
    /// Инициализирует значения по умолчанию при первом вызове
    pub fn global() -> &'static Config {
        GLOBAL_CONFIG.get_or_init(Config::default)
    }

    /// # Errors
    ///
    /// Возвращает ошибку, если конфигурация уже была инициализирована
    pub fn init() -> Result<(), &'static str> {
        GLOBAL_CONFIG
            .set(Self::default())
            .map_err(|_| "Config already initialized")
    }

    /// # Errors
    ///
    /// Возвращает ошибку, если конфигурация уже была инициализирована
    pub fn init_from_env() -> Result<(), &'static str> {
        GLOBAL_CONFIG
            .set(Self::from_env())
            .map_err(|_| "Config already initialized")
    }

    /// # Errors
    ///
    /// Возвращает ошибку, если конфигурация уже была инициализирована
    pub fn init_with(config: Config) -> Result<(), &'static str> {
        GLOBAL_CONFIG
            .set(config)
            .map_err(|_| "Config already initialized")
    }

    pub fn is_initialized() -> bool {
        GLOBAL_CONFIG.get().is_some()
    }
}
