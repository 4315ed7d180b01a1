//! Интерфейс нативной клиентской библиотеки ("bindings").
//!
//! Сама библиотека (сеть, криптография, передача файлов, DM) внешняя. Этот
//! модуль фиксирует только ту поверхность, которую мост публикует хосту:
//! фабрики, операции каждого объекта и callback-интерфейсы.
//!
//! Каждый файл объекта содержит константу `OPERATIONS` с именами операций в
//! том виде, в котором их видит хост. Таблицы точек входа обязаны совпадать с
//! этими списками.

pub mod backup;
pub mod callbacks;
pub mod channel;
pub mod cipher;
pub mod cmix;
pub mod connection;
pub mod dm;
pub mod dummy;
pub mod file_transfer;
pub mod reports;
pub mod single_use;

use std::sync::Arc;
use thiserror::Error;

pub use backup::Backup;
pub use callbacks::*;
pub use channel::Channel;
pub use cipher::DbCipher;
pub use cmix::Cmix;
pub use connection::Connection;
pub use dm::{DmClient, DmEnvelope};
pub use dummy::DummyTraffic;
pub use file_transfer::{FilePartTracker, FileTransfer};
pub use reports::*;
pub use single_use::Stopper;

/// Ошибка, возвращённая нативной библиотекой
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct NativeError {
    pub message: String,
    pub trace: Option<String>,
}

impl NativeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            trace: None,
        }
    }

    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }
}

pub type NativeResult<T> = std::result::Result<T, NativeError>;

/// Функции уровня модуля: фабрики и утилиты без объекта-владельца.
pub trait Bindings: Send + Sync {
    /// Создаёт хранилище нового клиента. Блокирующая операция.
    fn new_cmix(
        &self,
        ndf_json: &str,
        storage_dir: &str,
        password: &[u8],
        registration_code: &str,
    ) -> NativeResult<()>;

    /// Загружает клиента из существующего хранилища. Блокирующая операция.
    fn load_cmix(
        &self,
        storage_dir: &str,
        password: &[u8],
        cmix_params_json: &[u8],
    ) -> NativeResult<Arc<dyn Cmix>>;

    fn get_version(&self) -> String;
    fn get_git_version(&self) -> String;
    fn get_dependencies(&self) -> String;

    fn get_default_cmix_params(&self) -> NativeResult<Vec<u8>>;
    fn get_default_e2e_params(&self) -> NativeResult<Vec<u8>>;
    fn get_default_file_transfer_params(&self) -> NativeResult<Vec<u8>>;
    fn get_default_single_use_params(&self) -> NativeResult<Vec<u8>>;

    fn generate_secret(&self, num_bytes: usize) -> Vec<u8>;

    fn log_level(&self, level: i64) -> NativeResult<()>;

    fn new_broadcast_channel(
        &self,
        cmix: &Arc<dyn Cmix>,
        channel_definition: &[u8],
    ) -> NativeResult<Arc<dyn Channel>>;

    fn new_database_cipher(
        &self,
        cmix: &Arc<dyn Cmix>,
        password: &[u8],
        plaintext_block_size: usize,
    ) -> NativeResult<Arc<dyn DbCipher>>;

    fn init_file_transfer(
        &self,
        cmix: &Arc<dyn Cmix>,
        receive_callback: Arc<dyn ReceiveFileCallback>,
        file_transfer_params_json: &[u8],
    ) -> NativeResult<Arc<dyn FileTransfer>>;

    fn new_dm_client(
        &self,
        cmix: &Arc<dyn Cmix>,
        cipher: Option<Arc<dyn DbCipher>>,
        private_identity: &[u8],
        receiver: Arc<dyn DmReceiver>,
    ) -> NativeResult<Arc<dyn DmClient>>;

    /// Устанавливает соединение с партнёром. Блокирует до завершения обмена ключами.
    fn connect(
        &self,
        cmix: &Arc<dyn Cmix>,
        recipient_contact: &[u8],
        e2e_params_json: &[u8],
    ) -> NativeResult<Arc<dyn Connection>>;

    fn transmit_single_use(
        &self,
        cmix: &Arc<dyn Cmix>,
        recipient: &[u8],
        tag: &str,
        payload: &[u8],
        params_json: &[u8],
        response: Arc<dyn SingleUseResponse>,
    ) -> NativeResult<SingleUseSendReport>;

    fn listen_single_use(
        &self,
        cmix: &Arc<dyn Cmix>,
        tag: &str,
        callback: Arc<dyn SingleUseCallback>,
    ) -> NativeResult<Arc<dyn Stopper>>;

    fn new_dummy_traffic_manager(
        &self,
        cmix: &Arc<dyn Cmix>,
        max_num_messages: i64,
        avg_send_delta_ms: i64,
        random_range_ms: i64,
    ) -> NativeResult<Arc<dyn DummyTraffic>>;

    fn initialize_backup(
        &self,
        cmix: &Arc<dyn Cmix>,
        password: &str,
        update: Arc<dyn UpdateBackupCallback>,
    ) -> NativeResult<Arc<dyn Backup>>;
}

/// Имена функций уровня модуля
pub const OPERATIONS: &[&str] = &[
    "NewCmix",
    "LoadCmix",
    "GetVersion",
    "GetGitVersion",
    "GetDependencies",
    "GetDefaultCMixParams",
    "GetDefaultE2EParams",
    "GetDefaultFileTransferParams",
    "GetDefaultSingleUseParams",
    "GenerateSecret",
    "LogLevel",
    "NewBroadcastChannel",
    "NewDatabaseCipher",
    "InitFileTransfer",
    "NewDMClient",
    "Connect",
    "TransmitSingleUse",
    "Listen",
    "NewDummyTrafficManager",
    "InitializeBackup",
];
