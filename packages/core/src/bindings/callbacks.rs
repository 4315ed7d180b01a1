// Callback-интерфейсы, которые вызывает нативная библиотека.
// Вызовы приходят из фоновых потоков библиотеки, поэтому Send + Sync.

use super::dm::DmEnvelope;
use super::file_transfer::FilePartTracker;
use super::reports::FileProgress;
use super::NativeError;
use std::sync::Arc;

pub trait NetworkHealthCallback: Send + Sync {
    fn callback(&self, healthy: bool);
}

pub trait ClientErrorReporter: Send + Sync {
    fn report(&self, source: &str, message: &str, trace: &str);
}

pub trait BroadcastListener: Send + Sync {
    fn callback(&self, payload: &[u8], err: Option<&NativeError>);
}

/// Получатель E2E-сообщений соединения
pub trait Listener: Send + Sync {
    fn hear(&self, item: &[u8]);
    fn name(&self) -> String;
}

/// Вызывается на стороне получателя одноразового запроса
pub trait SingleUseCallback: Send + Sync {
    fn callback(&self, callback_report: &[u8], err: Option<&NativeError>);
}

/// Вызывается на стороне отправителя, когда приходит ответ
pub trait SingleUseResponse: Send + Sync {
    fn callback(&self, response_report: &[u8], err: Option<&NativeError>);
}

pub trait ReceiveFileCallback: Send + Sync {
    fn callback(&self, payload: &[u8], err: Option<&NativeError>);
}

/// Прогресс отправки. Вызывается при инициализации и затем не чаще раза за
/// период, пока передача не завершится или не случится фатальная ошибка.
pub trait FileTransferSentProgressCallback: Send + Sync {
    fn callback(
        &self,
        progress: &FileProgress,
        tracker: Arc<dyn FilePartTracker>,
        err: Option<&NativeError>,
    );
}

pub trait FileTransferReceiveProgressCallback: Send + Sync {
    fn callback(
        &self,
        progress: &FileProgress,
        tracker: Arc<dyn FilePartTracker>,
        err: Option<&NativeError>,
    );
}

pub trait UpdateBackupCallback: Send + Sync {
    fn update_backup(&self, encrypted_backup: &[u8]);
}

/// Хранилище входящих DM на стороне хоста.
///
/// Методы `receive*` возвращают идентификатор, который хост присвоил
/// сообщению; библиотека передаёт его обратно в `update_sent_status`.
pub trait DmReceiver: Send + Sync {
    fn receive(&self, envelope: &DmEnvelope, text: &[u8], message_type: i64) -> i64;
    fn receive_text(&self, envelope: &DmEnvelope, text: &str) -> i64;
    fn receive_reply(&self, envelope: &DmEnvelope, reply_to: &[u8], text: &str) -> i64;
    fn receive_reaction(&self, envelope: &DmEnvelope, reaction_to: &[u8], reaction: &str) -> i64;
    fn update_sent_status(
        &self,
        uuid: i64,
        message_id: &[u8],
        timestamp: i64,
        round_id: i64,
        status: i64,
    );
}

/// Методы, которые должен иметь объект-получатель на стороне хоста
pub const LISTENER_METHODS: [&str; 2] = ["Hear", "Name"];

pub const DM_RECEIVER_METHODS: [&str; 5] = [
    "Receive",
    "ReceiveText",
    "ReceiveReply",
    "ReceiveReaction",
    "UpdateSentStatus",
];
