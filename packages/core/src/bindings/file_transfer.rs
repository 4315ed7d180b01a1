// Передача файлов

use super::callbacks::{FileTransferReceiveProgressCallback, FileTransferSentProgressCallback};
use super::NativeResult;
use std::sync::Arc;

pub trait FileTransfer: Send + Sync {
    /// Ставит файл в очередь на отправку и возвращает ID передачи.
    ///
    /// `retry` - доля частей, которые разрешено переотправить. Прогресс
    /// приходит в `progress` не чаще раза за `period_ms`.
    fn send(
        &self,
        file_send: &[u8],
        recipient_id: &[u8],
        retry: f64,
        progress: Arc<dyn FileTransferSentProgressCallback>,
        period_ms: i64,
    ) -> NativeResult<Vec<u8>>;

    fn receive(&self, transfer_id: &[u8]) -> NativeResult<Vec<u8>>;
    fn close_send(&self, transfer_id: &[u8]) -> NativeResult<()>;

    fn register_sent_progress_callback(
        &self,
        transfer_id: &[u8],
        progress: Arc<dyn FileTransferSentProgressCallback>,
        period_ms: i64,
    ) -> NativeResult<()>;

    fn register_received_progress_callback(
        &self,
        transfer_id: &[u8],
        progress: Arc<dyn FileTransferReceiveProgressCallback>,
        period_ms: i64,
    ) -> NativeResult<()>;

    fn max_file_name_len(&self) -> i64;
    fn max_file_type_len(&self) -> i64;
    fn max_file_size(&self) -> i64;
    fn max_preview_size(&self) -> i64;
}

/// Статус отдельных частей передаваемого файла
pub trait FilePartTracker: Send + Sync {
    fn get_part_status(&self, part_num: i64) -> i64;
    fn get_num_parts(&self) -> i64;
}

pub const OPERATIONS: &[&str] = &[
    "Send",
    "Receive",
    "CloseSend",
    "RegisterSentProgressCallback",
    "RegisterReceivedProgressCallback",
    "MaxFileNameLen",
    "MaxFileTypeLen",
    "MaxFileSize",
    "MaxPreviewSize",
];

pub const TRACKER_OPERATIONS: &[&str] = &["GetPartStatus", "GetNumParts"];
