// E2E соединение с партнёром

use super::callbacks::Listener;
use super::reports::E2eSendReport;
use super::NativeResult;
use std::sync::Arc;

pub trait Connection: Send + Sync {
    fn get_partner(&self) -> Vec<u8>;
    fn send_e2e(&self, message_type: i64, payload: &[u8]) -> NativeResult<E2eSendReport>;
    fn close(&self) -> NativeResult<()>;
    fn register_listener(&self, message_type: i64, listener: Arc<dyn Listener>)
        -> NativeResult<()>;
}

pub const OPERATIONS: &[&str] = &["GetPartner", "SendE2E", "Close", "RegisterListener"];
