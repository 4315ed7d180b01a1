// Широковещательный канал

use super::callbacks::BroadcastListener;
use super::reports::{BroadcastReport, ChannelDefinition};
use super::NativeResult;
use std::sync::Arc;

pub trait Channel: Send + Sync {
    fn listen(&self, listener: Arc<dyn BroadcastListener>, method: i64) -> NativeResult<()>;
    fn broadcast(&self, payload: &[u8]) -> NativeResult<BroadcastReport>;
    fn broadcast_asymmetric(&self, payload: &[u8], private_key: &[u8])
        -> NativeResult<BroadcastReport>;
    fn max_payload_size(&self) -> i64;
    fn max_asymmetric_payload_size(&self) -> i64;
    fn get(&self) -> NativeResult<ChannelDefinition>;
    fn stop(&self);
}

pub const OPERATIONS: &[&str] = &[
    "Listen",
    "Broadcast",
    "BroadcastAsymmetric",
    "MaxPayloadSize",
    "MaxAsymmetricPayloadSize",
    "Get",
    "Stop",
];
