// Клиент личных сообщений

use super::reports::{BlockedSenders, DmSendReport};
use super::NativeResult;

/// Общие поля каждого входящего DM
#[derive(Debug, Clone, PartialEq)]
pub struct DmEnvelope {
    pub message_id: Vec<u8>,
    pub nickname: String,
    pub partner_key: Vec<u8>,
    pub sender_key: Vec<u8>,
    pub dm_token: u32,
    pub codeset: i64,
    pub timestamp: i64,
    pub round_id: i64,
    pub status: i64,
}

pub trait DmClient: Send + Sync {
    fn get_public_key(&self) -> Vec<u8>;
    fn get_token(&self) -> u32;
    fn get_identity(&self) -> Vec<u8>;
    fn export_private_identity(&self, password: &str) -> NativeResult<Vec<u8>>;

    fn get_nickname(&self) -> NativeResult<String>;
    fn set_nickname(&self, nickname: &str);

    fn is_blocked(&self, sender_key: &[u8]) -> bool;
    fn block_sender(&self, sender_key: &[u8]);
    fn unblock_sender(&self, sender_key: &[u8]);
    fn get_blocked_senders(&self) -> BlockedSenders;

    fn get_database_name(&self) -> NativeResult<String>;

    fn send_text(
        &self,
        partner_key: &[u8],
        partner_token: u32,
        message: &str,
        lease_ms: i64,
        cmix_params_json: &[u8],
    ) -> NativeResult<DmSendReport>;

    fn send_reply(
        &self,
        partner_key: &[u8],
        partner_token: u32,
        message: &str,
        reply_to: &[u8],
        lease_ms: i64,
        cmix_params_json: &[u8],
    ) -> NativeResult<DmSendReport>;

    fn send_reaction(
        &self,
        partner_key: &[u8],
        partner_token: u32,
        reaction: &str,
        reacts_to: &[u8],
        cmix_params_json: &[u8],
    ) -> NativeResult<DmSendReport>;

    fn send(
        &self,
        partner_key: &[u8],
        partner_token: u32,
        message_type: i64,
        plaintext: &[u8],
        lease_ms: i64,
        cmix_params_json: &[u8],
    ) -> NativeResult<DmSendReport>;
}

pub const OPERATIONS: &[&str] = &[
    "GetPublicKey",
    "GetToken",
    "GetIdentity",
    "ExportPrivateIdentity",
    "GetNickname",
    "SetNickname",
    "IsBlocked",
    "BlockSender",
    "UnblockSender",
    "GetBlockedSenders",
    "GetDatabaseName",
    "SendText",
    "SendReply",
    "SendReaction",
    "Send",
];
