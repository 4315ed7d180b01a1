// Структуры, которые библиотека возвращает из операций.
// Мост отдаёт их хосту как JSON в байтовом буфере.

use crate::utils::serialization::{base64_bytes, base64_list};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BroadcastReport {
    pub rounds: Vec<u64>,
    #[serde(rename = "EphID")]
    pub ephemeral_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct E2eSendReport {
    pub rounds: Vec<u64>,
    #[serde(rename = "MessageID", with = "base64_bytes")]
    pub message_id: Vec<u8>,
    pub timestamp: i64,
    #[serde(with = "base64_bytes")]
    pub key_residue: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SingleUseSendReport {
    pub rounds: Vec<u64>,
    #[serde(rename = "EphID")]
    pub ephemeral_id: i64,
    #[serde(rename = "ReceptionID", with = "base64_bytes")]
    pub reception_id: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DmSendReport {
    #[serde(rename = "MessageID", with = "base64_bytes")]
    pub message_id: Vec<u8>,
    pub rounds: Vec<u64>,
    #[serde(rename = "EphID")]
    pub ephemeral_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileProgress {
    #[serde(rename = "TransferID", with = "base64_bytes")]
    pub transfer_id: Vec<u8>,
    pub completed: bool,
    pub transmitted: u32,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NodeRegistrationReport {
    pub number_of_nodes_registered: i64,
    pub number_of_nodes: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IsReadyInfo {
    pub is_ready: bool,
    pub how_close: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChannelDefinition {
    pub name: String,
    pub description: String,
    #[serde(with = "base64_bytes")]
    pub salt: Vec<u8>,
    #[serde(rename = "PubKey", with = "base64_bytes")]
    pub public_key: Vec<u8>,
    pub max_payload_size: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockedSenders(#[serde(with = "base64_list")] pub Vec<Vec<u8>>);
