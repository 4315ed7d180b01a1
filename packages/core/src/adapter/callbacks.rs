//! Callback-адаптеры: функции хоста, реализующие callback-интерфейсы
//! библиотеки.
//!
//! Адаптер создаётся сразу при разборе аргументов: если у объекта хоста нет
//! нужного метода, точка входа падает до вызова библиотеки. Каждый вызов
//! библиотеки превращается ровно в один синхронный вызов хоста; состояния
//! между вызовами нет.

use super::file_transfer::file_part_tracker_table;
use super::AdapterContext;
use crate::bindings::{
    BroadcastListener, ClientErrorReporter, DmEnvelope, DmReceiver, FilePartTracker, FileProgress,
    FileTransferReceiveProgressCallback, FileTransferSentProgressCallback, Listener, NativeError,
    NetworkHealthCallback, ReceiveFileCallback, SingleUseCallback, SingleUseResponse,
    UpdateBackupCallback, DM_RECEIVER_METHODS, LISTENER_METHODS,
};
use crate::error::HostError;
use crate::host::{Args, HostFunction, HostValue};
use crate::utils::error::Result;
use crate::utils::serialization::to_json_bytes;
use std::sync::Arc;

/// Вызывает функцию хоста. Исключение хоста логируется: библиотеке
/// передавать его некуда.
fn forward(capability: &'static str, f: &HostFunction, args: Vec<HostValue>) -> Option<HostValue> {
    match f.call(args) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(capability, error = %e, "host callback threw");
            None
        }
    }
}

fn native_error(context: &AdapterContext, err: Option<&NativeError>) -> HostValue {
    match err {
        Some(e) => HostValue::Error(HostError::from_bridge(e.clone().into(), context.api_version)),
        None => HostValue::Null,
    }
}

fn progress_json(progress: &FileProgress) -> HostValue {
    match to_json_bytes(progress) {
        Ok(bytes) => HostValue::Bytes(bytes),
        Err(e) => {
            tracing::error!(error = %e, "failed to marshal file transfer progress");
            HostValue::Null
        }
    }
}

/// Функция хоста или объект с методом `Callback`
pub struct HostCallback {
    capability: &'static str,
    callback: HostFunction,
    context: AdapterContext,
}

impl HostCallback {
    pub fn from_arg(
        capability: &'static str,
        args: &Args,
        index: usize,
        method: &'static str,
        context: &AdapterContext,
    ) -> Result<Self> {
        Ok(Self {
            capability,
            callback: args.callable(index, method)?,
            context: context.clone(),
        })
    }

    fn call(&self, args: Vec<HostValue>) -> Option<HostValue> {
        forward(self.capability, &self.callback, args)
    }

    fn payload_and_error(&self, payload: &[u8], err: Option<&NativeError>) {
        self.call(vec![
            HostValue::bytes(payload),
            native_error(&self.context, err),
        ]);
    }

    fn progress(
        &self,
        progress: &FileProgress,
        tracker: Arc<dyn FilePartTracker>,
        err: Option<&NativeError>,
    ) {
        let tracker_table = file_part_tracker_table(tracker, &self.context);
        self.call(vec![
            progress_json(progress),
            HostValue::Table(tracker_table),
            native_error(&self.context, err),
        ]);
    }
}

pub fn health_callback(
    args: &Args,
    index: usize,
    context: &AdapterContext,
) -> Result<Arc<dyn NetworkHealthCallback>> {
    Ok(Arc::new(HostCallback::from_arg("NetworkHealthCallback", args, index, "Callback", context)?))
}

impl NetworkHealthCallback for HostCallback {
    fn callback(&self, healthy: bool) {
        self.call(vec![healthy.into()]);
    }
}

pub fn client_error_reporter(
    args: &Args,
    index: usize,
    context: &AdapterContext,
) -> Result<Arc<dyn ClientErrorReporter>> {
    Ok(Arc::new(HostCallback::from_arg("ClientError", args, index, "Report", context)?))
}

impl ClientErrorReporter for HostCallback {
    fn report(&self, source: &str, message: &str, trace: &str) {
        self.call(vec![source.into(), message.into(), trace.into()]);
    }
}

pub fn broadcast_listener(
    args: &Args,
    index: usize,
    context: &AdapterContext,
) -> Result<Arc<dyn BroadcastListener>> {
    Ok(Arc::new(HostCallback::from_arg("BroadcastListener", args, index, "Callback", context)?))
}

impl BroadcastListener for HostCallback {
    fn callback(&self, payload: &[u8], err: Option<&NativeError>) {
        self.payload_and_error(payload, err);
    }
}

pub fn single_use_callback(
    args: &Args,
    index: usize,
    context: &AdapterContext,
) -> Result<Arc<dyn SingleUseCallback>> {
    Ok(Arc::new(HostCallback::from_arg("SingleUseCallback", args, index, "Callback", context)?))
}

impl SingleUseCallback for HostCallback {
    fn callback(&self, callback_report: &[u8], err: Option<&NativeError>) {
        self.payload_and_error(callback_report, err);
    }
}

pub fn single_use_response(
    args: &Args,
    index: usize,
    context: &AdapterContext,
) -> Result<Arc<dyn SingleUseResponse>> {
    Ok(Arc::new(HostCallback::from_arg("SingleUseResponse", args, index, "Callback", context)?))
}

impl SingleUseResponse for HostCallback {
    fn callback(&self, response_report: &[u8], err: Option<&NativeError>) {
        self.payload_and_error(response_report, err);
    }
}

pub fn receive_file_callback(
    args: &Args,
    index: usize,
    context: &AdapterContext,
) -> Result<Arc<dyn ReceiveFileCallback>> {
    Ok(Arc::new(HostCallback::from_arg("ReceiveFileCallback", args, index, "Callback", context)?))
}

impl ReceiveFileCallback for HostCallback {
    fn callback(&self, payload: &[u8], err: Option<&NativeError>) {
        self.payload_and_error(payload, err);
    }
}

pub fn sent_progress_callback(
    args: &Args,
    index: usize,
    context: &AdapterContext,
) -> Result<Arc<dyn FileTransferSentProgressCallback>> {
    Ok(Arc::new(HostCallback::from_arg(
        "FileTransferSentProgressCallback",
        args,
        index,
        "Callback",
        context,
    )?))
}

impl FileTransferSentProgressCallback for HostCallback {
    fn callback(
        &self,
        progress: &FileProgress,
        tracker: Arc<dyn FilePartTracker>,
        err: Option<&NativeError>,
    ) {
        self.progress(progress, tracker, err);
    }
}

pub fn received_progress_callback(
    args: &Args,
    index: usize,
    context: &AdapterContext,
) -> Result<Arc<dyn FileTransferReceiveProgressCallback>> {
    Ok(Arc::new(HostCallback::from_arg(
        "FileTransferReceiveProgressCallback",
        args,
        index,
        "Callback",
        context,
    )?))
}

impl FileTransferReceiveProgressCallback for HostCallback {
    fn callback(
        &self,
        progress: &FileProgress,
        tracker: Arc<dyn FilePartTracker>,
        err: Option<&NativeError>,
    ) {
        self.progress(progress, tracker, err);
    }
}

pub fn update_backup_callback(
    args: &Args,
    index: usize,
    context: &AdapterContext,
) -> Result<Arc<dyn UpdateBackupCallback>> {
    Ok(Arc::new(HostCallback::from_arg("UpdateBackupFunc", args, index, "UpdateBackup", context)?))
}

impl UpdateBackupCallback for HostCallback {
    fn update_backup(&self, encrypted_backup: &[u8]) {
        self.call(vec![HostValue::bytes(encrypted_backup)]);
    }
}

/// Объект хоста с методами `Hear` и `Name`
pub struct ListenerAdapter {
    hear: HostFunction,
    name: HostFunction,
}

impl ListenerAdapter {
    pub fn from_arg(args: &Args, index: usize) -> Result<Self> {
        let [hear, name] = LISTENER_METHODS;
        Ok(Self {
            hear: args.method(index, hear)?,
            name: args.method(index, name)?,
        })
    }
}

impl Listener for ListenerAdapter {
    fn hear(&self, item: &[u8]) {
        forward("Listener", &self.hear, vec![HostValue::bytes(item)]);
    }

    fn name(&self) -> String {
        forward("Listener", &self.name, vec![])
            .and_then(|value| value.as_str().map(str::to_string))
            .unwrap_or_default()
    }
}

/// Хранилище DM на стороне хоста
pub struct DmReceiverAdapter {
    receive: HostFunction,
    receive_text: HostFunction,
    receive_reply: HostFunction,
    receive_reaction: HostFunction,
    update_sent_status: HostFunction,
}

impl DmReceiverAdapter {
    pub fn from_arg(args: &Args, index: usize) -> Result<Self> {
        let [receive, text, reply, reaction, sent_status] = DM_RECEIVER_METHODS;
        Ok(Self {
            receive: args.method(index, receive)?,
            receive_text: args.method(index, text)?,
            receive_reply: args.method(index, reply)?,
            receive_reaction: args.method(index, reaction)?,
            update_sent_status: args.method(index, sent_status)?,
        })
    }

    /// Позиционные аргументы: (messageID, nickname, <специфичные>, partnerKey,
    /// senderKey, dmToken, codeset, timestamp, roundId, <специфичные>, status)
    fn call_with_envelope(
        f: &HostFunction,
        envelope: &DmEnvelope,
        leading: Vec<HostValue>,
        trailing: Vec<HostValue>,
    ) -> i64 {
        let mut args = vec![
            HostValue::bytes(&envelope.message_id),
            envelope.nickname.as_str().into(),
        ];
        args.extend(leading);
        args.extend([
            HostValue::bytes(&envelope.partner_key),
            HostValue::bytes(&envelope.sender_key),
            envelope.dm_token.into(),
            envelope.codeset.into(),
            envelope.timestamp.into(),
            envelope.round_id.into(),
        ]);
        args.extend(trailing);
        args.push(envelope.status.into());

        let assigned = forward("DMReceiver", f, args).and_then(|value| value.as_i64());
        if assigned.is_none() {
            tracing::warn!("DM receiver did not return a message UUID");
        }
        assigned.unwrap_or_default()
    }
}

impl DmReceiver for DmReceiverAdapter {
    fn receive(&self, envelope: &DmEnvelope, text: &[u8], message_type: i64) -> i64 {
        Self::call_with_envelope(
            &self.receive,
            envelope,
            vec![HostValue::bytes(text)],
            vec![message_type.into()],
        )
    }

    fn receive_text(&self, envelope: &DmEnvelope, text: &str) -> i64 {
        Self::call_with_envelope(&self.receive_text, envelope, vec![text.into()], vec![])
    }

    fn receive_reply(&self, envelope: &DmEnvelope, reply_to: &[u8], text: &str) -> i64 {
        Self::call_with_envelope(
            &self.receive_reply,
            envelope,
            vec![HostValue::bytes(reply_to), text.into()],
            vec![],
        )
    }

    fn receive_reaction(&self, envelope: &DmEnvelope, reaction_to: &[u8], reaction: &str) -> i64 {
        Self::call_with_envelope(
            &self.receive_reaction,
            envelope,
            vec![HostValue::bytes(reaction_to), reaction.into()],
            vec![],
        )
    }

    fn update_sent_status(
        &self,
        uuid: i64,
        message_id: &[u8],
        timestamp: i64,
        round_id: i64,
        status: i64,
    ) {
        forward(
            "DMReceiver",
            &self.update_sent_status,
            vec![
                uuid.into(),
                HostValue::bytes(message_id),
                timestamp.into(),
                round_id.into(),
                status.into(),
            ],
        );
    }
}
