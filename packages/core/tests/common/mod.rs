//! Общие заглушки для интеграционных тестов моста.
//!
//! Все заглушки делят один `World`: он записывает имена вызванных операций
//! (в том виде, в котором их видит хост), последние переданные буферы и
//! захваченные callback-и, чтобы тест мог вызвать их от имени библиотеки.

#![allow(dead_code)]

use messenger_bridge::adapter::{EntryPointTable, Outcome};
use messenger_bridge::bindings::*;
use messenger_bridge::host::{HostFunction, HostValue, Settled, ThreadSpawner};
use messenger_bridge::{Bridge, Config, HostError};
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

pub const CHANNEL_MAX_PAYLOAD: i64 = 512;
pub const TRANSFER_ID: &[u8] = &[0xfe, 0xed];

#[derive(Default)]
pub struct World {
    calls: Mutex<Vec<String>>,
    failure: Mutex<Option<NativeError>>,
    payloads: Mutex<Vec<Vec<u8>>>,
    pub health: Mutex<Vec<Arc<dyn NetworkHealthCallback>>>,
    pub error_reporter: Mutex<Option<Arc<dyn ClientErrorReporter>>>,
    pub broadcast_listener: Mutex<Option<Arc<dyn BroadcastListener>>>,
    pub e2e_listener: Mutex<Option<Arc<dyn Listener>>>,
    pub receive_file: Mutex<Option<Arc<dyn ReceiveFileCallback>>>,
    pub received_progress: Mutex<Option<Arc<dyn FileTransferReceiveProgressCallback>>>,
    pub single_use: Mutex<Option<Arc<dyn SingleUseCallback>>>,
    pub single_use_response: Mutex<Option<Arc<dyn SingleUseResponse>>>,
    pub dm_receiver: Mutex<Option<Arc<dyn DmReceiver>>>,
    pub dm_has_cipher: Mutex<Option<bool>>,
    pub backup_update: Mutex<Option<Arc<dyn UpdateBackupCallback>>>,
}

impl World {
    pub fn record(&self, operation: &str) {
        self.calls.lock().unwrap().push(operation.to_string());
    }

    /// Записывает вызов и возвращает настроенную ошибку, если она есть
    pub fn check(&self, operation: &str) -> NativeResult<()> {
        self.record(operation);
        match self.failure.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    pub fn fail_with(&self, err: NativeError) {
        *self.failure.lock().unwrap() = Some(err);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> Option<String> {
        self.calls.lock().unwrap().last().cloned()
    }

    pub fn record_payload(&self, payload: &[u8]) {
        self.payloads.lock().unwrap().push(payload.to_vec());
    }

    pub fn last_payload(&self) -> Option<Vec<u8>> {
        self.payloads.lock().unwrap().last().cloned()
    }
}

/// Достаёт захваченный callback
pub fn captured<T: Clone>(slot: &Mutex<Option<T>>) -> T {
    slot.lock().unwrap().clone().expect("callback was not captured")
}

pub struct MockBindings {
    world: Arc<World>,
}

impl MockBindings {
    pub fn new(world: Arc<World>) -> Self {
        Self { world }
    }
}

impl Bindings for MockBindings {
    fn new_cmix(&self, _ndf: &str, _dir: &str, password: &[u8], _code: &str) -> NativeResult<()> {
        self.world.record_payload(password);
        self.world.check("NewCmix")
    }

    fn load_cmix(
        &self,
        _dir: &str,
        _password: &[u8],
        _params: &[u8],
    ) -> NativeResult<Arc<dyn Cmix>> {
        self.world.check("LoadCmix")?;
        Ok(Arc::new(MockCmix::new(self.world.clone())))
    }

    fn get_version(&self) -> String {
        self.world.record("GetVersion");
        "4.7.1".to_string()
    }

    fn get_git_version(&self) -> String {
        self.world.record("GetGitVersion");
        "0c1f2e3".to_string()
    }

    fn get_dependencies(&self) -> String {
        self.world.record("GetDependencies");
        "module gitlab.com/elixxir/client".to_string()
    }

    fn get_default_cmix_params(&self) -> NativeResult<Vec<u8>> {
        self.world.check("GetDefaultCMixParams")?;
        Ok(br#"{"Network":{}}"#.to_vec())
    }

    fn get_default_e2e_params(&self) -> NativeResult<Vec<u8>> {
        self.world.check("GetDefaultE2EParams")?;
        Ok(br#"{"Base":{}}"#.to_vec())
    }

    fn get_default_file_transfer_params(&self) -> NativeResult<Vec<u8>> {
        self.world.check("GetDefaultFileTransferParams")?;
        Ok(br#"{"MaxThroughput":150000}"#.to_vec())
    }

    fn get_default_single_use_params(&self) -> NativeResult<Vec<u8>> {
        self.world.check("GetDefaultSingleUseParams")?;
        Ok(br#"{"RequestTimeout":30000}"#.to_vec())
    }

    fn generate_secret(&self, num_bytes: usize) -> Vec<u8> {
        self.world.record("GenerateSecret");
        vec![0xab; num_bytes]
    }

    fn log_level(&self, _level: i64) -> NativeResult<()> {
        self.world.check("LogLevel")
    }

    fn new_broadcast_channel(
        &self,
        _cmix: &Arc<dyn Cmix>,
        definition: &[u8],
    ) -> NativeResult<Arc<dyn Channel>> {
        self.world.record_payload(definition);
        self.world.check("NewBroadcastChannel")?;
        Ok(Arc::new(MockChannel { world: self.world.clone() }))
    }

    fn new_database_cipher(
        &self,
        _cmix: &Arc<dyn Cmix>,
        password: &[u8],
        _block_size: usize,
    ) -> NativeResult<Arc<dyn DbCipher>> {
        self.world.check("NewDatabaseCipher")?;
        Ok(Arc::new(MockCipher {
            world: self.world.clone(),
            key: password.first().copied().unwrap_or(0x5a),
        }))
    }

    fn init_file_transfer(
        &self,
        _cmix: &Arc<dyn Cmix>,
        receive: Arc<dyn ReceiveFileCallback>,
        _params: &[u8],
    ) -> NativeResult<Arc<dyn FileTransfer>> {
        self.world.check("InitFileTransfer")?;
        *self.world.receive_file.lock().unwrap() = Some(receive);
        Ok(Arc::new(MockFileTransfer { world: self.world.clone() }))
    }

    fn new_dm_client(
        &self,
        _cmix: &Arc<dyn Cmix>,
        cipher: Option<Arc<dyn DbCipher>>,
        _identity: &[u8],
        receiver: Arc<dyn DmReceiver>,
    ) -> NativeResult<Arc<dyn DmClient>> {
        self.world.check("NewDMClient")?;
        *self.world.dm_has_cipher.lock().unwrap() = Some(cipher.is_some());
        *self.world.dm_receiver.lock().unwrap() = Some(receiver);
        Ok(Arc::new(MockDm {
            world: self.world.clone(),
            nickname: Mutex::new(String::new()),
            blocked: Mutex::new(Vec::new()),
        }))
    }

    fn connect(
        &self,
        _cmix: &Arc<dyn Cmix>,
        contact: &[u8],
        _params: &[u8],
    ) -> NativeResult<Arc<dyn Connection>> {
        self.world.check("Connect")?;
        Ok(Arc::new(MockConnection {
            world: self.world.clone(),
            partner: contact.to_vec(),
        }))
    }

    fn transmit_single_use(
        &self,
        _cmix: &Arc<dyn Cmix>,
        recipient: &[u8],
        _tag: &str,
        payload: &[u8],
        _params: &[u8],
        response: Arc<dyn SingleUseResponse>,
    ) -> NativeResult<SingleUseSendReport> {
        self.world.record_payload(payload);
        self.world.check("TransmitSingleUse")?;
        *self.world.single_use_response.lock().unwrap() = Some(response);
        Ok(SingleUseSendReport {
            rounds: vec![7, 8],
            ephemeral_id: 42,
            reception_id: recipient.to_vec(),
        })
    }

    fn listen_single_use(
        &self,
        _cmix: &Arc<dyn Cmix>,
        _tag: &str,
        callback: Arc<dyn SingleUseCallback>,
    ) -> NativeResult<Arc<dyn Stopper>> {
        self.world.check("Listen")?;
        *self.world.single_use.lock().unwrap() = Some(callback);
        Ok(Arc::new(MockStopper { world: self.world.clone() }))
    }

    fn new_dummy_traffic_manager(
        &self,
        _cmix: &Arc<dyn Cmix>,
        _max_num_messages: i64,
        _avg_send_delta_ms: i64,
        _random_range_ms: i64,
    ) -> NativeResult<Arc<dyn DummyTraffic>> {
        self.world.check("NewDummyTrafficManager")?;
        Ok(Arc::new(MockDummy { world: self.world.clone() }))
    }

    fn initialize_backup(
        &self,
        _cmix: &Arc<dyn Cmix>,
        _password: &str,
        update: Arc<dyn UpdateBackupCallback>,
    ) -> NativeResult<Arc<dyn Backup>> {
        self.world.check("InitializeBackup")?;
        *self.world.backup_update.lock().unwrap() = Some(update);
        Ok(Arc::new(MockBackup { world: self.world.clone() }))
    }
}

pub struct MockCmix {
    world: Arc<World>,
    ekv: Mutex<HashMap<String, Vec<u8>>>,
    next_health_id: AtomicI64,
}

impl MockCmix {
    pub fn new(world: Arc<World>) -> Self {
        Self {
            world,
            ekv: Mutex::new(HashMap::new()),
            next_health_id: AtomicI64::new(1),
        }
    }
}

impl Cmix for MockCmix {
    fn get_reception_id(&self) -> Vec<u8> {
        self.world.record("GetReceptionID");
        vec![1; 33]
    }

    fn ekv_get(&self, key: &str) -> NativeResult<Vec<u8>> {
        self.world.check("EKVGet")?;
        self.ekv
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .ok_or_else(|| NativeError::new(format!("object not found: {key}")))
    }

    fn ekv_set(&self, key: &str, value: &[u8]) -> NativeResult<()> {
        self.world.check("EKVSet")?;
        self.ekv.lock().unwrap().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn make_reception_identity(&self) -> NativeResult<Vec<u8>> {
        self.world.check("MakeReceptionIdentity")?;
        Ok(br#"{"ID":"AQ=="}"#.to_vec())
    }

    fn start_network_follower(&self, _timeout_ms: i64) -> NativeResult<()> {
        self.world.check("StartNetworkFollower")
    }

    fn stop_network_follower(&self) -> NativeResult<()> {
        self.world.check("StopNetworkFollower")
    }

    fn wait_for_network(&self, timeout_ms: i64) -> bool {
        self.world.record("WaitForNetwork");
        timeout_ms > 0
    }

    fn ready_to_send(&self) -> bool {
        self.world.record("ReadyToSend");
        true
    }

    fn network_follower_status(&self) -> i64 {
        self.world.record("NetworkFollowerStatus");
        2000
    }

    fn get_node_registration_status(&self) -> NativeResult<NodeRegistrationReport> {
        self.world.check("GetNodeRegistrationStatus")?;
        Ok(NodeRegistrationReport {
            number_of_nodes_registered: 3,
            number_of_nodes: 5,
        })
    }

    fn is_ready(&self, percent_ready: f64) -> NativeResult<IsReadyInfo> {
        self.world.check("IsReady")?;
        Ok(IsReadyInfo {
            is_ready: percent_ready <= 0.6,
            how_close: 0.6,
        })
    }

    fn pause_node_registrations(&self, _timeout_ms: i64) -> NativeResult<()> {
        self.world.check("PauseNodeRegistrations")
    }

    fn change_number_of_node_registrations(
        &self,
        _to_run: i64,
        _timeout_ms: i64,
    ) -> NativeResult<()> {
        self.world.check("ChangeNumberOfNodeRegistrations")
    }

    fn has_running_processes(&self) -> bool {
        self.world.record("HasRunningProcessies");
        false
    }

    fn is_healthy(&self) -> bool {
        self.world.record("IsHealthy");
        true
    }

    fn get_running_processes(&self) -> NativeResult<Vec<String>> {
        self.world.check("GetRunningProcesses")?;
        Ok(vec!["NetworkFollower".to_string()])
    }

    fn add_health_callback(&self, callback: Arc<dyn NetworkHealthCallback>) -> i64 {
        self.world.record("AddHealthCallback");
        self.world.health.lock().unwrap().push(callback);
        self.next_health_id.fetch_add(1, Ordering::Relaxed)
    }

    fn remove_health_callback(&self, _id: i64) {
        self.world.record("RemoveHealthCallback");
    }

    fn register_client_error_callback(&self, reporter: Arc<dyn ClientErrorReporter>) {
        self.world.record("RegisterClientErrorCallback");
        *self.world.error_reporter.lock().unwrap() = Some(reporter);
    }
}

pub struct MockChannel {
    world: Arc<World>,
}

impl Channel for MockChannel {
    fn listen(&self, listener: Arc<dyn BroadcastListener>, _method: i64) -> NativeResult<()> {
        self.world.check("Listen")?;
        *self.world.broadcast_listener.lock().unwrap() = Some(listener);
        Ok(())
    }

    fn broadcast(&self, payload: &[u8]) -> NativeResult<BroadcastReport> {
        self.world.record_payload(payload);
        self.world.check("Broadcast")?;
        if payload.len() as i64 > CHANNEL_MAX_PAYLOAD {
            return Err(NativeError::new("payload too large"));
        }
        Ok(BroadcastReport {
            rounds: vec![100],
            ephemeral_id: -3,
        })
    }

    fn broadcast_asymmetric(
        &self,
        payload: &[u8],
        _private_key: &[u8],
    ) -> NativeResult<BroadcastReport> {
        self.world.record_payload(payload);
        self.world.check("BroadcastAsymmetric")?;
        Ok(BroadcastReport {
            rounds: vec![101],
            ephemeral_id: -4,
        })
    }

    fn max_payload_size(&self) -> i64 {
        self.world.record("MaxPayloadSize");
        CHANNEL_MAX_PAYLOAD
    }

    fn max_asymmetric_payload_size(&self) -> i64 {
        self.world.record("MaxAsymmetricPayloadSize");
        CHANNEL_MAX_PAYLOAD / 2
    }

    fn get(&self) -> NativeResult<ChannelDefinition> {
        self.world.check("Get")?;
        Ok(ChannelDefinition {
            name: "general".to_string(),
            description: "test channel".to_string(),
            salt: vec![1, 2],
            public_key: vec![3, 4],
            max_payload_size: CHANNEL_MAX_PAYLOAD,
        })
    }

    fn stop(&self) {
        self.world.record("Stop");
    }
}

pub struct MockCipher {
    world: Arc<World>,
    key: u8,
}

impl DbCipher for MockCipher {
    fn encrypt(&self, plaintext: &[u8]) -> NativeResult<Vec<u8>> {
        self.world.check("Encrypt")?;
        Ok(plaintext.iter().map(|b| b ^ self.key).collect())
    }

    fn decrypt(&self, ciphertext: &[u8]) -> NativeResult<Vec<u8>> {
        self.world.check("Decrypt")?;
        Ok(ciphertext.iter().map(|b| b ^ self.key).collect())
    }

    fn marshal_json(&self) -> NativeResult<Vec<u8>> {
        self.world.check("MarshalJSON")?;
        Ok(format!(r#"{{"Key":{}}}"#, self.key).into_bytes())
    }

    fn unmarshal_json(&self, data: &[u8]) -> NativeResult<()> {
        self.world.record_payload(data);
        self.world.check("UnmarshalJSON")
    }
}

pub struct MockTracker {
    parts: i64,
}

impl FilePartTracker for MockTracker {
    fn get_part_status(&self, part_num: i64) -> i64 {
        if part_num < self.parts {
            3
        } else {
            0
        }
    }

    fn get_num_parts(&self) -> i64 {
        self.parts
    }
}

pub struct MockFileTransfer {
    world: Arc<World>,
}

impl FileTransfer for MockFileTransfer {
    /// Первый отчёт о прогрессе приходит до возврата из `send`
    fn send(
        &self,
        file_send: &[u8],
        _recipient_id: &[u8],
        _retry: f64,
        progress: Arc<dyn FileTransferSentProgressCallback>,
        _period_ms: i64,
    ) -> NativeResult<Vec<u8>> {
        self.world.record_payload(file_send);
        let failure = self.world.check("Send").err();
        let parts = ((file_send.len() + 63) / 64) as u32;
        let report = FileProgress {
            transfer_id: TRANSFER_ID.to_vec(),
            completed: parts == 0 && failure.is_none(),
            transmitted: 0,
            total: parts,
        };
        let tracker = Arc::new(MockTracker { parts: i64::from(parts) });
        progress.callback(&report, tracker, failure.as_ref());
        match failure {
            Some(err) => Err(err),
            None => Ok(TRANSFER_ID.to_vec()),
        }
    }

    fn receive(&self, transfer_id: &[u8]) -> NativeResult<Vec<u8>> {
        self.world.check("Receive")?;
        Ok([b"file:".as_slice(), transfer_id].concat())
    }

    fn close_send(&self, _transfer_id: &[u8]) -> NativeResult<()> {
        self.world.check("CloseSend")
    }

    fn register_sent_progress_callback(
        &self,
        _transfer_id: &[u8],
        _progress: Arc<dyn FileTransferSentProgressCallback>,
        _period_ms: i64,
    ) -> NativeResult<()> {
        self.world.check("RegisterSentProgressCallback")
    }

    fn register_received_progress_callback(
        &self,
        _transfer_id: &[u8],
        progress: Arc<dyn FileTransferReceiveProgressCallback>,
        _period_ms: i64,
    ) -> NativeResult<()> {
        self.world.check("RegisterReceivedProgressCallback")?;
        *self.world.received_progress.lock().unwrap() = Some(progress);
        Ok(())
    }

    fn max_file_name_len(&self) -> i64 {
        self.world.record("MaxFileNameLen");
        48
    }

    fn max_file_type_len(&self) -> i64 {
        self.world.record("MaxFileTypeLen");
        8
    }

    fn max_file_size(&self) -> i64 {
        self.world.record("MaxFileSize");
        250_000
    }

    fn max_preview_size(&self) -> i64 {
        self.world.record("MaxPreviewSize");
        4096
    }
}

pub struct MockDm {
    world: Arc<World>,
    nickname: Mutex<String>,
    blocked: Mutex<Vec<Vec<u8>>>,
}

impl MockDm {
    fn report(&self, operation: &str, partner_key: &[u8]) -> NativeResult<DmSendReport> {
        self.world.record_payload(partner_key);
        self.world.check(operation)?;
        Ok(DmSendReport {
            message_id: vec![9, 9, 9],
            rounds: vec![55],
            ephemeral_id: 12,
        })
    }
}

impl DmClient for MockDm {
    fn get_public_key(&self) -> Vec<u8> {
        self.world.record("GetPublicKey");
        vec![0x11; 32]
    }

    fn get_token(&self) -> u32 {
        self.world.record("GetToken");
        u32::MAX
    }

    fn get_identity(&self) -> Vec<u8> {
        self.world.record("GetIdentity");
        br#"{"PubKey":"EQ=="}"#.to_vec()
    }

    fn export_private_identity(&self, password: &str) -> NativeResult<Vec<u8>> {
        self.world.check("ExportPrivateIdentity")?;
        Ok(format!("sealed:{password}").into_bytes())
    }

    fn get_nickname(&self) -> NativeResult<String> {
        self.world.check("GetNickname")?;
        let nickname = self.nickname.lock().unwrap().clone();
        if nickname.is_empty() {
            return Err(NativeError::new("no nickname set"));
        }
        Ok(nickname)
    }

    fn set_nickname(&self, nickname: &str) {
        self.world.record("SetNickname");
        *self.nickname.lock().unwrap() = nickname.to_string();
    }

    fn is_blocked(&self, sender_key: &[u8]) -> bool {
        self.world.record("IsBlocked");
        self.blocked.lock().unwrap().iter().any(|k| k == sender_key)
    }

    fn block_sender(&self, sender_key: &[u8]) {
        self.world.record("BlockSender");
        self.blocked.lock().unwrap().push(sender_key.to_vec());
    }

    fn unblock_sender(&self, sender_key: &[u8]) {
        self.world.record("UnblockSender");
        self.blocked.lock().unwrap().retain(|k| k != sender_key);
    }

    fn get_blocked_senders(&self) -> BlockedSenders {
        self.world.record("GetBlockedSenders");
        BlockedSenders(self.blocked.lock().unwrap().clone())
    }

    fn get_database_name(&self) -> NativeResult<String> {
        self.world.check("GetDatabaseName")?;
        Ok("dm-store".to_string())
    }

    fn send_text(
        &self,
        partner_key: &[u8],
        _token: u32,
        _message: &str,
        _lease_ms: i64,
        _params: &[u8],
    ) -> NativeResult<DmSendReport> {
        self.report("SendText", partner_key)
    }

    fn send_reply(
        &self,
        partner_key: &[u8],
        _token: u32,
        _message: &str,
        _reply_to: &[u8],
        _lease_ms: i64,
        _params: &[u8],
    ) -> NativeResult<DmSendReport> {
        self.report("SendReply", partner_key)
    }

    fn send_reaction(
        &self,
        partner_key: &[u8],
        _token: u32,
        _reaction: &str,
        _reacts_to: &[u8],
        _params: &[u8],
    ) -> NativeResult<DmSendReport> {
        self.report("SendReaction", partner_key)
    }

    fn send(
        &self,
        partner_key: &[u8],
        _token: u32,
        _message_type: i64,
        _plaintext: &[u8],
        _lease_ms: i64,
        _params: &[u8],
    ) -> NativeResult<DmSendReport> {
        self.report("Send", partner_key)
    }
}

pub struct MockConnection {
    world: Arc<World>,
    partner: Vec<u8>,
}

impl Connection for MockConnection {
    fn get_partner(&self) -> Vec<u8> {
        self.world.record("GetPartner");
        self.partner.clone()
    }

    fn send_e2e(&self, _message_type: i64, payload: &[u8]) -> NativeResult<E2eSendReport> {
        self.world.record_payload(payload);
        self.world.check("SendE2E")?;
        Ok(E2eSendReport {
            rounds: vec![1, 2, 3],
            message_id: vec![0xaa; 4],
            timestamp: 1_700_000_000,
            key_residue: vec![0xbb; 4],
        })
    }

    fn close(&self) -> NativeResult<()> {
        self.world.check("Close")
    }

    fn register_listener(
        &self,
        _message_type: i64,
        listener: Arc<dyn Listener>,
    ) -> NativeResult<()> {
        self.world.check("RegisterListener")?;
        *self.world.e2e_listener.lock().unwrap() = Some(listener);
        Ok(())
    }
}

pub struct MockStopper {
    world: Arc<World>,
}

impl Stopper for MockStopper {
    fn stop(&self) {
        self.world.record("Stop");
    }
}

pub struct MockDummy {
    world: Arc<World>,
}

impl DummyTraffic for MockDummy {
    fn pause(&self) -> NativeResult<()> {
        self.world.check("Pause")
    }

    fn start(&self) -> NativeResult<()> {
        self.world.check("Start")
    }

    fn get_status(&self) -> bool {
        self.world.record("GetStatus");
        true
    }
}

pub struct MockBackup {
    world: Arc<World>,
}

impl Backup for MockBackup {
    fn stop_backup(&self) -> NativeResult<()> {
        self.world.check("StopBackup")
    }

    fn is_backup_running(&self) -> bool {
        self.world.record("IsBackupRunning");
        true
    }

    fn add_json(&self, json: &str) {
        self.world.record_payload(json.as_bytes());
        self.world.record("AddJson");
    }
}

pub fn setup() -> (Bridge, Arc<World>) {
    setup_with(&Config::default())
}

pub fn setup_with(config: &Config) -> (Bridge, Arc<World>) {
    let world = Arc::new(World::default());
    let bridge = Bridge::with_spawner(
        Arc::new(MockBindings::new(world.clone())),
        config,
        Arc::new(ThreadSpawner::new("bridge-test")),
    );
    (bridge, world)
}

/// Вызов точки входа с ожиданием промиса, если она асинхронная
pub async fn call(table: &Arc<EntryPointTable>, name: &str, args: Vec<HostValue>) -> Settled {
    match table.invoke(name, args) {
        Ok(Outcome::Ready(value)) => Ok(value),
        Ok(Outcome::Pending(promise)) => promise.await,
        Err(err) => Err(err),
    }
}

pub fn call_sync(
    table: &Arc<EntryPointTable>,
    name: &str,
    args: Vec<HostValue>,
) -> Result<HostValue, HostError> {
    table
        .invoke(name, args)
        .map(|outcome| outcome.ready().expect("entry point is not synchronous"))
}

pub fn table(value: HostValue) -> Arc<EntryPointTable> {
    value.as_table().cloned().expect("expected an entry-point table")
}

/// Загружает клиента и возвращает его таблицу и ID в реестре
pub async fn load_cmix(bridge: &Bridge) -> (Arc<EntryPointTable>, i64) {
    let module = bridge.module_table();
    let value = call(
        &module,
        "LoadCmix",
        vec!["/tmp/state".into(), HostValue::bytes(b"pw"), HostValue::bytes(b"{}")],
    )
    .await
    .expect("LoadCmix failed");
    let cmix = table(value);
    let id = call_sync(&cmix, "GetID", vec![]).unwrap().as_i64().unwrap();
    (cmix, id)
}

pub type CallLog = Arc<Mutex<Vec<Vec<HostValue>>>>;

/// Функция хоста, которая запоминает аргументы каждого вызова
pub fn recording_function() -> (HostFunction, CallLog) {
    returning_function(HostValue::Undefined)
}

pub fn returning_function(result: HostValue) -> (HostFunction, CallLog) {
    let log: CallLog = Arc::default();
    let sink = log.clone();
    let f = HostFunction::new(move |args| {
        sink.lock().unwrap().push(args);
        Ok(result.clone())
    });
    (f, log)
}

pub fn throwing_function(message: &'static str) -> HostFunction {
    HostFunction::new(move |_| Err(HostError::new(messenger_bridge::ErrorKind::Internal, message)))
}

pub fn object(methods: Vec<(&str, HostFunction)>) -> HostValue {
    let fields: BTreeMap<String, HostValue> = methods
        .into_iter()
        .map(|(name, f)| (name.to_string(), HostValue::Function(f)))
        .collect();
    HostValue::Object(fields)
}

/// Объект с методами хранилища DM. Каждый метод receive* возвращает `uuid`.
pub fn dm_receiver_object(uuid: i64) -> (HostValue, CallLog) {
    let (receive, log) = returning_function(uuid.into());
    let methods = vec![
        ("Receive", receive.clone()),
        ("ReceiveText", receive.clone()),
        ("ReceiveReply", receive.clone()),
        ("ReceiveReaction", receive.clone()),
        ("UpdateSentStatus", receive),
    ];
    (object(methods), log)
}
