// Клиент сети: follower, здоровье сети, регистрация на узлах, EKV

use super::callbacks::{ClientErrorReporter, NetworkHealthCallback};
use super::reports::{IsReadyInfo, NodeRegistrationReport};
use super::NativeResult;
use std::sync::Arc;

pub trait Cmix: Send + Sync {
    fn get_reception_id(&self) -> Vec<u8>;

    fn ekv_get(&self, key: &str) -> NativeResult<Vec<u8>>;
    fn ekv_set(&self, key: &str, value: &[u8]) -> NativeResult<()>;

    /// Генерирует новую идентичность получателя. Долгая операция.
    fn make_reception_identity(&self) -> NativeResult<Vec<u8>>;

    fn start_network_follower(&self, timeout_ms: i64) -> NativeResult<()>;
    fn stop_network_follower(&self) -> NativeResult<()>;

    /// Блокирует, пока сеть не станет здоровой или не истечёт таймаут
    fn wait_for_network(&self, timeout_ms: i64) -> bool;
    fn ready_to_send(&self) -> bool;
    fn network_follower_status(&self) -> i64;

    fn get_node_registration_status(&self) -> NativeResult<NodeRegistrationReport>;
    fn is_ready(&self, percent_ready: f64) -> NativeResult<IsReadyInfo>;
    fn pause_node_registrations(&self, timeout_ms: i64) -> NativeResult<()>;
    fn change_number_of_node_registrations(&self, to_run: i64, timeout_ms: i64)
        -> NativeResult<()>;

    fn has_running_processes(&self) -> bool;
    fn is_healthy(&self) -> bool;
    fn get_running_processes(&self) -> NativeResult<Vec<String>>;

    fn add_health_callback(&self, callback: Arc<dyn NetworkHealthCallback>) -> i64;
    fn remove_health_callback(&self, id: i64);
    fn register_client_error_callback(&self, reporter: Arc<dyn ClientErrorReporter>);
}

pub const OPERATIONS: &[&str] = &[
    "GetReceptionID",
    "EKVGet",
    "EKVSet",
    "MakeReceptionIdentity",
    "StartNetworkFollower",
    "StopNetworkFollower",
    "WaitForNetwork",
    "ReadyToSend",
    "NetworkFollowerStatus",
    "GetNodeRegistrationStatus",
    "IsReady",
    "PauseNodeRegistrations",
    "ChangeNumberOfNodeRegistrations",
    "HasRunningProcessies",
    "IsHealthy",
    "GetRunningProcesses",
    "AddHealthCallback",
    "RemoveHealthCallback",
    "RegisterClientErrorCallback",
];
