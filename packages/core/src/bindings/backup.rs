// Резервное копирование состояния клиента

use super::NativeResult;

pub trait Backup: Send + Sync {
    fn stop_backup(&self) -> NativeResult<()>;
    fn is_backup_running(&self) -> bool;
    fn add_json(&self, json: &str);
}

pub const OPERATIONS: &[&str] = &["StopBackup", "IsBackupRunning", "AddJson"];
