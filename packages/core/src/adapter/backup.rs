// Резервное копирование

use super::{bind, AdapterContext, EntryPointTable};
use crate::bindings::Backup;
use crate::host::HostValue;
use std::sync::Arc;

pub fn backup_table(backup: Arc<dyn Backup>, context: &AdapterContext) -> Arc<EntryPointTable> {
    EntryPointTable::builder("Backup", context)
        .sync_entry(
            "StopBackup",
            bind(&backup, |b, _| {
                b.stop_backup()?;
                Ok(HostValue::Undefined)
            }),
        )
        .sync_entry(
            "IsBackupRunning",
            bind(&backup, |b, _| Ok(b.is_backup_running().into())),
        )
        .sync_entry(
            "AddJson",
            bind(&backup, |b, args| {
                b.add_json(&args.string(0)?);
                Ok(HostValue::Undefined)
            }),
        )
        .build()
}
