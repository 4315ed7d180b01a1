// Менеджер фиктивного трафика

use super::{bind, AdapterContext, EntryPointTable};
use crate::bindings::DummyTraffic;
use crate::host::HostValue;
use std::sync::Arc;

pub fn dummy_traffic_table(
    dummy: Arc<dyn DummyTraffic>,
    context: &AdapterContext,
) -> Arc<EntryPointTable> {
    EntryPointTable::builder("DummyTraffic", context)
        .sync_entry(
            "Pause",
            bind(&dummy, |d, _| {
                d.pause()?;
                Ok(HostValue::Undefined)
            }),
        )
        .sync_entry(
            "Start",
            bind(&dummy, |d, _| {
                d.start()?;
                Ok(HostValue::Undefined)
            }),
        )
        .sync_entry("GetStatus", bind(&dummy, |d, _| Ok(d.get_status().into())))
        .build()
}
