// Stopper слушателя одноразовых запросов

use super::{bind, AdapterContext, EntryPointTable};
use crate::bindings::Stopper;
use crate::host::HostValue;
use std::sync::Arc;

pub fn stopper_table(stopper: Arc<dyn Stopper>, context: &AdapterContext) -> Arc<EntryPointTable> {
    EntryPointTable::builder("Stopper", context)
        .sync_entry(
            "Stop",
            bind(&stopper, |s, _| {
                s.stop();
                Ok(HostValue::Undefined)
            }),
        )
        .build()
}
