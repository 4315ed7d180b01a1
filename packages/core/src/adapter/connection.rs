// Таблица точек входа E2E соединения

use super::callbacks::ListenerAdapter;
use super::{bind, bind_async, job, AdapterContext, EntryPointTable};
use crate::bindings::Connection;
use crate::host::HostValue;
use crate::utils::serialization::to_json_bytes;
use std::sync::Arc;

pub fn connection_table(
    connection: Arc<dyn Connection>,
    context: &AdapterContext,
) -> Arc<EntryPointTable> {
    EntryPointTable::builder("Connection", context)
        .sync_entry(
            "GetPartner",
            bind(&connection, |c, _| Ok(c.get_partner().into())),
        )
        .async_entry(
            "SendE2E",
            bind_async(&connection, |c, args| {
                let message_type = args.int(0)?;
                let payload = args.bytes(1)?;
                Ok(job(move || {
                    let report = c.send_e2e(message_type, &payload)?;
                    Ok(to_json_bytes(&report)?.into())
                }))
            }),
        )
        .sync_entry(
            "Close",
            bind(&connection, |c, _| {
                c.close()?;
                Ok(HostValue::Undefined)
            }),
        )
        .sync_entry(
            "RegisterListener",
            bind(&connection, |c, args| {
                let message_type = args.int(0)?;
                let listener = ListenerAdapter::from_arg(args, 1)?;
                c.register_listener(message_type, Arc::new(listener))?;
                Ok(HostValue::Undefined)
            }),
        )
        .build()
}
