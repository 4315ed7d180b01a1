// Таблица точек входа широковещательного канала

use super::callbacks::broadcast_listener;
use super::{bind, bind_async, job, AdapterContext, EntryPointTable};
use crate::bindings::Channel;
use crate::host::HostValue;
use crate::utils::serialization::to_json_bytes;
use std::sync::Arc;

pub fn channel_table(channel: Arc<dyn Channel>, context: &AdapterContext) -> Arc<EntryPointTable> {
    let ctx = context.clone();

    EntryPointTable::builder("Channel", context)
        .sync_entry(
            "Listen",
            bind(&channel, move |c, args| {
                let listener = broadcast_listener(args, 0, &ctx)?;
                c.listen(listener, args.int(1)?)?;
                Ok(HostValue::Undefined)
            }),
        )
        .async_entry(
            "Broadcast",
            bind_async(&channel, |c, args| {
                let payload = args.bytes(0)?;
                Ok(job(move || {
                    let report = c.broadcast(&payload)?;
                    Ok(to_json_bytes(&report)?.into())
                }))
            }),
        )
        .async_entry(
            "BroadcastAsymmetric",
            bind_async(&channel, |c, args| {
                let payload = args.bytes(0)?;
                let private_key = args.bytes(1)?;
                Ok(job(move || {
                    let report = c.broadcast_asymmetric(&payload, &private_key)?;
                    Ok(to_json_bytes(&report)?.into())
                }))
            }),
        )
        .sync_entry(
            "MaxPayloadSize",
            bind(&channel, |c, _| Ok(c.max_payload_size().into())),
        )
        .sync_entry(
            "MaxAsymmetricPayloadSize",
            bind(&channel, |c, _| Ok(c.max_asymmetric_payload_size().into())),
        )
        .sync_entry(
            "Get",
            bind(&channel, |c, _| Ok(to_json_bytes(&c.get()?)?.into())),
        )
        .sync_entry(
            "Stop",
            bind(&channel, |c, _| {
                c.stop();
                Ok(HostValue::Undefined)
            }),
        )
        .build()
}
