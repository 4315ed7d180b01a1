// Таблица точек входа клиента сети

use super::callbacks::{client_error_reporter, health_callback};
use super::{bind, bind_async, job, AdapterContext, EntryPointTable};
use crate::bindings::Cmix;
use crate::host::HostValue;
use crate::utils::serialization::to_json_bytes;
use std::sync::Arc;

/// `id` - дескриптор клиента в реестре, его возвращает `GetID`
pub fn cmix_table(id: i64, cmix: Arc<dyn Cmix>, context: &AdapterContext) -> Arc<EntryPointTable> {
    let ctx = context.clone();

    EntryPointTable::builder("Cmix", context)
        .sync_entry("GetID", move |_| Ok(id.into()))
        .sync_entry("GetReceptionID", bind(&cmix, |c, _| Ok(c.get_reception_id().into())))
        .sync_entry(
            "EKVGet",
            bind(&cmix, |c, args| Ok(c.ekv_get(&args.string(0)?)?.into())),
        )
        .sync_entry(
            "EKVSet",
            bind(&cmix, |c, args| {
                let key = args.string(0)?;
                let value = args.bytes(1)?;
                c.ekv_set(&key, &value)?;
                Ok(HostValue::Undefined)
            }),
        )
        .async_entry(
            "MakeReceptionIdentity",
            bind_async(&cmix, |c, _| {
                Ok(job(move || Ok(c.make_reception_identity()?.into())))
            }),
        )
        .sync_entry(
            "StartNetworkFollower",
            bind(&cmix, |c, args| {
                c.start_network_follower(args.int(0)?)?;
                Ok(HostValue::Undefined)
            }),
        )
        .sync_entry(
            "StopNetworkFollower",
            bind(&cmix, |c, _| {
                c.stop_network_follower()?;
                Ok(HostValue::Undefined)
            }),
        )
        .async_entry(
            "WaitForNetwork",
            bind_async(&cmix, |c, args| {
                let timeout_ms = args.int(0)?;
                Ok(job(move || Ok(c.wait_for_network(timeout_ms).into())))
            }),
        )
        .sync_entry("ReadyToSend", bind(&cmix, |c, _| Ok(c.ready_to_send().into())))
        .sync_entry(
            "NetworkFollowerStatus",
            bind(&cmix, |c, _| Ok(c.network_follower_status().into())),
        )
        .sync_entry(
            "GetNodeRegistrationStatus",
            bind(&cmix, |c, _| {
                let report = c.get_node_registration_status()?;
                Ok(to_json_bytes(&report)?.into())
            }),
        )
        .sync_entry(
            "IsReady",
            bind(&cmix, |c, args| {
                let info = c.is_ready(args.float(0)?)?;
                Ok(to_json_bytes(&info)?.into())
            }),
        )
        .sync_entry(
            "PauseNodeRegistrations",
            bind(&cmix, |c, args| {
                c.pause_node_registrations(args.int(0)?)?;
                Ok(HostValue::Undefined)
            }),
        )
        .sync_entry(
            "ChangeNumberOfNodeRegistrations",
            bind(&cmix, |c, args| {
                let to_run = args.int(0)?;
                let timeout_ms = args.int(1)?;
                c.change_number_of_node_registrations(to_run, timeout_ms)?;
                Ok(HostValue::Undefined)
            }),
        )
        .sync_entry(
            "HasRunningProcessies",
            bind(&cmix, |c, _| Ok(c.has_running_processes().into())),
        )
        .sync_entry("IsHealthy", bind(&cmix, |c, _| Ok(c.is_healthy().into())))
        .sync_entry(
            "GetRunningProcesses",
            bind(&cmix, |c, _| {
                let processes = c.get_running_processes()?;
                Ok(to_json_bytes(&processes)?.into())
            }),
        )
        .sync_entry("AddHealthCallback", {
            let ctx = ctx.clone();
            bind(&cmix, move |c, args| {
                let callback = health_callback(args, 0, &ctx)?;
                Ok(c.add_health_callback(callback).into())
            })
        })
        .sync_entry(
            "RemoveHealthCallback",
            bind(&cmix, |c, args| {
                c.remove_health_callback(args.int(0)?);
                Ok(HostValue::Undefined)
            }),
        )
        .sync_entry(
            "RegisterClientErrorCallback",
            bind(&cmix, move |c, args| {
                let reporter = client_error_reporter(args, 0, &ctx)?;
                c.register_client_error_callback(reporter);
                Ok(HostValue::Undefined)
            }),
        )
        .build()
}
