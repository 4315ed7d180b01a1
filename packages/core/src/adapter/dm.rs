// Таблица точек входа клиента личных сообщений.
// Отправка блокирует до выбора раунда, поэтому все Send* асинхронные.

use super::{bind, bind_async, job, AdapterContext, EntryPointTable};
use crate::bindings::DmClient;
use crate::host::HostValue;
use crate::utils::serialization::to_json_bytes;
use std::sync::Arc;

pub fn dm_client_table(dm: Arc<dyn DmClient>, context: &AdapterContext) -> Arc<EntryPointTable> {
    EntryPointTable::builder("DMClient", context)
        .sync_entry("GetPublicKey", bind(&dm, |d, _| Ok(d.get_public_key().into())))
        .sync_entry("GetToken", bind(&dm, |d, _| Ok(d.get_token().into())))
        .sync_entry("GetIdentity", bind(&dm, |d, _| Ok(d.get_identity().into())))
        .sync_entry(
            "ExportPrivateIdentity",
            bind(&dm, |d, args| {
                Ok(d.export_private_identity(&args.string(0)?)?.into())
            }),
        )
        .sync_entry("GetNickname", bind(&dm, |d, _| Ok(d.get_nickname()?.into())))
        .sync_entry(
            "SetNickname",
            bind(&dm, |d, args| {
                d.set_nickname(&args.string(0)?);
                Ok(HostValue::Undefined)
            }),
        )
        .sync_entry(
            "IsBlocked",
            bind(&dm, |d, args| Ok(d.is_blocked(&args.bytes(0)?).into())),
        )
        .sync_entry(
            "BlockSender",
            bind(&dm, |d, args| {
                d.block_sender(&args.bytes(0)?);
                Ok(HostValue::Undefined)
            }),
        )
        .sync_entry(
            "UnblockSender",
            bind(&dm, |d, args| {
                d.unblock_sender(&args.bytes(0)?);
                Ok(HostValue::Undefined)
            }),
        )
        .sync_entry(
            "GetBlockedSenders",
            bind(&dm, |d, _| Ok(to_json_bytes(&d.get_blocked_senders())?.into())),
        )
        .sync_entry(
            "GetDatabaseName",
            bind(&dm, |d, _| Ok(d.get_database_name()?.into())),
        )
        .async_entry(
            "SendText",
            bind_async(&dm, |d, args| {
                let partner_key = args.bytes(0)?;
                let partner_token = args.uint32(1)?;
                let message = args.string(2)?;
                let lease_ms = args.int(3)?;
                let params = args.bytes(4)?;
                Ok(job(move || {
                    let report =
                        d.send_text(&partner_key, partner_token, &message, lease_ms, &params)?;
                    Ok(to_json_bytes(&report)?.into())
                }))
            }),
        )
        .async_entry(
            "SendReply",
            bind_async(&dm, |d, args| {
                let partner_key = args.bytes(0)?;
                let partner_token = args.uint32(1)?;
                let message = args.string(2)?;
                let reply_to = args.bytes(3)?;
                let lease_ms = args.int(4)?;
                let params = args.bytes(5)?;
                Ok(job(move || {
                    let report = d.send_reply(
                        &partner_key,
                        partner_token,
                        &message,
                        &reply_to,
                        lease_ms,
                        &params,
                    )?;
                    Ok(to_json_bytes(&report)?.into())
                }))
            }),
        )
        .async_entry(
            "SendReaction",
            bind_async(&dm, |d, args| {
                let partner_key = args.bytes(0)?;
                let partner_token = args.uint32(1)?;
                let reaction = args.string(2)?;
                let reacts_to = args.bytes(3)?;
                let params = args.bytes(4)?;
                Ok(job(move || {
                    let report = d.send_reaction(
                        &partner_key,
                        partner_token,
                        &reaction,
                        &reacts_to,
                        &params,
                    )?;
                    Ok(to_json_bytes(&report)?.into())
                }))
            }),
        )
        .async_entry(
            "Send",
            bind_async(&dm, |d, args| {
                let partner_key = args.bytes(0)?;
                let partner_token = args.uint32(1)?;
                let message_type = args.int(2)?;
                let plaintext = args.bytes(3)?;
                let lease_ms = args.int(4)?;
                let params = args.bytes(5)?;
                Ok(job(move || {
                    let report = d.send(
                        &partner_key,
                        partner_token,
                        message_type,
                        &plaintext,
                        lease_ms,
                        &params,
                    )?;
                    Ok(to_json_bytes(&report)?.into())
                }))
            }),
        )
        .build()
}
