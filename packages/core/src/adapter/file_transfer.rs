// Таблицы точек входа передачи файлов и трекера частей

use super::callbacks::{received_progress_callback, sent_progress_callback};
use super::{bind, bind_async, job, AdapterContext, EntryPointTable};
use crate::bindings::{FilePartTracker, FileTransfer};
use crate::host::HostValue;
use std::sync::Arc;

pub fn file_transfer_table(
    transfer: Arc<dyn FileTransfer>,
    context: &AdapterContext,
) -> Arc<EntryPointTable> {
    let send_ctx = context.clone();
    let sent_ctx = context.clone();
    let received_ctx = context.clone();

    EntryPointTable::builder("FileTransfer", context)
        .async_entry(
            "Send",
            bind_async(&transfer, move |ft, args| {
                let file_send = args.bytes(0)?;
                let recipient_id = args.bytes(1)?;
                let retry = args.float(2)?;
                let progress = sent_progress_callback(args, 3, &send_ctx)?;
                let period_ms = args.int(4)?;
                Ok(job(move || {
                    let transfer_id =
                        ft.send(&file_send, &recipient_id, retry, progress, period_ms)?;
                    Ok(transfer_id.into())
                }))
            }),
        )
        .sync_entry(
            "Receive",
            bind(&transfer, |ft, args| Ok(ft.receive(&args.bytes(0)?)?.into())),
        )
        .sync_entry(
            "CloseSend",
            bind(&transfer, |ft, args| {
                ft.close_send(&args.bytes(0)?)?;
                Ok(HostValue::Undefined)
            }),
        )
        .sync_entry(
            "RegisterSentProgressCallback",
            bind(&transfer, move |ft, args| {
                let transfer_id = args.bytes(0)?;
                let progress = sent_progress_callback(args, 1, &sent_ctx)?;
                ft.register_sent_progress_callback(&transfer_id, progress, args.int(2)?)?;
                Ok(HostValue::Undefined)
            }),
        )
        .sync_entry(
            "RegisterReceivedProgressCallback",
            bind(&transfer, move |ft, args| {
                let transfer_id = args.bytes(0)?;
                let progress = received_progress_callback(args, 1, &received_ctx)?;
                ft.register_received_progress_callback(&transfer_id, progress, args.int(2)?)?;
                Ok(HostValue::Undefined)
            }),
        )
        .sync_entry(
            "MaxFileNameLen",
            bind(&transfer, |ft, _| Ok(ft.max_file_name_len().into())),
        )
        .sync_entry(
            "MaxFileTypeLen",
            bind(&transfer, |ft, _| Ok(ft.max_file_type_len().into())),
        )
        .sync_entry("MaxFileSize", bind(&transfer, |ft, _| Ok(ft.max_file_size().into())))
        .sync_entry(
            "MaxPreviewSize",
            bind(&transfer, |ft, _| Ok(ft.max_preview_size().into())),
        )
        .build()
}

/// Трекер передаётся хосту внутри callback-ов прогресса
pub fn file_part_tracker_table(
    tracker: Arc<dyn FilePartTracker>,
    context: &AdapterContext,
) -> Arc<EntryPointTable> {
    EntryPointTable::builder("FilePartTracker", context)
        .sync_entry(
            "GetPartStatus",
            bind(&tracker, |t, args| Ok(t.get_part_status(args.int(0)?).into())),
        )
        .sync_entry("GetNumParts", bind(&tracker, |t, _| Ok(t.get_num_parts().into())))
        .build()
}
