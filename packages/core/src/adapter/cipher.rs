// Шифр базы данных. ID из GetID принимает NewDMClient.

use super::{bind, AdapterContext, EntryPointTable};
use crate::bindings::DbCipher;
use crate::host::HostValue;
use std::sync::Arc;

pub fn cipher_table(
    id: i64,
    cipher: Arc<dyn DbCipher>,
    context: &AdapterContext,
) -> Arc<EntryPointTable> {
    EntryPointTable::builder("DbCipher", context)
        .sync_entry("GetID", move |_| Ok(id.into()))
        .sync_entry(
            "Encrypt",
            bind(&cipher, |c, args| Ok(c.encrypt(&args.bytes(0)?)?.into())),
        )
        .sync_entry(
            "Decrypt",
            bind(&cipher, |c, args| Ok(c.decrypt(&args.bytes(0)?)?.into())),
        )
        .sync_entry("MarshalJSON", bind(&cipher, |c, _| Ok(c.marshal_json()?.into())))
        .sync_entry(
            "UnmarshalJSON",
            bind(&cipher, |c, args| {
                c.unmarshal_json(&args.bytes(0)?)?;
                Ok(HostValue::Undefined)
            }),
        )
        .build()
}
