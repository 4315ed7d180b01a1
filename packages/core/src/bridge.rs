//! Корневой объект моста и таблица функций уровня модуля.

use crate::adapter::backup::backup_table;
use crate::adapter::callbacks::{
    receive_file_callback, single_use_callback, single_use_response, update_backup_callback,
    DmReceiverAdapter,
};
use crate::adapter::channel::channel_table;
use crate::adapter::cipher::cipher_table;
use crate::adapter::cmix::cmix_table;
use crate::adapter::connection::connection_table;
use crate::adapter::dm::dm_client_table;
use crate::adapter::dummy::dummy_traffic_table;
use crate::adapter::file_transfer::file_transfer_table;
use crate::adapter::single_use::stopper_table;
use crate::adapter::{bind, job, AdapterContext, EntryPointTable};
use crate::bindings::Bindings;
use crate::config::Config;
use crate::error::HostError;
use crate::host::{default_spawner, HostValue, Spawn};
use crate::registry::Registry;
use crate::utils::serialization::to_json_bytes;
use std::sync::Arc;

/// Значение `cipherId`, означающее "без шифра"
pub const NO_CIPHER: i64 = -1;

pub struct Bridge {
    bindings: Arc<dyn Bindings>,
    registry: Arc<Registry>,
    context: AdapterContext,
}

impl Bridge {
    pub fn new(bindings: Arc<dyn Bindings>, config: &Config) -> Self {
        Self::with_spawner(bindings, config, default_spawner(&config.worker_thread_name))
    }

    pub fn with_spawner(
        bindings: Arc<dyn Bindings>,
        config: &Config,
        spawner: Arc<dyn Spawn>,
    ) -> Self {
        Self {
            bindings,
            registry: Arc::new(Registry::new()),
            context: AdapterContext::new(spawner, config.api_version),
        }
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    pub fn context(&self) -> &AdapterContext {
        &self.context
    }

    /// Убирает клиент сети из реестра. Уже выданные таблицы продолжают
    /// работать, новые обращения по этому ID получают `NotFound`.
    pub fn release_cmix(&self, id: i64) -> Result<(), HostError> {
        self.registry
            .cmix
            .remove(id)
            .map(|_| ())
            .map_err(|e| self.context.host_error(e))
    }

    pub fn release_cipher(&self, id: i64) -> Result<(), HostError> {
        self.registry
            .ciphers
            .remove(id)
            .map(|_| ())
            .map_err(|e| self.context.host_error(e))
    }

    /// Функции, которые хост видит на глобальном уровне
    pub fn module_table(&self) -> Arc<EntryPointTable> {
        let b = &self.bindings;
        let registry = &self.registry;
        let ctx = &self.context;

        EntryPointTable::builder("Bindings", ctx)
            .async_entry("NewCmix", {
                let b = b.clone();
                move |args| {
                    let ndf_json = args.string(0)?;
                    let storage_dir = args.string(1)?;
                    let password = args.bytes(2)?;
                    let registration_code = args.string(3)?;
                    let b = b.clone();
                    Ok(job(move || {
                        b.new_cmix(&ndf_json, &storage_dir, &password, &registration_code)?;
                        Ok(HostValue::Undefined)
                    }))
                }
            })
            .async_entry("LoadCmix", {
                let b = b.clone();
                let registry = registry.clone();
                let ctx = ctx.clone();
                move |args| {
                    let storage_dir = args.string(0)?;
                    let password = args.bytes(1)?;
                    let params = args.bytes(2)?;
                    let (b, registry, ctx) = (b.clone(), registry.clone(), ctx.clone());
                    Ok(job(move || {
                        let cmix = b.load_cmix(&storage_dir, &password, &params)?;
                        let id = registry.cmix.insert(cmix.clone())?;
                        Ok(cmix_table(id, cmix, &ctx).into())
                    }))
                }
            })
            .sync_entry("GetVersion", bind(b, |b, _| Ok(b.get_version().into())))
            .sync_entry("GetGitVersion", bind(b, |b, _| Ok(b.get_git_version().into())))
            .sync_entry("GetDependencies", bind(b, |b, _| Ok(b.get_dependencies().into())))
            .sync_entry(
                "GetDefaultCMixParams",
                bind(b, |b, _| Ok(b.get_default_cmix_params()?.into())),
            )
            .sync_entry(
                "GetDefaultE2EParams",
                bind(b, |b, _| Ok(b.get_default_e2e_params()?.into())),
            )
            .sync_entry(
                "GetDefaultFileTransferParams",
                bind(b, |b, _| Ok(b.get_default_file_transfer_params()?.into())),
            )
            .sync_entry(
                "GetDefaultSingleUseParams",
                bind(b, |b, _| Ok(b.get_default_single_use_params()?.into())),
            )
            .sync_entry(
                "GenerateSecret",
                bind(b, |b, args| Ok(b.generate_secret(args.usize(0)?).into())),
            )
            .sync_entry(
                "LogLevel",
                bind(b, |b, args| {
                    b.log_level(args.int(0)?)?;
                    Ok(HostValue::Undefined)
                }),
            )
            .sync_entry("NewBroadcastChannel", {
                let (registry, ctx) = (registry.clone(), ctx.clone());
                bind(b, move |b, args| {
                    let cmix = registry.cmix.get(args.int(0)?)?;
                    let definition = args.bytes(1)?;
                    let channel = b.new_broadcast_channel(&cmix, &definition)?;
                    Ok(channel_table(channel, &ctx).into())
                })
            })
            .sync_entry("NewDatabaseCipher", {
                let (registry, ctx) = (registry.clone(), ctx.clone());
                bind(b, move |b, args| {
                    let cmix = registry.cmix.get(args.int(0)?)?;
                    let password = args.bytes(1)?;
                    let block_size = args.usize(2)?;
                    let cipher = b.new_database_cipher(&cmix, &password, block_size)?;
                    let id = registry.ciphers.insert(cipher.clone())?;
                    Ok(cipher_table(id, cipher, &ctx).into())
                })
            })
            .sync_entry("InitFileTransfer", {
                let (registry, ctx) = (registry.clone(), ctx.clone());
                bind(b, move |b, args| {
                    let cmix = registry.cmix.get(args.int(0)?)?;
                    let receive = receive_file_callback(args, 1, &ctx)?;
                    let params = args.bytes(2)?;
                    let transfer = b.init_file_transfer(&cmix, receive, &params)?;
                    Ok(file_transfer_table(transfer, &ctx).into())
                })
            })
            .sync_entry("NewDMClient", {
                let (registry, ctx) = (registry.clone(), ctx.clone());
                bind(b, move |b, args| {
                    let cmix = registry.cmix.get(args.int(0)?)?;
                    let cipher = match args.int(1)? {
                        NO_CIPHER => None,
                        id => Some(registry.ciphers.get(id)?),
                    };
                    let identity = args.bytes(2)?;
                    let receiver = Arc::new(DmReceiverAdapter::from_arg(args, 3)?);
                    let dm = b.new_dm_client(&cmix, cipher, &identity, receiver)?;
                    Ok(dm_client_table(dm, &ctx).into())
                })
            })
            .async_entry("Connect", {
                let (b, registry, ctx) = (b.clone(), registry.clone(), ctx.clone());
                move |args| {
                    let cmix = registry.cmix.get(args.int(0)?)?;
                    let contact = args.bytes(1)?;
                    let params = args.bytes(2)?;
                    let (b, ctx) = (b.clone(), ctx.clone());
                    Ok(job(move || {
                        let connection = b.connect(&cmix, &contact, &params)?;
                        Ok(connection_table(connection, &ctx).into())
                    }))
                }
            })
            .async_entry("TransmitSingleUse", {
                let (b, registry, ctx) = (b.clone(), registry.clone(), ctx.clone());
                move |args| {
                    let cmix = registry.cmix.get(args.int(0)?)?;
                    let recipient = args.bytes(1)?;
                    let tag = args.string(2)?;
                    let payload = args.bytes(3)?;
                    let params = args.bytes(4)?;
                    let response = single_use_response(args, 5, &ctx)?;
                    let b = b.clone();
                    Ok(job(move || {
                        let report = b.transmit_single_use(
                            &cmix, &recipient, &tag, &payload, &params, response,
                        )?;
                        Ok(to_json_bytes(&report)?.into())
                    }))
                }
            })
            .sync_entry("Listen", {
                let (registry, ctx) = (registry.clone(), ctx.clone());
                bind(b, move |b, args| {
                    let cmix = registry.cmix.get(args.int(0)?)?;
                    let tag = args.string(1)?;
                    let callback = single_use_callback(args, 2, &ctx)?;
                    let stopper = b.listen_single_use(&cmix, &tag, callback)?;
                    Ok(stopper_table(stopper, &ctx).into())
                })
            })
            .sync_entry("NewDummyTrafficManager", {
                let (registry, ctx) = (registry.clone(), ctx.clone());
                bind(b, move |b, args| {
                    let cmix = registry.cmix.get(args.int(0)?)?;
                    let dummy = b.new_dummy_traffic_manager(
                        &cmix,
                        args.int(1)?,
                        args.int(2)?,
                        args.int(3)?,
                    )?;
                    Ok(dummy_traffic_table(dummy, &ctx).into())
                })
            })
            .sync_entry("InitializeBackup", {
                let (registry, ctx) = (registry.clone(), ctx.clone());
                bind(b, move |b, args| {
                    let cmix = registry.cmix.get(args.int(0)?)?;
                    let password = args.string(1)?;
                    let update = update_backup_callback(args, 2, &ctx)?;
                    let backup = b.initialize_backup(&cmix, &password, update)?;
                    Ok(backup_table(backup, &ctx).into())
                })
            })
            .build()
    }
}
