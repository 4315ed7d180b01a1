//! Таблицы точек входа.
//!
//! Для каждого обёрнутого объекта строится одна таблица "имя операции ->
//! вызываемое". После `build()` таблица не меняется. Синхронная точка входа
//! возвращает значение или ошибку (исключение на стороне хоста); асинхронная
//! проверяет аргументы сразу, а нативную операцию выполняет в фоне и
//! возвращает промис.

pub mod backup;
pub mod callbacks;
pub mod channel;
pub mod cipher;
pub mod cmix;
pub mod connection;
pub mod dm;
pub mod dummy;
pub mod file_transfer;
pub mod single_use;

use crate::config::ApiVersion;
use crate::error::{ErrorKind, HostError};
use crate::host::{pending, Args, HostValue, Promise, Spawn};
use crate::utils::error::{BridgeError, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Нативная операция, отложенная до фонового выполнения
pub type Job = Box<dyn FnOnce() -> Result<HostValue> + Send + 'static>;

type SyncFn = dyn Fn(&Args) -> Result<HostValue> + Send + Sync;
type AsyncFn = dyn Fn(&Args) -> Result<Job> + Send + Sync;

pub fn job<F>(f: F) -> Job
where
    F: FnOnce() -> Result<HostValue> + Send + 'static,
{
    Box::new(f)
}

/// Общее окружение адаптеров
#[derive(Clone)]
pub struct AdapterContext {
    pub spawner: Arc<dyn Spawn>,
    pub api_version: ApiVersion,
}

impl AdapterContext {
    pub fn new(spawner: Arc<dyn Spawn>, api_version: ApiVersion) -> Self {
        Self {
            spawner,
            api_version,
        }
    }

    pub fn host_error(&self, error: BridgeError) -> HostError {
        HostError::from_bridge(error, self.api_version)
    }
}

impl fmt::Debug for AdapterContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterContext")
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Sync,
    Async,
}

#[derive(Clone)]
enum EntryPoint {
    Sync(Arc<SyncFn>),
    Async(Arc<AsyncFn>),
}

/// Результат вызова точки входа
#[derive(Debug)]
pub enum Outcome {
    Ready(HostValue),
    Pending(Promise),
}

impl Outcome {
    pub fn ready(self) -> Option<HostValue> {
        match self {
            Outcome::Ready(value) => Some(value),
            Outcome::Pending(_) => None,
        }
    }

    pub fn pending(self) -> Option<Promise> {
        match self {
            Outcome::Pending(promise) => Some(promise),
            Outcome::Ready(_) => None,
        }
    }
}

pub struct EntryPointTable {
    object: &'static str,
    entries: BTreeMap<&'static str, EntryPoint>,
    context: AdapterContext,
}

impl EntryPointTable {
    pub fn builder(object: &'static str, context: &AdapterContext) -> TableBuilder {
        TableBuilder {
            object,
            entries: BTreeMap::new(),
            context: context.clone(),
        }
    }

    /// Имя типа обёрнутого объекта
    pub fn object(&self) -> &'static str {
        self.object
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn kind(&self, name: &str) -> Option<EntryKind> {
        self.entries.get(name).map(|entry| match entry {
            EntryPoint::Sync(_) => EntryKind::Sync,
            EntryPoint::Async(_) => EntryKind::Async,
        })
    }

    pub fn invoke(
        &self,
        name: &str,
        args: Vec<HostValue>,
    ) -> std::result::Result<Outcome, HostError> {
        let entry = self.entries.get(name).ok_or_else(|| {
            HostError::new(
                ErrorKind::NotFound,
                format!("{} has no entry point {}", self.object, name),
            )
        })?;

        tracing::debug!(object = self.object, entry = name, "entry point called");
        let args = Args::new(args);

        match entry {
            EntryPoint::Sync(f) => f(&args)
                .map(Outcome::Ready)
                .map_err(|e| self.fail(name, e)),
            EntryPoint::Async(f) => {
                let work = f(&args).map_err(|e| self.fail(name, e))?;
                let (resolver, promise) = pending();
                let context = self.context.clone();
                let object = self.object;
                let entry = name.to_string();

                self.context.spawner.spawn(Box::new(move || {
                    let settled = work().map_err(|e| {
                        tracing::debug!(object, entry = %entry, error = %e, "rejecting promise");
                        context.host_error(e)
                    });
                    resolver.settle(settled);
                }));

                Ok(Outcome::Pending(promise))
            }
        }
    }

    fn fail(&self, name: &str, error: BridgeError) -> HostError {
        tracing::debug!(object = self.object, entry = name, error = %error, "entry point failed");
        self.context.host_error(error)
    }
}

impl fmt::Debug for EntryPointTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryPointTable")
            .field("object", &self.object)
            .field("entries", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

pub struct TableBuilder {
    object: &'static str,
    entries: BTreeMap<&'static str, EntryPoint>,
    context: AdapterContext,
}

impl TableBuilder {
    pub fn sync_entry<F>(mut self, name: &'static str, f: F) -> Self
    where
        F: Fn(&Args) -> Result<HostValue> + Send + Sync + 'static,
    {
        let previous = self.entries.insert(name, EntryPoint::Sync(Arc::new(f)));
        debug_assert!(previous.is_none(), "duplicate entry point {name}");
        self
    }

    pub fn async_entry<F>(mut self, name: &'static str, f: F) -> Self
    where
        F: Fn(&Args) -> Result<Job> + Send + Sync + 'static,
    {
        let previous = self.entries.insert(name, EntryPoint::Async(Arc::new(f)));
        debug_assert!(previous.is_none(), "duplicate entry point {name}");
        self
    }

    pub fn build(self) -> Arc<EntryPointTable> {
        Arc::new(EntryPointTable {
            object: self.object,
            entries: self.entries,
            context: self.context,
        })
    }
}

/// Синхронная точка входа над общим нативным объектом
pub fn bind<T, F>(
    target: &Arc<T>,
    f: F,
) -> impl Fn(&Args) -> Result<HostValue> + Send + Sync + 'static
where
    T: ?Sized + Send + Sync + 'static,
    F: Fn(&T, &Args) -> Result<HostValue> + Send + Sync + 'static,
{
    let target = target.clone();
    move |args| f(&target, args)
}

/// Асинхронная точка входа: `f` разбирает аргументы и возвращает задачу,
/// которая владеет своей копией `Arc` на объект.
pub fn bind_async<T, F>(
    target: &Arc<T>,
    f: F,
) -> impl Fn(&Args) -> Result<Job> + Send + Sync + 'static
where
    T: ?Sized + Send + Sync + 'static,
    F: Fn(Arc<T>, &Args) -> Result<Job> + Send + Sync + 'static,
{
    let target = target.clone();
    move |args| f(target.clone(), args)
}
