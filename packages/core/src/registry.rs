//! Реестр дескрипторов.
//!
//! Объекты, на которые хост ссылается по целочисленному ID в последующих
//! вызовах (клиент сети, шифр базы данных), хранятся здесь. Реестр живёт
//! столько же, сколько процесс, и передаётся фабрикам явно. Запись
//! удаляется только через `Bridge::release_*`.

use crate::bindings::{Cmix, DbCipher};
use crate::utils::error::{BridgeError, Result};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

/// Таблица объектов одного типа с собственной нумерацией
pub struct Tracker<T: ?Sized> {
    kind: &'static str,
    next_id: AtomicI64,
    items: Mutex<HashMap<i64, Arc<T>>>,
}

impl<T: ?Sized> Tracker<T> {
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            next_id: AtomicI64::new(0),
            items: Mutex::new(HashMap::new()),
        }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Регистрирует объект и возвращает его ID
    pub fn insert(&self, item: Arc<T>) -> Result<i64> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut items = self.lock()?;
        items.insert(id, item);
        tracing::debug!(kind = self.kind, id, "tracked object registered");
        Ok(id)
    }

    pub fn get(&self, id: i64) -> Result<Arc<T>> {
        self.lock()?
            .get(&id)
            .cloned()
            .ok_or_else(|| self.not_found(id))
    }

    pub fn remove(&self, id: i64) -> Result<Arc<T>> {
        let removed = self.lock()?.remove(&id).ok_or_else(|| self.not_found(id))?;
        tracing::debug!(kind = self.kind, id, "tracked object released");
        Ok(removed)
    }

    pub fn contains(&self, id: i64) -> Result<bool> {
        Ok(self.lock()?.contains_key(&id))
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<i64, Arc<T>>>> {
        self.items.lock().map_err(|e| {
            BridgeError::InternalError(format!("Failed to lock {} tracker: {}", self.kind, e))
        })
    }

    fn not_found(&self, id: i64) -> BridgeError {
        BridgeError::NotFound(format!("{} with ID {} not found", self.kind, id))
    }
}

impl<T: ?Sized> fmt::Debug for Tracker<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tracker")
            .field("kind", &self.kind)
            .field("len", &self.len().ok())
            .finish()
    }
}

#[derive(Debug)]
pub struct Registry {
    pub cmix: Tracker<dyn Cmix>,
    pub ciphers: Tracker<dyn DbCipher>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            cmix: Tracker::new("Cmix"),
            ciphers: Tracker::new("DbCipher"),
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
