// Одноразовые запросы: слушатель возвращает Stopper

pub trait Stopper: Send + Sync {
    fn stop(&self);
}

pub const OPERATIONS: &[&str] = &["Stop"];
