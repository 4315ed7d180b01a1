// Исполнители фоновых задач асинхронных точек входа

pub type Task = Box<dyn FnOnce() + Send + 'static>;

pub trait Spawn: Send + Sync {
    fn spawn(&self, task: Task);
}

/// Запускает каждую задачу в отдельном именованном потоке
#[derive(Debug, Clone)]
pub struct ThreadSpawner {
    thread_name: String,
}

impl ThreadSpawner {
    pub fn new(thread_name: impl Into<String>) -> Self {
        Self {
            thread_name: thread_name.into(),
        }
    }
}

impl Spawn for ThreadSpawner {
    fn spawn(&self, task: Task) {
        // При ошибке задача уничтожается вместе с Resolver, и промис отклоняется
        if let Err(e) = std::thread::Builder::new()
            .name(self.thread_name.clone())
            .spawn(task)
        {
            tracing::error!(error = %e, "failed to spawn worker thread");
        }
    }
}

/// Выполняет задачу в очереди микрозадач браузера
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSpawner;

#[cfg(target_arch = "wasm32")]
impl Spawn for LocalSpawner {
    fn spawn(&self, task: Task) {
        wasm_bindgen_futures::spawn_local(async move { task() });
    }
}

#[cfg(target_arch = "wasm32")]
pub fn default_spawner(_thread_name: &str) -> std::sync::Arc<dyn Spawn> {
    std::sync::Arc::new(LocalSpawner)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_spawner(thread_name: &str) -> std::sync::Arc<dyn Spawn> {
    std::sync::Arc::new(ThreadSpawner::new(thread_name))
}
