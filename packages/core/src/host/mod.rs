// Модель значений хоста и асинхронные примитивы

pub mod args;
pub mod promise;
pub mod spawn;
pub mod value;

pub use args::Args;
pub use promise::{pending, Promise, Resolver, Settled};
pub use spawn::{default_spawner, Spawn, Task, ThreadSpawner};
pub use value::{HostFunction, HostObject, HostValue, ObjectHandle};
