// Фоновый фиктивный трафик

use super::NativeResult;

pub trait DummyTraffic: Send + Sync {
    fn pause(&self) -> NativeResult<()>;
    fn start(&self) -> NativeResult<()>;
    fn get_status(&self) -> bool;
}

pub const OPERATIONS: &[&str] = &["Pause", "Start", "GetStatus"];
