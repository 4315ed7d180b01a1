//! Значения хоста.
//!
//! Хост динамически типизирован; `HostValue` описывает то подмножество его
//! значений, которое пересекает границу. Байтовые буферы всегда копируются:
//! ни одна сторона не видит изменений, сделанных другой на месте.

use crate::adapter::EntryPointTable;
use crate::error::HostError;
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Number.MAX_SAFE_INTEGER
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

type HostCall = dyn Fn(Vec<HostValue>) -> Result<HostValue, HostError> + Send + Sync;

/// Вызываемое значение хоста. `Err` означает исключение на стороне хоста.
#[derive(Clone)]
pub struct HostFunction(Arc<HostCall>);

impl HostFunction {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Vec<HostValue>) -> Result<HostValue, HostError> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn call(&self, args: Vec<HostValue>) -> Result<HostValue, HostError> {
        (self.0)(args)
    }

    pub fn ptr_eq(&self, other: &HostFunction) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for HostFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HostFunction")
    }
}

/// Объект, который остаётся на стороне хоста. Методы запрашиваются по
/// имени и вызываются с самим объектом в качестве `this`; поля не
/// копируются, поэтому циклические ссылки безопасны.
pub trait ObjectHandle: Any + Send + Sync {
    fn method(&self, name: &str) -> Option<HostFunction>;

    fn as_any(&self) -> &dyn Any;
}

#[derive(Clone)]
pub struct HostObject(Arc<dyn ObjectHandle>);

impl HostObject {
    pub fn new<H: ObjectHandle>(handle: H) -> Self {
        Self(Arc::new(handle))
    }

    pub fn method(&self, name: &str) -> Option<HostFunction> {
        self.0.method(name)
    }

    pub fn downcast_ref<H: ObjectHandle>(&self) -> Option<&H> {
        self.0.as_any().downcast_ref::<H>()
    }

    pub fn ptr_eq(&self, other: &HostObject) -> bool {
        std::ptr::eq(
            Arc::as_ptr(&self.0) as *const (),
            Arc::as_ptr(&other.0) as *const (),
        )
    }
}

impl fmt::Debug for HostObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HostObject")
    }
}

#[derive(Clone, Debug, Default)]
pub enum HostValue {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Bytes(Vec<u8>),
    Array(Vec<HostValue>),
    Object(BTreeMap<String, HostValue>),
    /// Объект хоста, переданный по ссылке
    Handle(HostObject),
    Function(HostFunction),
    /// Таблица точек входа обёрнутого объекта
    Table(Arc<EntryPointTable>),
    Error(HostError),
}

impl HostValue {
    /// Копирует срез в новый буфер хоста
    pub fn bytes(data: &[u8]) -> Self {
        HostValue::Bytes(data.to_vec())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            HostValue::Undefined => "undefined",
            HostValue::Null => "null",
            HostValue::Bool(_) => "boolean",
            HostValue::Number(_) => "number",
            HostValue::String(_) => "string",
            HostValue::Bytes(_) => "byte buffer",
            HostValue::Array(_) => "array",
            HostValue::Object(_) | HostValue::Handle(_) => "object",
            HostValue::Function(_) => "function",
            HostValue::Table(_) => "entry-point table",
            HostValue::Error(_) => "error",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            HostValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            HostValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Целое число без дробной части в пределах, точно представимых в f64
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            HostValue::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                Some(*n as i64)
            }
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            HostValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            HostValue::Bytes(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&HostFunction> {
        match self {
            HostValue::Function(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Arc<EntryPointTable>> {
        match self {
            HostValue::Table(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_error(&self) -> Option<&HostError> {
        match self {
            HostValue::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Метод объекта хоста, если поле с таким именем вызываемое
    pub fn method(&self, name: &str) -> Option<HostFunction> {
        match self {
            HostValue::Object(fields) => fields.get(name).and_then(HostValue::as_function).cloned(),
            HostValue::Handle(object) => object.method(name),
            _ => None,
        }
    }
}

impl PartialEq for HostValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (HostValue::Undefined, HostValue::Undefined) => true,
            (HostValue::Null, HostValue::Null) => true,
            (HostValue::Bool(a), HostValue::Bool(b)) => a == b,
            (HostValue::Number(a), HostValue::Number(b)) => a == b,
            (HostValue::String(a), HostValue::String(b)) => a == b,
            (HostValue::Bytes(a), HostValue::Bytes(b)) => a == b,
            (HostValue::Array(a), HostValue::Array(b)) => a == b,
            (HostValue::Object(a), HostValue::Object(b)) => a == b,
            (HostValue::Handle(a), HostValue::Handle(b)) => a.ptr_eq(b),
            (HostValue::Function(a), HostValue::Function(b)) => a.ptr_eq(b),
            (HostValue::Table(a), HostValue::Table(b)) => Arc::ptr_eq(a, b),
            (HostValue::Error(a), HostValue::Error(b)) => a == b,
            _ => false,
        }
    }
}

impl From<()> for HostValue {
    fn from(_: ()) -> Self {
        HostValue::Undefined
    }
}

impl From<bool> for HostValue {
    fn from(value: bool) -> Self {
        HostValue::Bool(value)
    }
}

impl From<i64> for HostValue {
    fn from(value: i64) -> Self {
        HostValue::Number(value as f64)
    }
}

impl From<u32> for HostValue {
    fn from(value: u32) -> Self {
        HostValue::Number(f64::from(value))
    }
}

impl From<f64> for HostValue {
    fn from(value: f64) -> Self {
        HostValue::Number(value)
    }
}

impl From<String> for HostValue {
    fn from(value: String) -> Self {
        HostValue::String(value)
    }
}

impl From<&str> for HostValue {
    fn from(value: &str) -> Self {
        HostValue::String(value.to_string())
    }
}

impl From<Vec<u8>> for HostValue {
    fn from(value: Vec<u8>) -> Self {
        HostValue::Bytes(value)
    }
}

impl From<HostFunction> for HostValue {
    fn from(value: HostFunction) -> Self {
        HostValue::Function(value)
    }
}

impl From<HostObject> for HostValue {
    fn from(value: HostObject) -> Self {
        HostValue::Handle(value)
    }
}

impl From<Arc<EntryPointTable>> for HostValue {
    fn from(value: Arc<EntryPointTable>) -> Self {
        HostValue::Table(value)
    }
}

impl From<HostError> for HostValue {
    fn from(value: HostError) -> Self {
        HostValue::Error(value)
    }
}
