// Типизированный доступ к позиционным аргументам точки входа.
// Проверка выполняется до вызова нативной операции.

use super::value::{HostFunction, HostValue};
use crate::utils::error::{BridgeError, Result};

static UNDEFINED: HostValue = HostValue::Undefined;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    values: Vec<HostValue>,
}

impl Args {
    pub fn new(values: Vec<HostValue>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Отсутствующий аргумент читается как `undefined`, как в JS
    pub fn get(&self, index: usize) -> &HostValue {
        self.values.get(index).unwrap_or(&UNDEFINED)
    }

    pub fn value(&self, index: usize) -> HostValue {
        self.get(index).clone()
    }

    pub fn int(&self, index: usize) -> Result<i64> {
        let value = self.get(index);
        value
            .as_i64()
            .ok_or_else(|| BridgeError::invalid_argument(index, "integer", value.type_name()))
    }

    pub fn uint32(&self, index: usize) -> Result<u32> {
        let value = self.get(index);
        value
            .as_i64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| {
                BridgeError::invalid_argument(index, "unsigned 32-bit integer", value.type_name())
            })
    }

    pub fn usize(&self, index: usize) -> Result<usize> {
        let value = self.get(index);
        value
            .as_i64()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| {
                BridgeError::invalid_argument(index, "non-negative integer", value.type_name())
            })
    }

    pub fn float(&self, index: usize) -> Result<f64> {
        let value = self.get(index);
        value
            .as_f64()
            .ok_or_else(|| BridgeError::invalid_argument(index, "number", value.type_name()))
    }

    pub fn string(&self, index: usize) -> Result<String> {
        let value = self.get(index);
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| BridgeError::invalid_argument(index, "string", value.type_name()))
    }

    /// Копия буфера хоста
    pub fn bytes(&self, index: usize) -> Result<Vec<u8>> {
        let value = self.get(index);
        value
            .as_bytes()
            .map(<[u8]>::to_vec)
            .ok_or_else(|| BridgeError::invalid_argument(index, "byte buffer", value.type_name()))
    }

    /// Функция хоста или объект с методом `method`
    pub fn callable(&self, index: usize, method: &'static str) -> Result<HostFunction> {
        let value = self.get(index);
        match value {
            HostValue::Function(f) => Ok(f.clone()),
            HostValue::Object(_) | HostValue::Handle(_) => value
                .method(method)
                .ok_or(BridgeError::MissingMethod { index, method }),
            other => Err(BridgeError::invalid_argument(
                index,
                "function or object",
                other.type_name(),
            )),
        }
    }

    /// Метод объекта хоста. Для объектов с несколькими методами.
    pub fn method(&self, index: usize, method: &'static str) -> Result<HostFunction> {
        let value = self.get(index);
        match value {
            HostValue::Object(_) | HostValue::Handle(_) => value
                .method(method)
                .ok_or(BridgeError::MissingMethod { index, method }),
            other => Err(BridgeError::invalid_argument(index, "object", other.type_name())),
        }
    }
}

impl From<Vec<HostValue>> for Args {
    fn from(values: Vec<HostValue>) -> Self {
        Self::new(values)
    }
}
