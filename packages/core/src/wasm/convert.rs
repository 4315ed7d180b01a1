// Преобразование JsValue <-> HostValue.
// Байты копируются в обе стороны: Uint8Array::to_vec и Uint8Array::from.
// Объекты не копируются: хост передаёт их по ссылке, методы запрашиваются
// по имени.

use crate::adapter::{EntryPointTable, Outcome};
use crate::error::{ErrorKind, HostError};
use crate::host::{HostFunction, HostObject, HostValue, ObjectHandle};
use js_sys::{Array, Function, Object, Reflect, Uint8Array};
use send_wrapper::SendWrapper;
use std::any::Any;
use std::sync::Arc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Глубина вложенных массивов, дальше которой значения читаются как `undefined`
const MAX_ARRAY_DEPTH: usize = 32;

type JsEntry = dyn Fn(
    JsValue,
    JsValue,
    JsValue,
    JsValue,
    JsValue,
    JsValue,
    JsValue,
) -> Result<JsValue, JsValue>;

/// Объект JS, оставшийся на стороне хоста
pub struct JsObject(SendWrapper<JsValue>);

impl JsObject {
    pub fn value(&self) -> &JsValue {
        &self.0
    }
}

impl ObjectHandle for JsObject {
    fn method(&self, name: &str) -> Option<HostFunction> {
        let receiver: &JsValue = &self.0;
        let field = Reflect::get(receiver, &JsValue::from_str(name)).ok()?;
        let f = field.dyn_into::<Function>().ok()?;
        Some(js_function(f, receiver.clone()))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub fn from_js(value: &JsValue) -> HostValue {
    convert(value, 0)
}

fn convert(value: &JsValue, depth: usize) -> HostValue {
    if value.is_undefined() {
        HostValue::Undefined
    } else if value.is_null() {
        HostValue::Null
    } else if let Some(b) = value.as_bool() {
        HostValue::Bool(b)
    } else if let Some(n) = value.as_f64() {
        HostValue::Number(n)
    } else if let Some(s) = value.as_string() {
        HostValue::String(s)
    } else if let Some(bytes) = value.dyn_ref::<Uint8Array>() {
        HostValue::Bytes(bytes.to_vec())
    } else if let Some(f) = value.dyn_ref::<Function>() {
        HostValue::Function(js_function(f.clone(), JsValue::UNDEFINED))
    } else if Array::is_array(value) {
        if depth >= MAX_ARRAY_DEPTH {
            return HostValue::Undefined;
        }
        HostValue::Array(
            Array::from(value)
                .iter()
                .map(|v| convert(&v, depth + 1))
                .collect(),
        )
    } else if value.is_object() {
        HostValue::Handle(HostObject::new(JsObject(SendWrapper::new(value.clone()))))
    } else {
        HostValue::Undefined
    }
}

/// Функция хоста; `this` при вызове равен `receiver`
fn js_function(f: Function, receiver: JsValue) -> HostFunction {
    let callable = SendWrapper::new((f, receiver));
    HostFunction::new(move |args| {
        let (f, receiver) = &*callable;
        let array: Array = args.into_iter().map(to_js).collect();
        f.apply(receiver, &array)
            .map(|v| from_js(&v))
            .map_err(|e| {
                let message = e
                    .dyn_ref::<js_sys::Error>()
                    .map(|err| String::from(err.message()))
                    .or_else(|| e.as_string())
                    .unwrap_or_else(|| "host callback threw".to_string());
                HostError::new(ErrorKind::Internal, message)
            })
    })
}

pub fn to_js(value: HostValue) -> JsValue {
    match value {
        HostValue::Undefined => JsValue::UNDEFINED,
        HostValue::Null => JsValue::NULL,
        HostValue::Bool(b) => JsValue::from_bool(b),
        HostValue::Number(n) => JsValue::from_f64(n),
        HostValue::String(s) => JsValue::from_str(&s),
        HostValue::Bytes(bytes) => Uint8Array::from(bytes.as_slice()).into(),
        HostValue::Array(items) => items.into_iter().map(to_js).collect::<Array>().into(),
        HostValue::Object(fields) => {
            let object = Object::new();
            for (key, field) in fields {
                let _ = Reflect::set(&object, &JsValue::from_str(&key), &to_js(field));
            }
            object.into()
        }
        HostValue::Handle(object) => match object.downcast_ref::<JsObject>() {
            Some(js) => js.value().clone(),
            None => Object::new().into(),
        },
        HostValue::Function(f) => function_to_js(f),
        HostValue::Table(table) => table_to_js(&table),
        HostValue::Error(e) => error_to_js(&e),
    }
}

pub fn error_to_js(error: &HostError) -> JsValue {
    let js_error = js_sys::Error::new(&error.message);
    let _ = Reflect::set(&js_error, &"kind".into(), &error.kind.as_str().into());
    if let Some(trace) = &error.trace {
        let _ = Reflect::set(&js_error, &"trace".into(), &trace.into());
    }
    js_error.into()
}

/// Аргументы JS без хвостовых `undefined`
fn collect_args(raw: [JsValue; 7]) -> Vec<HostValue> {
    let mut args: Vec<HostValue> = raw.iter().map(from_js).collect();
    while matches!(args.last(), Some(HostValue::Undefined)) {
        args.pop();
    }
    args
}

fn function_to_js(f: HostFunction) -> JsValue {
    let closure = Closure::<JsEntry>::new(move |a, b, c, d, e, g, h| {
        f.call(collect_args([a, b, c, d, e, g, h]))
            .map(to_js)
            .map_err(|err| error_to_js(&err))
    });
    closure.into_js_value()
}

/// Объект JS, полями которого являются точки входа таблицы
pub fn table_to_js(table: &Arc<EntryPointTable>) -> JsValue {
    let object = Object::new();
    for name in table.names() {
        let entry = entry_to_js(table.clone(), name);
        let _ = Reflect::set(&object, &JsValue::from_str(name), &entry);
    }
    object.into()
}

pub fn entry_to_js(table: Arc<EntryPointTable>, name: &'static str) -> JsValue {
    let closure = Closure::<JsEntry>::new(move |a, b, c, d, e, g, h| {
        match table.invoke(name, collect_args([a, b, c, d, e, g, h])) {
            Ok(Outcome::Ready(value)) => Ok(to_js(value)),
            Ok(Outcome::Pending(promise)) => {
                let promise = wasm_bindgen_futures::future_to_promise(async move {
                    promise.await.map(to_js).map_err(|err| error_to_js(&err))
                });
                Ok(promise.into())
            }
            Err(err) => Err(error_to_js(&err)),
        }
    });
    closure.into_js_value()
}
