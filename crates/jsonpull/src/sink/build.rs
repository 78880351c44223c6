//! Tree-building sink backend.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::mem;

use crate::{
    sink::JsonSink,
    value::{Array, Map, Value},
};

/// The composite currently receiving values.
#[derive(Debug)]
enum Scope {
    Top,
    Array(Array),
    Object(Map),
}

/// Builds a [`Value`] tree from sink events.
///
/// A stack holds one frame per open composite: the key the composite will
/// be stored under in its parent, and the parent's own in-progress state.
/// Values completed at the top level are collected in order, so a reusable
/// event stream produces several roots.
///
/// Duplicate keys follow map semantics: the later value wins.
///
/// ```
/// use jsonpull::{JsonSink, Value, ValueBuilder};
///
/// let mut b = ValueBuilder::new();
/// b.start_array();
/// b.add_number(1.0);
/// b.add_null();
/// b.end_array();
/// assert_eq!(
///     b.into_root(),
///     Some(Value::Array(vec![Value::Number(1.0), Value::Null]))
/// );
/// ```
#[derive(Debug, Default)]
pub struct ValueBuilder {
    scope: Scope,
    stack: Vec<(Option<String>, Scope)>,
    key: Option<String>,
    roots: Vec<Value>,
}

impl Default for Scope {
    fn default() -> Self {
        Scope::Top
    }
}

impl ValueBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The first completed top-level value, if any.
    #[must_use]
    pub fn root(&self) -> Option<&Value> {
        self.roots.first()
    }

    /// All completed top-level values in order.
    #[must_use]
    pub fn roots(&self) -> &[Value] {
        &self.roots
    }

    /// Consumes the builder, returning the first completed top-level value.
    #[must_use]
    pub fn into_root(self) -> Option<Value> {
        self.roots.into_iter().next()
    }

    /// Consumes the builder, returning every completed top-level value.
    #[must_use]
    pub fn into_roots(self) -> Vec<Value> {
        self.roots
    }

    fn value(&mut self, v: Value) {
        match &mut self.scope {
            Scope::Top => self.roots.push(v),
            Scope::Array(items) => items.push(v),
            Scope::Object(map) => {
                let key = self.key.take().expect("object entries start with a key");
                map.insert(key, v);
            }
        }
    }

    fn open(&mut self, scope: Scope) {
        let parent = mem::replace(&mut self.scope, scope);
        self.stack.push((self.key.take(), parent));
    }

    fn close(&mut self) -> Scope {
        let (key, parent) = self.stack.pop().expect("composite was started");
        self.key = key;
        mem::replace(&mut self.scope, parent)
    }
}

impl JsonSink for ValueBuilder {
    type Raw = Value;

    fn add_null(&mut self) {
        self.value(Value::Null);
    }

    fn add_bool(&mut self, value: bool) {
        self.value(Value::Boolean(value));
    }

    fn add_number(&mut self, value: f64) {
        self.value(Value::Number(value));
    }

    fn add_string(&mut self, value: &str) {
        self.value(Value::String(value.to_string()));
    }

    fn add_key(&mut self, key: &str) {
        self.key = Some(key.to_string());
    }

    fn start_array(&mut self) {
        self.open(Scope::Array(Array::new()));
    }

    fn end_array(&mut self) {
        match self.close() {
            Scope::Array(items) => self.value(Value::Array(items)),
            _ => panic!("end_array without a matching start_array"),
        }
    }

    fn start_object(&mut self) {
        self.open(Scope::Object(Map::new()));
    }

    fn end_object(&mut self) {
        match self.close() {
            Scope::Object(map) => self.value(Value::Object(map)),
            _ => panic!("end_object without a matching start_object"),
        }
    }

    fn add_raw(&mut self, raw: &Value) {
        self.value(raw.clone());
    }
}
