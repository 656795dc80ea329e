//! Variable bindings.
//!
//! S has dynamic scoping by copy: a called function gets a clone of the
//! caller's bindings and its assignments vanish when it returns. There is
//! no scope stack, one flat map per interpreter.

use rustc_hash::FxHashMap;

use s_ir::Value;

/// Flat name → value map owned by one interpreter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Environment {
    bindings: FxHashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Bind `name`, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut env = Environment::new();
        for (name, value) in iter {
            env.set(name, value);
        }
        env
    }
}
