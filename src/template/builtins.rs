//! Built-in placeholder functions.
//!
//! `{{__name}}` markers resolve against a registry of zero-argument string
//! functions at substitution time. Evaluation is lazy and per-occurrence,
//! so two `{{__uuid}}` markers in one template yield two different values.

use chrono::Datelike;
use std::collections::HashMap;
use uuid::Uuid;

type BuiltinFn = Box<dyn Fn() -> String + Send + Sync>;

/// Registry mapping builtin names to their implementations.
///
/// The default registry ships `year` and `uuid`; callers may register
/// additional functions. Functions must be `Send + Sync` so a registry can
/// be shared across threads when templates are processed in parallel.
pub struct BuiltinRegistry {
    functions: HashMap<String, BuiltinFn>,
}

impl BuiltinRegistry {
    /// Registry with no functions. Useful for substitution where builtin
    /// markers should render as empty.
    pub fn empty() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// Register a builtin under `name`, replacing any existing entry.
    pub fn register<F>(&mut self, name: &str, function: F)
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.functions.insert(name.to_string(), Box::new(function));
    }

    /// Invoke the builtin named `name`, if registered.
    pub fn call(&self, name: &str) -> Option<String> {
        self.functions.get(name).map(|f| f())
    }

    /// Whether a builtin named `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }
}

impl Default for BuiltinRegistry {
    /// The stock registry: `year` (current four-digit calendar year) and
    /// `uuid` (fresh random v4 identifier per call).
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("year", || chrono::Local::now().year().to_string());
        registry.register("uuid", || Uuid::new_v4().to_string());
        registry
    }
}
