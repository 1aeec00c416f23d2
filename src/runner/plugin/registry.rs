//! Built-in registry for managing built-in objects.

use std::collections::HashMap;

use super::types::{BuiltInFn, BuiltInObject};
use crate::runner::ds::function_object::FunctionObject;
use crate::runner::std_lib::register_core_builtins;

/// Registry for built-in objects.
pub struct BuiltInRegistry {
    objects: HashMap<String, BuiltInObject>,
}

impl BuiltInRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        BuiltInRegistry {
            objects: HashMap::new(),
        }
    }

    /// Create a registry with core built-ins.
    pub fn with_core() -> Self {
        let mut registry = Self::new();
        register_core_builtins(&mut registry);
        registry
    }

    /// Register a built-in object, replacing any object of the same name.
    pub fn register_object(&mut self, obj: BuiltInObject) {
        log::trace!("registering built-in {}", obj.name);
        self.objects.insert(obj.name.clone(), obj);
    }

    pub fn get_object(&self, name: &str) -> Option<&BuiltInObject> {
        self.objects.get(name)
    }

    pub fn has_object(&self, name: &str) -> bool {
        self.objects.contains_key(name)
    }

    pub fn get_method(&self, obj_name: &str, method_name: &str) -> Option<&BuiltInFn> {
        log::trace!("looking up {}.{}", obj_name, method_name);
        self.objects
            .get(obj_name)
            .and_then(|obj| obj.methods.get(method_name))
            .map(|f| &**f)
    }

    /// The method as a function value, e.g. `console.log` ready to be stored on a record.
    pub fn get_function_object(&self, obj_name: &str, method_name: &str) -> Option<FunctionObject> {
        let behaviour = self.objects.get(obj_name)?.methods.get(method_name)?;
        Some(FunctionObject::new(method_name, behaviour.clone()))
    }
}

impl Default for BuiltInRegistry {
    fn default() -> Self {
        Self::new()
    }
}
