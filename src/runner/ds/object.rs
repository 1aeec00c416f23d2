use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use uuid::Uuid;

use crate::runner::ds::function_object::FunctionObject;
use crate::runner::ds::object_property::PropertyKey;
use crate::runner::ds::value::{JsValue, TYPE_STR_FUNCTION, TYPE_STR_UNDEFINED};

/// Shared handle to a record. Cloning the handle aliases the record, it never copies it.
pub type JsObjectType = Rc<RefCell<JsObject>>;

/// Result of looking a key up for invocation.
pub enum CallableLookup {
    Callable(FunctionObject),
    /// Holds the `typeof` of the non-callable value.
    NotCallable(&'static str),
    Absent,
}

/// A plain record: property keys mapped to values.
pub struct JsObject {
    id: Uuid,
    properties: HashMap<PropertyKey, JsValue>,
    insertion_order: Vec<PropertyKey>,
}
impl JsObject {
    pub fn new() -> Self {
        JsObject {
            id: Uuid::new_v4(),
            properties: HashMap::new(),
            insertion_order: Vec::new(),
        }
    }

    pub fn new_handle() -> JsObjectType {
        Rc::new(RefCell::new(JsObject::new()))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn get_own_property(&self, property: &PropertyKey) -> Option<&JsValue> {
        self.properties.get(property)
    }

    /// Missing properties read as `undefined`.
    pub fn get(&self, property: &PropertyKey) -> JsValue {
        match self.get_own_property(property) {
            None => JsValue::Undefined,
            Some(v) => v.clone(),
        }
    }

    pub fn set(&mut self, property: PropertyKey, value: JsValue) {
        if !self.properties.contains_key(&property) {
            self.insertion_order.push(property.clone());
        }
        self.properties.insert(property, value);
    }

    pub fn has_property(&self, property: &PropertyKey) -> bool {
        self.properties.contains_key(property)
    }

    /// Removes `property`. Returns true once the property is gone, which also
    /// covers a property that was never there.
    pub fn delete(&mut self, property: &PropertyKey) -> bool {
        if self.properties.remove(property).is_some() {
            self.insertion_order.retain(|k| k != property);
        }
        true
    }

    pub fn lookup_callable(&self, property: &PropertyKey) -> CallableLookup {
        match self.get_own_property(property) {
            None => CallableLookup::Absent,
            Some(JsValue::Function(f)) => CallableLookup::Callable(f.clone()),
            Some(v) => CallableLookup::NotCallable(v.type_name()),
        }
    }

    /// Integer keys ascending, then string keys in insertion order.
    pub fn own_property_keys(&self) -> Vec<PropertyKey> {
        let mut int_keys = vec![];
        let mut str_keys = vec![];
        for key in &self.insertion_order {
            match key {
                PropertyKey::Int(i) => int_keys.push(*i),
                PropertyKey::Str(_) => str_keys.push(key.clone()),
            }
        }
        int_keys.sort();

        let mut result: Vec<PropertyKey> = int_keys.into_iter().map(PropertyKey::Int).collect();
        result.append(&mut str_keys);
        result
    }
}
impl Default for JsObject {
    fn default() -> Self {
        Self::new()
    }
}

impl CallableLookup {
    /// The `typeof` of whatever sits under the key.
    pub fn found_type(&self) -> &'static str {
        match self {
            CallableLookup::Callable(_) => TYPE_STR_FUNCTION,
            CallableLookup::NotCallable(t) => *t,
            CallableLookup::Absent => TYPE_STR_UNDEFINED,
        }
    }
}
