use std::fmt;
use std::fmt::{Display, Formatter};

use crate::runner::ds::function_object::FunctionObject;

pub const TYPE_STR_UNDEFINED: &str = "undefined";
pub const TYPE_STR_NULL: &str = "null";
pub const TYPE_STR_OBJECT: &str = "object";
pub const TYPE_STR_BOOLEAN: &str = "boolean";
pub const TYPE_STR_NUMBER: &str = "number";
pub const TYPE_STR_STRING: &str = "string";
pub const TYPE_STR_FUNCTION: &str = "function";

#[derive(Clone)]
pub enum JsValue {
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Function(FunctionObject),
}
impl JsValue {
    /// The `typeof` string of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            JsValue::Undefined => TYPE_STR_UNDEFINED,
            // typeof null is "object"
            JsValue::Null => TYPE_STR_OBJECT,
            JsValue::Boolean(_) => TYPE_STR_BOOLEAN,
            JsValue::Number(_) => TYPE_STR_NUMBER,
            JsValue::String(_) => TYPE_STR_STRING,
            JsValue::Function(_) => TYPE_STR_FUNCTION,
        }
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, JsValue::Function(_))
    }
}
impl Display for JsValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            JsValue::Undefined => write!(f, "{}", TYPE_STR_UNDEFINED),
            JsValue::Null => write!(f, "{}", TYPE_STR_NULL),
            JsValue::Boolean(b) => write!(f, "bool({})", b),
            JsValue::Number(n) => write!(f, "{}", n),
            JsValue::String(s) => write!(f, "\"{}\"", s),
            JsValue::Function(func) => write!(f, "[Function: {}]", func.name()),
        }
    }
}

impl fmt::Debug for JsValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            JsValue::Undefined => write!(f, "JsValue::Undefined"),
            JsValue::Null => write!(f, "JsValue::Null"),
            JsValue::Boolean(b) => write!(f, "JsValue::Boolean({})", b),
            JsValue::Number(n) => write!(f, "JsValue::Number({:?})", n),
            JsValue::String(s) => write!(f, "JsValue::String({:?})", s),
            JsValue::Function(func) => write!(f, "JsValue::Function({})", func.name()),
        }
    }
}

impl PartialEq for JsValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (JsValue::Undefined, JsValue::Undefined) => true,
            (JsValue::Null, JsValue::Null) => true,
            (JsValue::Boolean(a), JsValue::Boolean(b)) => a == b,
            (JsValue::Number(a), JsValue::Number(b)) => a == b,
            (JsValue::String(a), JsValue::String(b)) => a == b,
            (JsValue::Function(a), JsValue::Function(b)) => a.same_function(b),
            _ => false,
        }
    }
}
