use std::rc::Rc;

use crate::runner::ds::error::JErrorType;
use crate::runner::ds::value::JsValue;
use crate::runner::plugin::types::{BuiltInFn, EvalContext, NativeFn};

/// A callable value. Clones share the same behaviour, so two clones are the same function.
#[derive(Clone)]
pub struct FunctionObject {
    name: String,
    behaviour: Rc<BuiltInFn>,
}
impl FunctionObject {
    pub fn new(name: impl Into<String>, behaviour: Rc<BuiltInFn>) -> Self {
        FunctionObject {
            name: name.into(),
            behaviour,
        }
    }

    pub fn new_native(name: impl Into<String>, func: NativeFn) -> Self {
        Self::new(name, Rc::new(BuiltInFn::Native(func)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(
        &self,
        ctx: &mut EvalContext,
        this: JsValue,
        args: Vec<JsValue>,
    ) -> Result<JsValue, JErrorType> {
        self.behaviour.call(ctx, this, args)
    }

    pub fn same_function(&self, other: &FunctionObject) -> bool {
        Rc::ptr_eq(&self.behaviour, &other.behaviour)
    }
}
