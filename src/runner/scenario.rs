//! The call-after-delete fixture.
//!
//! ```text
//! record = { func: console.log }
//! record.func("Hello")          // prints Hello
//! record = inner_processing(record)   // delete record.func, same record back
//! record.func("Hello")          // MissingCallable: func is not a function
//! ```
//!
//! `func` moves Present -> Absent exactly once and never comes back.

use crate::runner::ds::error::JErrorType;
use crate::runner::ds::object::{JsObject, JsObjectType};
use crate::runner::ds::object_property::PropertyKey;
use crate::runner::ds::operations::object::{invoke, remove};
use crate::runner::ds::value::JsValue;
use crate::runner::plugin::registry::BuiltInRegistry;
use crate::runner::plugin::types::EvalContext;

pub const GREETING: &str = "Hello";

lazy_static! {
    pub static ref FUNC_KEY: PropertyKey = PropertyKey::Str("func".to_string());
}

/// Builds `{ func: console.log }`.
pub fn new_record(registry: &BuiltInRegistry) -> Result<JsObjectType, JErrorType> {
    let log = registry
        .get_function_object("console", "log")
        .ok_or_else(|| JErrorType::missing_callable(&"console.log".into(), "undefined"))?;
    let record = JsObject::new_handle();
    (*record)
        .borrow_mut()
        .set(FUNC_KEY.clone(), JsValue::Function(log));
    Ok(record)
}

/// Strips `func` from the record. The returned handle is the one passed in.
pub fn inner_processing(record: JsObjectType) -> JsObjectType {
    remove(record, &FUNC_KEY)
}

/// Calls `func`, strips it, then calls it again. The second call's error is not handled here.
pub fn process_data(ctx: &mut EvalContext, record: JsObjectType) -> Result<(), JErrorType> {
    invoke(ctx, &record, &FUNC_KEY, JsValue::String(GREETING.to_string()))?;
    let record = inner_processing(record);
    invoke(ctx, &record, &FUNC_KEY, JsValue::String(GREETING.to_string()))?;
    Ok(())
}

/// Runs the whole fixture against `ctx`.
pub fn run(ctx: &mut EvalContext) -> Result<(), JErrorType> {
    let registry = BuiltInRegistry::with_core();
    let record = new_record(&registry)?;
    log::debug!("built record {}", (*record).borrow().id());
    process_data(ctx, record)
}
