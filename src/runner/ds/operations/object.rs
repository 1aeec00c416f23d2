use crate::runner::ds::error::JErrorType;
use crate::runner::ds::object::{CallableLookup, JsObjectType};
use crate::runner::ds::object_property::PropertyKey;
use crate::runner::ds::value::JsValue;
use crate::runner::plugin::types::EvalContext;

/// Calls the function stored under `p` with `arg` as its only argument.
///
/// Fails with `MissingCallable` when `p` is absent or holds something that is not
/// a function; nothing is called and nothing is emitted in that case. The record
/// is not borrowed while the function runs.
pub fn invoke(
    ctx: &mut EvalContext,
    o: &JsObjectType,
    p: &PropertyKey,
    arg: JsValue,
) -> Result<(), JErrorType> {
    let lookup = (**o).borrow().lookup_callable(p);
    match lookup {
        CallableLookup::Callable(f) => {
            log::debug!("invoking {}.{} ({})", (**o).borrow().id(), p, f.name());
            f.call(ctx, JsValue::Undefined, vec![arg])?;
            Ok(())
        }
        missing => {
            log::warn!(
                "{}.{} is not callable, found {}",
                (**o).borrow().id(),
                p,
                missing.found_type()
            );
            Err(JErrorType::missing_callable(p, missing.found_type()))
        }
    }
}

/// Deletes `p` from the record and hands back the same handle.
pub fn remove(o: JsObjectType, p: &PropertyKey) -> JsObjectType {
    {
        let mut record = (*o).borrow_mut();
        let was_present = record.has_property(p);
        record.delete(p);
        log::debug!("remove {}.{} (was present: {})", record.id(), p, was_present);
    }
    o
}

pub fn has(o: &JsObjectType, p: &PropertyKey) -> bool {
    (**o).borrow().has_property(p)
}
