//! Evaluation context and built-in registry.
//!
//! Built-in objects such as `console` are registered with a
//! [`BuiltInRegistry`](registry::BuiltInRegistry) by name. Their methods can be
//! pulled out as [`FunctionObject`](crate::runner::ds::function_object::FunctionObject)
//! values and stored on records, the way `{ func: console.log }` does.
//!
//! ```
//! use propdel::runner::plugin::registry::BuiltInRegistry;
//! use propdel::runner::plugin::types::EvalContext;
//! use propdel::runner::ds::value::JsValue;
//!
//! let registry = BuiltInRegistry::with_core();
//! let log = registry.get_function_object("console", "log").unwrap();
//!
//! let mut ctx = EvalContext::new_captured();
//! log.call(&mut ctx, JsValue::Undefined, vec![JsValue::String("hi".to_string())]).unwrap();
//! assert_eq!(ctx.captured_output(), &["hi".to_string()]);
//! ```

pub mod registry;
pub mod types;
