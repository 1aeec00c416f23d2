//! # propdel - a call-after-delete fixture runtime
//!
//! A record holds a callable under the key `func`, bound to `console.log`. The
//! fixture calls it, hands the record to a helper that deletes `func` and returns
//! the same record, then calls it again. The second call fails with
//! [`runner::ds::error::JErrorType::MissingCallable`].
//!
//! ## Quick Start
//!
//! ```
//! use propdel::runner::plugin::types::EvalContext;
//! use propdel::runner::scenario;
//!
//! let mut ctx = EvalContext::new_captured();
//! let result = scenario::run(&mut ctx);
//!
//! assert!(result.unwrap_err().is_missing_callable());
//! assert_eq!(ctx.captured_output(), &["Hello".to_string()]);
//! ```
//!
//! ## Records are shared, never copied
//!
//! A record lives behind a [`runner::ds::object::JsObjectType`] handle
//! (`Rc<RefCell<JsObject>>`). Passing it to a helper clones the handle, so the
//! helper's deletion is what the caller observes afterwards.
//!
//! ```
//! use propdel::runner::ds::object::JsObject;
//! use propdel::runner::ds::operations::object::{has, remove};
//! use propdel::runner::ds::value::JsValue;
//! use std::rc::Rc;
//!
//! let record = JsObject::new_handle();
//! record.borrow_mut().set("func".into(), JsValue::Null);
//!
//! let returned = remove(record.clone(), &"func".into());
//! assert!(Rc::ptr_eq(&record, &returned));
//! assert!(!has(&record, &"func".into()));
//! ```
//!
//! ## Architecture
//!
//! - **[`runner::ds`]** - Values, function objects, records and the operations on them
//! - **[`runner::plugin`]** - Evaluation context and the built-in registry
//! - **[`runner::std_lib`]** - Built-in objects (`console`)
//! - **[`runner::scenario`]** - The fixture itself

#[macro_use]
extern crate lazy_static;

pub mod runner;
