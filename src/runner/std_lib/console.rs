//! Console built-in object.
//!
//! Provides console.log, console.error, console.warn, and console.info methods.

use crate::runner::ds::error::JErrorType;
use crate::runner::ds::value::JsValue;
use crate::runner::plugin::registry::BuiltInRegistry;
use crate::runner::plugin::types::{BuiltInObject, EvalContext};

/// Register the console object with the registry.
pub fn register(registry: &mut BuiltInRegistry) {
    let console = BuiltInObject::new("console")
        .add_method("log", console_log)
        .add_method("error", console_error)
        .add_method("warn", console_warn)
        .add_method("info", console_info);

    registry.register_object(console);
}

/// Format a JsValue for console output.
fn format_value(value: &JsValue) -> String {
    match value {
        JsValue::Undefined => "undefined".to_string(),
        JsValue::Null => "null".to_string(),
        JsValue::Boolean(b) => b.to_string(),
        JsValue::Number(n) => {
            if n.is_nan() {
                "NaN".to_string()
            } else if n.is_infinite() {
                let s = if *n > 0.0 { "Infinity" } else { "-Infinity" };
                s.to_string()
            } else if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{:.0}", n)
            } else {
                n.to_string()
            }
        }
        JsValue::String(s) => s.clone(),
        JsValue::Function(f) => format!("[Function: {}]", f.name()),
    }
}

/// Format all arguments for console output.
fn format_args(args: &[JsValue]) -> String {
    args.iter()
        .map(format_value)
        .collect::<Vec<_>>()
        .join(" ")
}

/// console.log - Log to stdout.
fn console_log(
    ctx: &mut EvalContext,
    _this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, JErrorType> {
    ctx.emit(format_args(&args));
    Ok(JsValue::Undefined)
}

/// console.error - Log to stderr.
fn console_error(
    ctx: &mut EvalContext,
    _this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, JErrorType> {
    ctx.emit_diagnostic(format_args(&args));
    Ok(JsValue::Undefined)
}

/// console.warn - Log warning to stderr.
fn console_warn(
    ctx: &mut EvalContext,
    _this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, JErrorType> {
    ctx.emit_diagnostic(format!("Warning: {}", format_args(&args)));
    Ok(JsValue::Undefined)
}

/// console.info - Log info to stdout (same as log).
fn console_info(
    ctx: &mut EvalContext,
    _this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, JErrorType> {
    ctx.emit(format_args(&args));
    Ok(JsValue::Undefined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::ds::function_object::FunctionObject;

    #[test]
    fn test_format_numbers() {
        assert_eq!(format_value(&JsValue::Number(3.0)), "3");
        assert_eq!(format_value(&JsValue::Number(-0.5)), "-0.5");
        assert_eq!(format_value(&JsValue::Number(f64::NAN)), "NaN");
        assert_eq!(format_value(&JsValue::Number(f64::NEG_INFINITY)), "-Infinity");
    }

    #[test]
    fn test_format_args_joined_with_space() {
        let args = vec![
            JsValue::String("Hello".to_string()),
            JsValue::Undefined,
            JsValue::Null,
            JsValue::Boolean(true),
        ];
        assert_eq!(format_args(&args), "Hello undefined null true");
    }

    #[test]
    fn test_format_function() {
        let f = FunctionObject::new_native("log", console_log);
        assert_eq!(format_value(&JsValue::Function(f)), "[Function: log]");
    }

    #[test]
    fn test_log_without_args_emits_empty_line() {
        let mut ctx = EvalContext::new_captured();
        console_log(&mut ctx, JsValue::Undefined, vec![]).unwrap();
        assert_eq!(ctx.captured_output(), &["".to_string()]);
    }

    #[test]
    fn test_warn_and_error_go_to_diagnostics() {
        let mut ctx = EvalContext::new_captured();
        console_warn(&mut ctx, JsValue::Undefined, vec![JsValue::String("careful".to_string())]).unwrap();
        console_error(&mut ctx, JsValue::Undefined, vec![JsValue::String("boom".to_string())]).unwrap();
        assert!(ctx.captured_output().is_empty());
        assert_eq!(
            ctx.captured_diagnostics(),
            &["Warning: careful".to_string(), "boom".to_string()]
        );
    }
}
