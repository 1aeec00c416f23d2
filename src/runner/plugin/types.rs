//! Core types for native functions and their execution context.

use std::collections::HashMap;
use std::rc::Rc;

use crate::runner::ds::error::JErrorType;
use crate::runner::ds::value::JsValue;

/// Where emitted text goes.
pub enum OutputSink {
    /// Straight to the process's stdout and stderr.
    Stdio,
    /// Kept in memory, one entry per emitted line.
    Buffer {
        output: Vec<String>,
        diagnostics: Vec<String>,
    },
}

/// Execution context passed to native functions.
pub struct EvalContext {
    sink: OutputSink,
}

impl EvalContext {
    pub fn new() -> Self {
        EvalContext {
            sink: OutputSink::Stdio,
        }
    }

    /// A context that records output instead of printing it.
    pub fn new_captured() -> Self {
        EvalContext {
            sink: OutputSink::Buffer {
                output: Vec::new(),
                diagnostics: Vec::new(),
            },
        }
    }

    /// Emit one line on the standard channel.
    pub fn emit(&mut self, line: String) {
        match &mut self.sink {
            OutputSink::Stdio => println!("{}", line),
            OutputSink::Buffer { output, .. } => output.push(line),
        }
    }

    /// Emit one line on the diagnostic channel.
    pub fn emit_diagnostic(&mut self, line: String) {
        match &mut self.sink {
            OutputSink::Stdio => eprintln!("{}", line),
            OutputSink::Buffer { diagnostics, .. } => diagnostics.push(line),
        }
    }

    /// Lines emitted so far. Always empty for a stdio context.
    pub fn captured_output(&self) -> &[String] {
        match &self.sink {
            OutputSink::Stdio => &[],
            OutputSink::Buffer { output, .. } => output,
        }
    }

    pub fn captured_diagnostics(&self) -> &[String] {
        match &self.sink {
            OutputSink::Stdio => &[],
            OutputSink::Buffer { diagnostics, .. } => diagnostics,
        }
    }
}

impl Default for EvalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Function signature for built-in methods.
/// Native functions receive the evaluation context, `this` value, and arguments.
pub type NativeFn = fn(
    ctx: &mut EvalContext,
    this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, JErrorType>;

/// Built-in function - either compiled-in or plugin-provided.
pub enum BuiltInFn {
    /// Direct function pointer.
    Native(NativeFn),

    /// Closure-backed function, e.g. a test double that records its calls.
    Plugin(Box<dyn Fn(&mut EvalContext, JsValue, Vec<JsValue>) -> Result<JsValue, JErrorType>>),
}

impl BuiltInFn {
    pub fn call(
        &self,
        ctx: &mut EvalContext,
        this: JsValue,
        args: Vec<JsValue>,
    ) -> Result<JsValue, JErrorType> {
        match self {
            BuiltInFn::Native(f) => f(ctx, this, args),
            BuiltInFn::Plugin(f) => f(ctx, this, args),
        }
    }
}

/// Built-in object definition, e.g. `console`.
pub struct BuiltInObject {
    pub name: String,

    /// Methods by name. Shared so that every function object handed out for a
    /// method is the same function.
    pub methods: HashMap<String, Rc<BuiltInFn>>,
}

impl BuiltInObject {
    pub fn new(name: impl Into<String>) -> Self {
        BuiltInObject {
            name: name.into(),
            methods: HashMap::new(),
        }
    }

    /// Add a native method.
    pub fn add_method(mut self, name: impl Into<String>, func: NativeFn) -> Self {
        self.methods.insert(name.into(), Rc::new(BuiltInFn::Native(func)));
        self
    }
}
