//! Standard library built-in objects.

pub mod console;
pub mod core;

pub use self::core::register_core_builtins;
