use thiserror::Error;

use crate::runner::ds::object_property::PropertyKey;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum JErrorType {
    /// A key was invoked as a function but the record holds no callable under it.
    /// `found` is the `typeof` of whatever was there, `"undefined"` when the key is absent.
    #[error("Uncaught type error: {key} is not a function (found {found}).")]
    MissingCallable { key: PropertyKey, found: String },
}

impl JErrorType {
    pub fn missing_callable(key: &PropertyKey, found: &str) -> Self {
        JErrorType::MissingCallable {
            key: key.clone(),
            found: found.to_string(),
        }
    }

    pub fn is_missing_callable(&self) -> bool {
        matches!(self, JErrorType::MissingCallable { .. })
    }
}
