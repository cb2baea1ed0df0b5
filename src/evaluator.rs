//! Applies parsed path expressions to JSON values.

use serde_json::Value;

use crate::ast::{Accessor, PathExpr};
use crate::error::EvalError;

/// Walks a JSON tree along a parsed path.
pub struct Evaluator<'a> {
    root: &'a Value,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator rooted at the given value.
    pub fn new(root: &'a Value) -> Self {
        Evaluator { root }
    }

    /// Evaluates a path, returning every value it selects.
    ///
    /// The frontier starts as the root alone; each accessor maps every
    /// frontier value to its selection, with wildcards fanning out over all
    /// array elements. The result holds exactly one value unless a wildcard
    /// was involved. A value whose shape does not fit an accessor (indexing
    /// a non-array, selecting a field of a non-object, a missing key, an
    /// out-of-range index) is an error, not an empty result.
    pub fn evaluate(&self, path: &PathExpr) -> Result<Vec<&'a Value>, EvalError> {
        let mut current = vec![self.root];

        for accessor in &path.accessors {
            let mut next = Vec::new();
            for value in &current {
                self.apply(value, accessor, &mut next)?;
            }
            current = next;
        }

        Ok(current)
    }

    fn apply(
        &self,
        value: &'a Value,
        accessor: &Accessor,
        out: &mut Vec<&'a Value>,
    ) -> Result<(), EvalError> {
        match accessor {
            Accessor::Child(name) => {
                let object = value.as_object().ok_or_else(|| EvalError::NotAnObject {
                    identifier: name.clone(),
                })?;
                let child = object.get(name).ok_or_else(|| EvalError::MissingKey {
                    identifier: name.clone(),
                })?;
                out.push(child);
            }
            Accessor::Index(index) => {
                let items = value.as_array().ok_or(EvalError::NotAnArray)?;
                let item = items.get(*index).ok_or(EvalError::IndexOutOfBounds {
                    index: *index,
                    len: items.len(),
                })?;
                out.push(item);
            }
            Accessor::Wildcard => {
                let items = value.as_array().ok_or(EvalError::NotAnArray)?;
                out.extend(items.iter());
            }
        }
        Ok(())
    }
}
