//! Textual rendering of type-erased values.
//!
//! A [`ValuePrinter`] keeps a table from a value's runtime type identity to
//! a rendering closure, looked up at print time. Rendering is a diagnostic
//! side channel, orthogonal to validation.

use std::collections::HashMap;

use crate::datatype::{DataType, Value};
use crate::error::StoreError;
use crate::store::KeyHasher;

type RenderFn = Box<dyn Fn(&Value) -> String + Send + Sync>;

pub struct ValuePrinter {
    visitors: HashMap<u8, RenderFn, KeyHasher>,
}

impl ValuePrinter {
    /// A printer with no registered visitors; every render fails with
    /// [`StoreError::UnsupportedType`] until types are registered.
    pub fn empty() -> Self {
        Self {
            visitors: HashMap::default(),
        }
    }

    /// Registers (or replaces) the visitor for `T`.
    pub fn register<T, F>(&mut self, render: F)
    where
        T: 'static + DataType,
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.visitors.insert(
            T::UID,
            Box::new(move |value| {
                // the UID key and the variant always agree
                T::peel(value).map(&render).unwrap_or_default()
            }),
        );
    }

    /// Renders a value through its registered visitor.
    pub fn render(&self, value: &Value) -> Result<String, StoreError> {
        let visitor =
            self.visitors
                .get(&value.identifier())
                .ok_or(StoreError::UnsupportedType {
                    data_type: value.data_type(),
                })?;
        Ok(visitor(value))
    }

    pub fn len(&self) -> usize {
        self.visitors.len()
    }
    pub fn is_empty(&self) -> bool {
        self.visitors.is_empty()
    }
}

fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

impl Default for ValuePrinter {
    /// A printer covering every built-in variant: scalars in their natural
    /// text form, booleans as `true`/`false`, lists space-separated.
    fn default() -> Self {
        let mut printer = ValuePrinter::empty();
        printer.register::<i64, _>(|v| v.to_string());
        printer.register::<u64, _>(|v| v.to_string());
        printer.register::<f64, _>(|v| v.to_string());
        printer.register::<bool, _>(|v| v.to_string());
        printer.register::<String, _>(|v| v.clone());
        printer.register::<Vec<String>, _>(|v| join(v));
        printer.register::<Vec<i64>, _>(|v| join(v));
        printer.register::<Vec<f64>, _>(|v| join(v));
        printer
    }
}
