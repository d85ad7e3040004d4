//! Command-line token decomposition.
//!
//! A token source callers may use to fill a [`ParameterStore`] before
//! validation; the engine itself never parses command lines. Tokens with
//! dashes are argument keys and an immediately following dash-free token is
//! the key's value, otherwise the value is empty (a bare flag).

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::error::StoreError;
use crate::store::{ParameterStore, ValueStore};

lazy_static! {
    static ref DASH: Regex = Regex::new(r"-").unwrap();
}

#[derive(Debug, Default)]
pub struct InputParser {
    arguments: BTreeMap<String, String>,
    help: BTreeMap<String, (String, String)>,
}

impl InputParser {
    /// Decomposes the process arguments, skipping the program name.
    pub fn from_env() -> Self {
        Self::from_args(std::env::args().skip(1))
    }

    /// Decomposes a raw token sequence (no program name expected).
    ///
    /// Every dash is removed from a key token, so `--max-size` and
    /// `--maxsize` name the same argument.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Self {
        let mut arguments = BTreeMap::new();
        let mut tokens = args.into_iter().peekable();
        while let Some(token) = tokens.next() {
            let key = DASH.replace_all(&token, "").into_owned();
            let value = match tokens.peek() {
                Some(next) if !next.starts_with('-') => tokens.next().unwrap(),
                _ => String::new(),
            };
            arguments.insert(key, value);
        }
        Self {
            arguments,
            help: BTreeMap::new(),
        }
    }

    /// The value given for an argument key.
    pub fn value(&self, key: &str) -> Result<&str, StoreError> {
        self.arguments
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| StoreError::KeyNotFound {
                key: key.to_owned(),
            })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.arguments.contains_key(key)
    }

    pub fn add_help(
        &mut self,
        key: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) {
        self.help.insert(key.into(), (name.into(), description.into()));
    }

    pub fn print(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.arguments {
            out.push_str(key);
            out.push(' ');
            out.push_str(value);
            out.push('\n');
        }
        out
    }

    pub fn print_help(&self) -> String {
        let mut out = String::new();
        for (key, (name, description)) in &self.help {
            out.push_str(key);
            out.push(' ');
            out.push_str(name);
            out.push(' ');
            out.push_str(description);
            out.push('\n');
        }
        out
    }

    /// Inserts every argument into the store with simple type inference:
    /// integer text as `i64`, float text as `f64`, bare flags as `true`,
    /// anything else as text.
    pub fn populate(&self, store: &mut ParameterStore) {
        for (key, value) in &self.arguments {
            debug!(key = %key, value = %value, "populating store");
            if value.is_empty() {
                store.insert(key.clone(), true);
            } else if let Ok(int) = value.parse::<i64>() {
                store.insert(key.clone(), int);
            } else if let Ok(float) = value.parse::<f64>() {
                store.insert(key.clone(), float);
            } else {
                store.insert(key.clone(), value.clone());
            }
        }
    }
}
