//! Declared parameters, their checks, and the controller that runs them.
//!
//! A [`Parameter`] is a named, typed declaration owning an ordered sequence
//! of [`Check`]s. Attachment order is authoritative: placing a default
//! before a required check makes the requirement auto-filled, placing it
//! after makes the default unreachable. The [`ParameterController`] owns
//! one type-erased declaration per name and runs every declaration's check
//! sequence against a store in one fail-fast pass.

use std::any::Any;
use std::collections::HashMap;

use tracing::debug;

use crate::datatype::DataType;
use crate::error::{Result, ValidationError};
use crate::store::{Key, KeyHasher, ParameterStore, ValueStore};

// ------------- Check -------------
/// One validation or normalization step, bound to the declaration that owns
/// it and evaluated only against that declaration's name and type.
#[derive(Debug, Clone, PartialEq)]
pub enum Check<T: DataType> {
    /// Fails when the key is absent, regardless of the stored type.
    IsRequired,
    /// Fails when a present value lies outside the inclusive bounds.
    /// Absence is not an error here; presence is [`Check::IsRequired`]'s job.
    CheckRange { low: T, high: T },
    /// Inserts the value when the key is absent. Never overwrites.
    SetDefault { value: T },
    /// Reads a present value as `T`, letting any store failure escape as-is.
    CheckDataType,
}

impl<T: DataType> Check<T> {
    pub fn check<S: ValueStore>(&self, name: &str, store: &mut S) -> Result<()> {
        match self {
            Check::IsRequired => {
                if !store.contains(name) {
                    return Err(ValidationError::MissingParameter {
                        parameter: name.to_owned(),
                    });
                }
                Ok(())
            }
            Check::CheckRange { low, high } => {
                if store.contains(name) {
                    let value = store.get::<T>(name)?;
                    if value < low || value > high {
                        return Err(ValidationError::OutOfRange {
                            parameter: name.to_owned(),
                        });
                    }
                }
                Ok(())
            }
            Check::SetDefault { value } => {
                if !store.contains(name) {
                    store.insert(name, value.clone());
                }
                Ok(())
            }
            Check::CheckDataType => {
                if store.contains(name) {
                    store.get::<T>(name)?;
                }
                Ok(())
            }
        }
    }
}

// ------------- Parameter -------------
/// A named, typed declaration owning its checks in attachment order.
#[derive(Debug)]
pub struct Parameter<T: DataType> {
    name: Key,
    checks: Vec<Check<T>>,
}

impl<T: DataType> Parameter<T> {
    pub fn new(name: impl Into<Key>) -> Self {
        Self {
            name: name.into(),
            checks: Vec::new(),
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Appends a check and hands the declaration back for fluent chaining.
    pub fn add(&mut self, check: Check<T>) -> &mut Self {
        self.checks.push(check);
        self
    }
    pub fn is_required(&mut self) -> &mut Self {
        self.add(Check::IsRequired)
    }
    pub fn check_range(&mut self, low: T, high: T) -> &mut Self {
        self.add(Check::CheckRange { low, high })
    }
    pub fn set_default(&mut self, value: T) -> &mut Self {
        self.add(Check::SetDefault { value })
    }
    pub fn check_data_type(&mut self) -> &mut Self {
        self.add(Check::CheckDataType)
    }
}

// ------------- Checkable -------------
/// The capability a controller needs from a declaration, independent of its
/// declared value type.
pub trait Checkable<S: ValueStore>: std::fmt::Debug {
    /// Runs every attached check in attachment order, stopping at the first
    /// failure.
    fn check_parameter(&self, store: &mut S) -> Result<()>;
    fn name(&self) -> &str;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T, S> Checkable<S> for Parameter<T>
where
    T: 'static + DataType,
    S: ValueStore,
{
    fn check_parameter(&self, store: &mut S) -> Result<()> {
        for check in &self.checks {
            check.check(&self.name, store)?;
        }
        Ok(())
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ------------- ParameterController -------------
/// The owner of all declarations and the entry point for a validation pass.
///
/// Declarations of different value types live behind one map; declaring a
/// name twice replaces the earlier declaration. Iteration order across
/// distinct declarations is map order and not guaranteed stable; order
/// within one declaration's check sequence is.
pub struct ParameterController<S: ValueStore + 'static = ParameterStore> {
    declared: HashMap<Key, Box<dyn Checkable<S>>, KeyHasher>,
}

impl<S: ValueStore + 'static> ParameterController<S> {
    pub fn new() -> Self {
        Self {
            declared: HashMap::default(),
        }
    }

    /// Creates (or replaces) the named declaration typed at `T` and returns
    /// the mutable handle for attaching checks.
    pub fn declare<T: 'static + DataType>(&mut self, name: impl Into<Key>) -> &mut Parameter<T> {
        let name = name.into();
        let parameter: Box<dyn Checkable<S>> = Box::new(Parameter::<T>::new(name.clone()));
        self.declared.insert(name.clone(), parameter);
        self.declared
            .get_mut(&name)
            .unwrap() // inserted under this exact name above
            .as_any_mut()
            .downcast_mut::<Parameter<T>>()
            .unwrap() // created at this exact type above
    }

    /// The declaration registered under the name, type-erased.
    pub fn lookup(&self, name: &str) -> Result<&dyn Checkable<S>> {
        self.declared
            .get(name)
            .map(|parameter| &**parameter)
            .ok_or_else(|| ValidationError::UnknownParameter {
                parameter: name.to_owned(),
            })
    }

    /// Runs every declaration's check sequence against the store. The first
    /// failing check anywhere aborts the pass and propagates its error;
    /// later declarations are not visited.
    pub fn validate(&self, store: &mut S) -> Result<()> {
        for (name, parameter) in &self.declared {
            debug!(parameter = %name, "checking parameter");
            parameter.check_parameter(store)?;
        }
        Ok(())
    }

    /// Absorbs another controller's declarations.
    ///
    /// An empty receiver adopts the other's declaration set wholesale;
    /// otherwise the merge is key-by-key, incoming declarations overwriting
    /// any existing declaration of the same name.
    pub fn absorb(&mut self, other: Self) {
        if self.declared.is_empty() {
            self.declared = other.declared;
            return;
        }
        for (name, parameter) in other.declared {
            self.declared.insert(name, parameter);
        }
    }

    pub fn len(&self) -> usize {
        self.declared.len()
    }
    pub fn is_empty(&self) -> bool {
        self.declared.is_empty()
    }
}

impl<S: ValueStore + 'static> Default for ParameterController<S> {
    fn default() -> Self {
        Self::new()
    }
}
