//! Stipula – declarative parameter validation against a type-erased value store.
//!
//! Stipula centers on three constructs:
//! * A [`store::ParameterStore`] maps string keys to runtime-tagged
//!   [`datatype::Value`]s; any store satisfying the [`store::ValueStore`]
//!   contract can be substituted.
//! * A [`parameter::Parameter`] is a named, typed declaration owning an
//!   ordered sequence of [`parameter::Check`]s. Attachment order is
//!   semantically significant: a default attached before a required check
//!   auto-fills the requirement, a default attached after it never runs.
//! * A [`parameter::ParameterController`] owns one declaration per name and
//!   runs every declaration's check sequence against a store in one
//!   fail-fast pass.
//!
//! ## Modules
//! * [`datatype`] – The [`datatype::DataType`] trait plus the [`datatype::Value`]
//!   tagged union (integers, floats, booleans, text, lists).
//! * [`store`] – The [`store::ValueStore`] capability contract and the
//!   reference [`store::ParameterStore`].
//! * [`parameter`] – Checks, typed declarations, and the controller.
//! * [`printer`] – Diagnostic rendering of stored values through a table of
//!   per-type visitors.
//! * [`input`] – Command-line token decomposition for filling a store
//!   before validation.
//! * [`settings`] – Settings for the demonstration binary.
//! * [`error`] – The store-level and validation-level error taxonomies.
//!
//! ## Checks
//! Four built-in checks cover the common cases: `is_required`,
//! `check_range`, `set_default`, and `check_data_type`. A check only ever
//! sees its own parameter's name and declared type; the sole mutation any
//! check performs is `set_default`'s insertion of a missing value.
//!
//! ## Errors
//! Store failures ([`error::StoreError`]) and validation failures
//! ([`error::ValidationError`]) stay distinguishable: a type mismatch
//! surfaced while reading a value propagates through validation unmodified
//! rather than being re-wrapped as a domain error.
//!
//! ## Quick Start
//! ```
//! use stipula::parameter::ParameterController;
//! use stipula::store::{ParameterStore, ValueStore};
//!
//! let mut controller = ParameterController::new();
//! controller
//!     .declare::<i64>("threads")
//!     .set_default(4)
//!     .is_required()
//!     .check_range(1, 256);
//!
//! let mut store = ParameterStore::new();
//! controller.validate(&mut store).unwrap();
//! assert_eq!(*store.get::<i64>("threads").unwrap(), 4);
//! ```

pub mod datatype;
pub mod error;
pub mod input;
pub mod parameter;
pub mod printer;
pub mod settings;
pub mod store;
