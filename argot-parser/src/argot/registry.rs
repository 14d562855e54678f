//! Function registry
//!
//!     Grammar declarations refer to behavior by numeric id instead of embedding closures: a
//!     node names the id of its run callback, default-value provider or argument-naming
//!     function, and resolves it against a [FunctionRegistry] when it is built.
//!
//! Lifecycle
//!
//!     Populate the registry completely, then build the grammar against it. Nodes resolve their
//!     ids eagerly, so an id registered after the node was built is never seen. The registry is
//!     read-only during parsing; there is no removal.
//!
//!     The registry is an ordinary value, not a global. Tests build a fresh one each time.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::error::{RegistryError, ValueOrderError};
use super::key::CliKey;
use super::values::ValueOrder;

/// Identifier a grammar node uses to refer to a registered callback.
pub type FunctionId = u32;

/// Invoked with a function's key and its collected values.
pub type RunFn = dyn Fn(&CliKey, &ValueOrder) + Send + Sync;

/// Injects a placeholder entry for an optional element that was absent.
pub type DefaultValueFn = dyn Fn(&mut ValueOrder) -> Result<(), ValueOrderError> + Send + Sync;

/// Names the value of an option's `index`-th argument.
pub type ArgNameFn = dyn Fn(usize) -> String + Send + Sync;

/// A registered callback, tagged with its shape.
#[derive(Clone)]
pub enum Callback {
    Run(Arc<RunFn>),
    DefaultValue(Arc<DefaultValueFn>),
    ArgName(Arc<ArgNameFn>),
}

impl Callback {
    pub fn shape(&self) -> &'static str {
        match self {
            Callback::Run(_) => <RunFn as CallbackShape>::SHAPE,
            Callback::DefaultValue(_) => <DefaultValueFn as CallbackShape>::SHAPE,
            Callback::ArgName(_) => <ArgNameFn as CallbackShape>::SHAPE,
        }
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callback::{}", self.shape())
    }
}

/// A callback signature that can be pulled out of a [Callback].
pub trait CallbackShape {
    const SHAPE: &'static str;

    fn extract(callback: &Callback) -> Option<Arc<Self>>;
}

impl CallbackShape for RunFn {
    const SHAPE: &'static str = "run";

    fn extract(callback: &Callback) -> Option<Arc<Self>> {
        match callback {
            Callback::Run(f) => Some(Arc::clone(f)),
            _ => None,
        }
    }
}

impl CallbackShape for DefaultValueFn {
    const SHAPE: &'static str = "default-value";

    fn extract(callback: &Callback) -> Option<Arc<Self>> {
        match callback {
            Callback::DefaultValue(f) => Some(Arc::clone(f)),
            _ => None,
        }
    }
}

impl CallbackShape for ArgNameFn {
    const SHAPE: &'static str = "arg-name";

    fn extract(callback: &Callback) -> Option<Arc<Self>> {
        match callback {
            Callback::ArgName(f) => Some(Arc::clone(f)),
            _ => None,
        }
    }
}

/// Lookup from numeric ids to callbacks.
#[derive(Debug, Clone, Default)]
pub struct FunctionRegistry {
    functions: HashMap<FunctionId, Callback>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_function(&mut self, id: FunctionId, callback: Callback) -> Result<(), RegistryError> {
        if self.functions.contains_key(&id) {
            return Err(RegistryError::AlreadyRegistered(id));
        }
        self.functions.insert(id, callback);
        Ok(())
    }

    pub fn add_run<F>(&mut self, id: FunctionId, f: F) -> Result<(), RegistryError>
    where
        F: Fn(&CliKey, &ValueOrder) + Send + Sync + 'static,
    {
        self.add_function(id, Callback::Run(Arc::new(f)))
    }

    pub fn add_default_value<F>(&mut self, id: FunctionId, f: F) -> Result<(), RegistryError>
    where
        F: Fn(&mut ValueOrder) -> Result<(), ValueOrderError> + Send + Sync + 'static,
    {
        self.add_function(id, Callback::DefaultValue(Arc::new(f)))
    }

    pub fn add_arg_name<F>(&mut self, id: FunctionId, f: F) -> Result<(), RegistryError>
    where
        F: Fn(usize) -> String + Send + Sync + 'static,
    {
        self.add_function(id, Callback::ArgName(Arc::new(f)))
    }

    pub fn get_function(&self, id: FunctionId) -> Result<&Callback, RegistryError> {
        self.functions
            .get(&id)
            .ok_or(RegistryError::NotRegistered(id))
    }

    /// Resolve `id` and check that it holds a callback of shape `S`.
    pub fn get<S>(&self, id: FunctionId) -> Result<Arc<S>, RegistryError>
    where
        S: CallbackShape + ?Sized,
    {
        let callback = self.get_function(id)?;
        S::extract(callback).ok_or(RegistryError::ShapeMismatch {
            id,
            expected: S::SHAPE,
            found: callback.shape(),
        })
    }

    pub fn contains(&self, id: FunctionId) -> bool {
        self.functions.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
