//! Multiplier factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::MatrixError;
use crate::fork_join::ExecutionMode;
use crate::options::Options;
use crate::strategy::{ClassicalMultiplier, Multiplier, StrassenMultiplier};

/// Factory trait for creating multipliers.
pub trait MultiplierFactory: Send + Sync {
    /// Get or create a multiplier by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Multiplier>, MatrixError>;

    /// List all available multiplier names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    options: Options,
    cache: RwLock<HashMap<String, Arc<dyn Multiplier>>>,
}

impl DefaultFactory {
    /// Create a factory using default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    /// Create a factory whose Strassen multipliers use `options`.
    ///
    /// The execution mode in `options` is ignored; each name fixes its own.
    #[must_use]
    pub fn with_options(options: Options) -> Self {
        Self {
            options: options.normalize(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_multiplier(&self, name: &str) -> Result<Arc<dyn Multiplier>, MatrixError> {
        match name {
            "classical" | "usual" => Ok(Arc::new(ClassicalMultiplier::new())),
            "strassen" | "sequential" => {
                let opts = Options {
                    mode: ExecutionMode::Sequential,
                    ..self.options.clone()
                };
                Ok(Arc::new(StrassenMultiplier::with_options(opts)?))
            }
            "parallel" => {
                let opts = Options {
                    mode: ExecutionMode::Parallel,
                    ..self.options.clone()
                };
                Ok(Arc::new(StrassenMultiplier::with_options(opts)?))
            }
            _ => Err(MatrixError::Config(format!("unknown multiplier: {name}"))),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiplierFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Multiplier>, MatrixError> {
        if let Some(m) = self.cache.read().get(name) {
            return Ok(Arc::clone(m));
        }

        let m = self.create_multiplier(name)?;
        self.cache.write().insert(name.to_string(), Arc::clone(&m));
        Ok(m)
    }

    fn available(&self) -> Vec<&str> {
        vec!["classical", "strassen", "parallel"]
    }
}
