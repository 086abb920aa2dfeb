//! Emitter state and the per-run facade.

use gdwrap_api::ClassInfo;
use indexmap::{IndexMap, IndexSet};

use crate::diagnostics::Diagnostics;
use crate::tables::Tables;
use crate::{Error, GenResult};

use super::naming::Claim;

/// Configuration for wrapper emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Namespace the wrapper classes are emitted into.
    pub(super) namespace: String,
    /// Emit the `[Obsolete]` constructor guard.
    pub(super) ctor_guard: bool,
    /// Emit the static `Instantiate`/`Bind` helpers.
    pub(super) instantiate_helpers: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: "GDExtension.Wrappers".to_string(),
            ctor_guard: true,
            instantiate_helpers: true,
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the namespace wrapper classes are emitted into.
    pub fn namespace(mut self, value: impl Into<String>) -> Self {
        self.namespace = value.into();
        self
    }

    /// Set whether to emit the constructor guard.
    pub fn ctor_guard(mut self, value: bool) -> Self {
        self.ctor_guard = value;
        self
    }

    /// Set whether to emit the static `Instantiate`/`Bind` helpers.
    pub fn instantiate_helpers(mut self, value: bool) -> Self {
        self.instantiate_helpers = value;
        self
    }
}

/// C# emitter for one wrapped class.
///
/// Owns every piece of mutable state for the class - claimed names, the
/// interned-name cache, diagnostics, and the output buffer - so classes
/// can be generated independently and in parallel.
pub struct ClassEmitter<'a> {
    pub(super) tables: &'a Tables<'a>,
    pub(super) config: &'a Config,
    pub(super) class: &'a ClassInfo,

    /// Host-exposed names already claimed on this type, with their claimant.
    pub(super) occupied_names: IndexMap<String, Claim>,
    /// Native names referenced so far, in first-use order. Each entry
    /// becomes one `_cached_*` StringName constant in the trailer.
    pub(super) name_cache: IndexSet<String>,
    pub(super) diagnostics: Diagnostics,
    /// Output buffer.
    pub(super) output: String,
}

impl<'a> ClassEmitter<'a> {
    pub fn new(class: &'a ClassInfo, tables: &'a Tables<'a>, config: &'a Config) -> Self {
        Self {
            tables,
            config,
            class,
            occupied_names: IndexMap::new(),
            name_cache: IndexSet::new(),
            diagnostics: Diagnostics::new(),
            output: String::new(),
        }
    }

    /// Emit the complete wrapper unit for this class.
    pub fn emit(mut self) -> GenResult<String> {
        self.emit_unit()?;
        Ok((self.output, self.diagnostics))
    }
}

/// One generated wrapper unit.
#[derive(Debug, Clone)]
pub struct GeneratedClass {
    pub native_name: String,
    pub type_name: String,
    pub source: String,
    pub diagnostics: Diagnostics,
}

/// Generate wrappers for every non-builtin class in the tables.
///
/// Classes are emitted in dump order. A class that fails (name-collision
/// exhaustion) yields an `Err` entry without affecting its siblings.
pub fn generate(tables: &Tables, config: &Config) -> Vec<Result<GeneratedClass, Error>> {
    tables
        .generated_classes()
        .map(|class| {
            ClassEmitter::new(class, tables, config)
                .emit()
                .map(|(source, diagnostics)| GeneratedClass {
                    native_name: class.name.clone(),
                    type_name: class.host_type_name().to_string(),
                    source,
                    diagnostics,
                })
        })
        .collect()
}
