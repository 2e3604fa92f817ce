//! Bytecode transform and name remapping boundary
//!
//! These traits describe what the in-game class-loading framework consumes.
//! The mapping data and the bytecode rewriting live outside this crate; the
//! launcher only defines the shapes and the ordering of transformers.

#![allow(dead_code)]

use std::fmt;

/// Priority given to transformers that do not choose one
pub const DEFAULT_PRIORITY: i32 = 1000;

/// Rewrites class bytes at load time
pub trait ClassTransformer: Send + Sync {
    fn should_transform(&self, class_name: &str) -> bool;

    fn transform(&self, class_name: &str, class_bytes: Vec<u8>) -> Vec<u8>;

    /// Unqualified type name of the implementor
    fn name(&self) -> &str {
        let full = std::any::type_name_of_val(self);
        let base = full.split('<').next().unwrap_or(full);
        base.rsplit("::").next().unwrap_or(base)
    }

    /// Lower runs first
    fn priority(&self) -> i32 {
        DEFAULT_PRIORITY
    }
}

/// Source of obfuscated-to-readable names
pub trait MappingService: Send + Sync {
    fn map_method_name(&self, owner: &str, name: &str, descriptor: &str) -> String;

    fn map_field_name(&self, owner: &str, name: &str) -> String;

    fn map_class_name(&self, name: &str) -> String;
}

/// Adapts a [`MappingService`] to the remapper shape expected by the
/// class-loading framework. Only forward mapping is supported.
#[derive(Debug, Clone)]
pub struct Remapper<M> {
    mappings: M,
}

impl<M: MappingService> Remapper<M> {
    pub fn new(mappings: M) -> Self {
        Self { mappings }
    }

    pub fn map_method_name(&self, owner: &str, name: &str, descriptor: &str) -> String {
        self.mappings.map_method_name(owner, name, descriptor)
    }

    /// The field descriptor is not used for lookup
    pub fn map_field_name(&self, owner: &str, name: &str, _descriptor: &str) -> String {
        self.mappings.map_field_name(owner, name)
    }

    pub fn map(&self, type_name: &str) -> String {
        self.mappings.map_class_name(type_name)
    }

    pub fn unmap(&self, type_name: &str) -> String {
        type_name.to_string()
    }

    pub fn map_desc(&self, descriptor: &str) -> String {
        descriptor.to_string()
    }

    pub fn unmap_desc(&self, descriptor: &str) -> String {
        descriptor.to_string()
    }
}

/// Transformers applied in ascending priority; ties keep registration order
#[derive(Default)]
pub struct TransformerChain {
    transformers: Vec<Box<dyn ClassTransformer>>,
}

impl TransformerChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, transformer: impl ClassTransformer + 'static) {
        self.transformers.push(Box::new(transformer));
        // Stable sort keeps registration order within a priority
        self.transformers.sort_by_key(|t| t.priority());
    }

    pub fn len(&self) -> usize {
        self.transformers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transformers.is_empty()
    }

    /// Names in application order
    pub fn names(&self) -> Vec<&str> {
        self.transformers.iter().map(|t| t.name()).collect()
    }

    /// Run every applicable transformer over `class_bytes`
    pub fn apply(&self, class_name: &str, class_bytes: Vec<u8>) -> Vec<u8> {
        self.transformers
            .iter()
            .filter(|t| t.should_transform(class_name))
            .fold(class_bytes, |bytes, t| {
                tracing::debug!(transformer = t.name(), class = class_name, "transforming");
                t.transform(class_name, bytes)
            })
    }
}

impl fmt::Debug for TransformerChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformerChain")
            .field("transformers", &self.names())
            .finish()
    }
}
