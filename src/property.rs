//! Typed properties owned by measurement objects
//!
//! Only the two property shapes measurements need are modelled: a link to a
//! sub-element of another object, and a scalar length. Each carries the
//! metadata a host editor shows (name, group, tooltip, flags).

use crate::error::{MeasureError, Result};
use crate::measure::SubObjectRef;
use crate::types::{ObjectId, PropertyFlags};

/// Property metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyMeta {
    pub name: &'static str,
    pub group: &'static str,
    pub doc: &'static str,
    pub flags: PropertyFlags,
}

impl PropertyMeta {
    pub const fn new(
        name: &'static str,
        group: &'static str,
        doc: &'static str,
        flags: PropertyFlags,
    ) -> Self {
        Self {
            name,
            group,
            doc,
            flags,
        }
    }

    pub fn is_read_only(&self) -> bool {
        self.flags.contains(PropertyFlags::READ_ONLY)
    }

    pub fn is_output(&self) -> bool {
        self.flags.contains(PropertyFlags::OUTPUT)
    }
}

/// How far a link may reach from its owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LinkScope {
    /// Same container as the owner
    #[default]
    Local,
    /// Children of the owner
    Child,
    /// Anywhere in the document
    Global,
    /// Anywhere, and not shown in the dependency graph
    Hidden,
}

/// Link to an object plus a list of its sub-element paths
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyLinkSub {
    meta: PropertyMeta,
    value: Option<ObjectId>,
    sub_values: Vec<String>,
    scope: LinkScope,
    allow_external: bool,
}

impl PropertyLinkSub {
    pub fn new(meta: PropertyMeta) -> Self {
        Self {
            meta,
            value: None,
            sub_values: Vec::new(),
            scope: LinkScope::default(),
            allow_external: false,
        }
    }

    pub fn meta(&self) -> &PropertyMeta {
        &self.meta
    }

    pub fn scope(&self) -> LinkScope {
        self.scope
    }

    pub fn set_scope(&mut self, scope: LinkScope) {
        self.scope = scope;
    }

    pub fn allow_external(&self) -> bool {
        self.allow_external
    }

    pub fn set_allow_external(&mut self, allow: bool) {
        self.allow_external = allow;
    }

    /// Linked object, if any
    pub fn value(&self) -> Option<ObjectId> {
        self.value
    }

    pub fn sub_values(&self) -> &[String] {
        &self.sub_values
    }

    /// Replace object and sub-element list in one write.
    ///
    /// A null object id clears the link.
    pub fn set_value(&mut self, object: Option<ObjectId>, sub_values: Vec<String>) {
        self.value = object.and_then(ObjectId::non_null);
        self.sub_values = sub_values;
    }

    /// Clear the link
    pub fn clear(&mut self) {
        self.value = None;
        self.sub_values.clear();
    }

    /// True when there is no object or no sub-element to evaluate
    pub fn is_empty(&self) -> bool {
        self.value.is_none() || self.sub_values.is_empty()
    }

    /// First `(object, sub-element)` pair, if the link is not empty
    pub fn first_sub_object(&self) -> Option<SubObjectRef> {
        let object = self.value?;
        let sub = self.sub_values.first()?;
        Some(SubObjectRef::new(object, sub.clone()))
    }
}

/// A length-valued scalar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyDistance {
    meta: PropertyMeta,
    value: f64,
}

impl PropertyDistance {
    pub fn new(meta: PropertyMeta, initial: f64) -> Self {
        Self {
            meta,
            value: initial,
        }
    }

    pub fn meta(&self) -> &PropertyMeta {
        &self.meta
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Editor-facing write; rejected for read-only properties
    pub fn set_value(&mut self, value: f64) -> Result<()> {
        if self.meta.is_read_only() {
            return Err(MeasureError::ReadOnlyProperty(self.meta.name));
        }
        self.value = value;
        Ok(())
    }

    /// Owner-side write that bypasses the read-only flag
    pub(crate) fn assign(&mut self, value: f64) {
        self.value = value;
    }
}
