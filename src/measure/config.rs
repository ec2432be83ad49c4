//! Measurement configuration

use crate::property::LinkScope;
use crate::types::ShapeOptions;

/// Configuration options for measurement kinds.
#[derive(Debug, Clone)]
pub struct MeasureConfiguration {
    /// Flags used when a selection element is resolved to a shape for
    /// boundary inspection.
    ///
    /// Default: sub-element, link resolution and transform all enabled.
    pub shape_options: ShapeOptions,

    /// Scope stamped on the subject link property.
    pub link_scope: LinkScope,

    /// When `true`, the subject may reference objects in other documents.
    pub allow_external: bool,
}

impl Default for MeasureConfiguration {
    fn default() -> Self {
        Self {
            shape_options: ShapeOptions::default(),
            link_scope: LinkScope::Global,
            allow_external: true,
        }
    }
}
