//! # cadmeasure
//!
//! Diameter measurement for circular and cylindrical CAD features.
//!
//! Given a selection of sub-elements from a document, the diameter
//! measurement decides whether the selection can be measured, whether it
//! should win over competing measurement kinds, stores the selected element
//! as its subject, and computes the diameter plus an anchor for the label.
//!
//! ## Quick Start
//!
//! ```rust
//! use cadmeasure::measure::{MeasureDiameter, MeasureKind, MeasureSelectionItem, SubObjectRef};
//! use cadmeasure::topology::{Circle, Edge, Face, Shape, Surface};
//! use cadmeasure::types::{Point3, Vector3};
//! use cadmeasure::Document;
//!
//! let mut doc = Document::new();
//! let disc = Face::with_outer_wire(
//!     Surface::plane(Point3::origin(), Vector3::z()),
//!     vec![Edge::circle(Circle::xy(Point3::origin(), 5.0))],
//! );
//! let part = doc.add_feature("Disc", Shape::Face(disc));
//!
//! let selection = vec![MeasureSelectionItem::new(SubObjectRef::new(part, "Edge1"))];
//! assert!(MeasureDiameter::is_valid_selection(&selection, &doc));
//! assert!(MeasureDiameter::is_prioritized_selection(&selection, &doc));
//!
//! let mut measure = MeasureDiameter::new();
//! measure.parse_selection(&selection, &doc)?;
//! assert_eq!(measure.diameter(), 10.0);
//! # Ok::<(), cadmeasure::MeasureError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`topology`] - in-memory B-rep: curves, surfaces, edges, faces, shapes
//! - [`measure`] - host service traits, element classification, the
//!   [`MeasureKind`](measure::MeasureKind) trait and [`MeasureDiameter`]
//! - [`property`] - the subject link and diameter output properties
//! - [`document`] - a reference host that resolves links, placements and
//!   element names, and runs recomputes

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod document;
pub mod error;
pub mod measure;
pub mod notification;
pub mod property;
pub mod topology;
pub mod types;

// Re-export commonly used types
pub use error::{MeasureError, Result};
pub use types::{DocumentStatus, ObjectId, Placement, PropertyFlags, ShapeOptions};

pub use measure::{
    MeasureConfiguration, MeasureDiameter, MeasureElementType, MeasureHost, MeasureKind,
    MeasureRadiusInfo, MeasureSelection, MeasureSelectionItem, SubObjectRef,
};

pub use document::{Document, DocumentConfiguration};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
