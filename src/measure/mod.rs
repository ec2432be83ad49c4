//! Measurement kinds and the host services they consume

pub mod classifier;
pub mod config;
pub mod diameter;
pub mod element;
pub mod host;
pub mod kind;

pub use classifier::{CircularEdges, ShapeElementClassifier};
pub use config::MeasureConfiguration;
pub use diameter::{DiameterProperty, MeasureDiameter, CANNOT_CALCULATE};
pub use element::{
    MeasureElementType, MeasureRadiusInfo, MeasureSelection, MeasureSelectionItem, SubObjectRef,
};
pub use host::{DocumentState, ElementTypeResolver, MeasureHost, RadiusEvaluator, ShapeResolver};
pub use kind::{MeasureBase, MeasureKind};
