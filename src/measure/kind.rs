//! The measurement-kind plug-in surface

use super::element::MeasureSelection;
use super::host::MeasureHost;
use crate::error::Result;
use crate::property::PropertyMeta;
use crate::types::{ObjectId, Placement};

/// A pluggable interpretation of a selection as a measurable quantity.
///
/// A dispatcher asks every registered kind whether a selection is valid for
/// it and whether it should win over the others, then creates the winner and
/// hands it the selection.
pub trait MeasureKind {
    /// Host type name of the measurement object
    const TYPE_NAME: &'static str;

    /// Human-readable name of the measured quantity
    const LABEL: &'static str;

    /// Whether `selection` can be measured by this kind
    fn is_valid_selection<H: MeasureHost + ?Sized>(selection: &MeasureSelection, host: &H) -> bool;

    /// Whether this kind should be preferred for `selection`
    fn is_prioritized_selection<H: MeasureHost + ?Sized>(
        selection: &MeasureSelection,
        host: &H,
    ) -> bool;

    /// Store the subject described by an accepted selection
    fn parse_selection<H: MeasureHost + ?Sized>(
        &mut self,
        selection: &MeasureSelection,
        host: &H,
    ) -> Result<()>;

    /// Recompute the measured value from the stored subject
    fn execute<H: MeasureHost + ?Sized>(&mut self, host: &H) -> Result<()>;

    /// Where the annotation for this measurement is anchored
    fn placement<H: MeasureHost + ?Sized>(&self, host: &H) -> Result<Placement>;

    /// Objects this measurement depends on
    fn subject(&self) -> Vec<Option<ObjectId>>;

    /// Last successfully computed value
    fn result_value(&self) -> f64;

    fn base(&self) -> &MeasureBase;

    fn base_mut(&mut self) -> &mut MeasureBase;
}

/// State shared by every measurement kind
#[derive(Debug, Clone, Default)]
pub struct MeasureBase {
    label: String,
    touched: bool,
}

impl MeasureBase {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            touched: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the measurement needs a recompute
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn purge_touched(&mut self) {
        self.touched = false;
    }

    /// Base change handling: inputs touch the owner, outputs do not
    pub fn on_changed(&mut self, meta: &PropertyMeta) {
        if !meta.is_output() {
            self.touched = true;
        }
    }
}
