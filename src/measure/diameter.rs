//! Diameter measurement of circular edges and cylindrical faces
//!
//! Accepts a single selected element: a circle, an arc, a cylinder, or a
//! planar/generic face with circular boundary edges. The subject is stored as
//! a one-entry link; recomputation asks the host's radius evaluator for the
//! subject and doubles the radius.

use super::classifier::ShapeElementClassifier;
use super::config::MeasureConfiguration;
use super::element::{MeasureElementType, MeasureRadiusInfo, MeasureSelection, MeasureSelectionItem};
use super::host::{ElementTypeResolver, MeasureHost, ShapeResolver};
use super::kind::{MeasureBase, MeasureKind};
use crate::error::{MeasureError, Result};
use crate::property::{PropertyDistance, PropertyLinkSub, PropertyMeta};
use crate::types::{ObjectId, Placement, PropertyFlags};
use nalgebra::Point3;
use tracing::{debug, warn};

const ELEMENT_META: PropertyMeta = PropertyMeta::new(
    "Element",
    "Measurement",
    "Element to get the diameter from",
    PropertyFlags::empty(),
);

const DIAMETER_META: PropertyMeta = PropertyMeta::new(
    "Diameter",
    "Measurement",
    "Diameter of selection",
    PropertyFlags::READ_ONLY.union(PropertyFlags::OUTPUT),
);

/// Message carried by a failed execute
pub const CANNOT_CALCULATE: &str = "Cannot calculate diameter";

/// Properties of [`MeasureDiameter`] that report changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiameterProperty {
    Element,
    Diameter,
}

/// Diameter measurement object
#[derive(Debug, Clone)]
pub struct MeasureDiameter {
    base: MeasureBase,
    element: PropertyLinkSub,
    diameter: PropertyDistance,
    config: MeasureConfiguration,
}

impl MeasureDiameter {
    /// Create an empty measurement with the default configuration
    pub fn new() -> Self {
        Self::with_config(MeasureConfiguration::default())
    }

    pub fn with_config(config: MeasureConfiguration) -> Self {
        let mut element = PropertyLinkSub::new(ELEMENT_META);
        element.set_scope(config.link_scope);
        element.set_allow_external(config.allow_external);

        Self {
            base: MeasureBase::new(Self::LABEL),
            element,
            diameter: PropertyDistance::new(DIAMETER_META, 0.0),
            config,
        }
    }

    pub fn config(&self) -> &MeasureConfiguration {
        &self.config
    }

    /// Subject link property
    pub fn element(&self) -> &PropertyLinkSub {
        &self.element
    }

    /// Diameter output property
    pub fn diameter_property(&self) -> &PropertyDistance {
        &self.diameter
    }

    /// Last successfully computed diameter
    pub fn diameter(&self) -> f64 {
        self.diameter.value()
    }

    // ==================== Selection policy ====================

    /// Validity check using an explicit configuration
    pub fn is_valid_selection_with<H>(
        selection: &MeasureSelection,
        host: &H,
        config: &MeasureConfiguration,
    ) -> bool
    where
        H: ElementTypeResolver + ShapeResolver + ?Sized,
    {
        let Some(item) = single_element(selection) else {
            debug!(count = selection.len(), "diameter needs exactly one element");
            return false;
        };

        let element = &item.object;
        let classifier = ShapeElementClassifier::with_options(host, config.shape_options);
        let element_type = classifier.classify(element);

        let valid = match element_type {
            MeasureElementType::Invalid => false,
            MeasureElementType::Circle | MeasureElementType::Arc | MeasureElementType::Cylinder => true,
            MeasureElementType::Surface | MeasureElementType::Plane => {
                classifier.has_any_circular_edge(element)
            }
            MeasureElementType::Point
            | MeasureElementType::Line
            | MeasureElementType::LineSegment
            | MeasureElementType::Curve
            | MeasureElementType::Cone
            | MeasureElementType::Torus
            | MeasureElementType::Volume => false,
        };
        debug!(element = %element, %element_type, valid, "diameter selection validity");
        valid
    }

    /// Priority check using an explicit configuration
    pub fn is_prioritized_selection_with<H>(
        selection: &MeasureSelection,
        host: &H,
        config: &MeasureConfiguration,
    ) -> bool
    where
        H: ElementTypeResolver + ShapeResolver + ?Sized,
    {
        let Some(item) = single_element(selection) else {
            return false;
        };

        let element = &item.object;
        let classifier = ShapeElementClassifier::with_options(host, config.shape_options);
        let element_type = classifier.classify(element);

        let prioritized = match element_type {
            MeasureElementType::Circle | MeasureElementType::Arc | MeasureElementType::Cylinder => true,
            MeasureElementType::Surface | MeasureElementType::Plane => {
                classifier.has_only_circular_edges(element)
            }
            MeasureElementType::Invalid
            | MeasureElementType::Point
            | MeasureElementType::Line
            | MeasureElementType::LineSegment
            | MeasureElementType::Curve
            | MeasureElementType::Cone
            | MeasureElementType::Torus
            | MeasureElementType::Volume => false,
        };
        debug!(element = %element, %element_type, prioritized, "diameter selection priority");
        prioritized
    }

    // ==================== Subject ====================

    /// Replace the subject and react to the change.
    ///
    /// This is the only path that mutates the subject link.
    pub fn set_element<H: MeasureHost + ?Sized>(
        &mut self,
        object: Option<ObjectId>,
        sub_values: Vec<String>,
        host: &H,
    ) {
        self.element.set_value(object, sub_values);
        debug!(object = ?self.element.value(), subs = ?self.element.sub_values(), "diameter subject set");
        self.on_changed(DiameterProperty::Element, host);
    }

    /// Objects referenced by the subject, for dependency tracking
    pub fn subject(&self) -> Vec<Option<ObjectId>> {
        vec![self.element.value()]
    }

    // ==================== Computation ====================

    /// Evaluate the first subject element.
    ///
    /// An empty subject, or a missing or invalid evaluation, yields
    /// [`MeasureRadiusInfo::invalid`].
    pub fn measure_info_first<H: MeasureHost + ?Sized>(&self, host: &H) -> MeasureRadiusInfo {
        let Some(subject) = self.element.first_sub_object() else {
            return MeasureRadiusInfo::invalid();
        };

        match host.measure_radius(&subject) {
            Some(info) if info.valid => info,
            _ => MeasureRadiusInfo::invalid(),
        }
    }

    /// Recompute the diameter; on failure the previous value is kept
    pub fn execute<H: MeasureHost + ?Sized>(&mut self, host: &H) -> Result<()> {
        let info = self.measure_info_first(host);
        if !info.valid {
            warn!(subject = ?self.element.first_sub_object(), "{}", CANNOT_CALCULATE);
            return Err(MeasureError::CannotCalculate(CANNOT_CALCULATE.to_string()));
        }

        self.diameter.assign(info.radius * 2.0);
        self.base.on_changed(self.diameter.meta());
        debug!(diameter = self.diameter.value(), "diameter computed");
        Ok(())
    }

    /// Execute and clear the touched state on success
    pub fn recompute<H: MeasureHost + ?Sized>(&mut self, host: &H) -> Result<()> {
        self.execute(host)?;
        self.base.purge_touched();
        Ok(())
    }

    /// Label anchor: the evaluated point with identity orientation
    pub fn placement<H: MeasureHost + ?Sized>(&self, host: &H) -> Result<Placement> {
        self.point_on_curve(host).map(Placement::from_position)
    }

    /// Anchor point of the current subject
    pub fn point_on_curve<H: MeasureHost + ?Sized>(&self, host: &H) -> Result<Point3<f64>> {
        let info = self.measure_info_first(host);
        if info.valid {
            Ok(info.point_on_curve)
        } else {
            Err(MeasureError::CannotCalculate(CANNOT_CALCULATE.to_string()))
        }
    }

    // ==================== Change handling ====================

    /// React to a property change.
    ///
    /// Ignored while the host restores or removes objects. The base handler
    /// runs first; a subject change then triggers a recompute whose status is
    /// discarded, so failures stay visible only through the touched flag and
    /// the unchanged diameter.
    pub fn on_changed<H: MeasureHost + ?Sized>(&mut self, prop: DiameterProperty, host: &H) {
        if host.is_restoring() || host.is_removing() {
            return;
        }

        let meta = match prop {
            DiameterProperty::Element => *self.element.meta(),
            DiameterProperty::Diameter => *self.diameter.meta(),
        };
        // Base handler runs before the recompute so a successful subject
        // change leaves the measurement untouched.
        self.base.on_changed(&meta);

        if prop == DiameterProperty::Element {
            let _ = self.recompute(host);
        }
    }
}

impl Default for MeasureDiameter {
    fn default() -> Self {
        Self::new()
    }
}

impl MeasureKind for MeasureDiameter {
    const TYPE_NAME: &'static str = "Measure::MeasureDiameter";
    const LABEL: &'static str = "Diameter";

    fn is_valid_selection<H: MeasureHost + ?Sized>(selection: &MeasureSelection, host: &H) -> bool {
        Self::is_valid_selection_with(selection, host, &MeasureConfiguration::default())
    }

    fn is_prioritized_selection<H: MeasureHost + ?Sized>(
        selection: &MeasureSelection,
        host: &H,
    ) -> bool {
        Self::is_prioritized_selection_with(selection, host, &MeasureConfiguration::default())
    }

    fn parse_selection<H: MeasureHost + ?Sized>(
        &mut self,
        selection: &MeasureSelection,
        host: &H,
    ) -> Result<()> {
        let item = selection
            .first()
            .ok_or_else(|| MeasureError::InvalidSelection("empty selection".to_string()))?;
        let object = item.object.object;
        let sub_name = item.object.sub_name.clone();
        self.set_element(Some(object), vec![sub_name], host);
        Ok(())
    }

    fn execute<H: MeasureHost + ?Sized>(&mut self, host: &H) -> Result<()> {
        MeasureDiameter::execute(self, host)
    }

    fn placement<H: MeasureHost + ?Sized>(&self, host: &H) -> Result<Placement> {
        MeasureDiameter::placement(self, host)
    }

    fn subject(&self) -> Vec<Option<ObjectId>> {
        MeasureDiameter::subject(self)
    }

    fn result_value(&self) -> f64 {
        self.diameter()
    }

    fn base(&self) -> &MeasureBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut MeasureBase {
        &mut self.base
    }
}

fn single_element(selection: &MeasureSelection) -> Option<&MeasureSelectionItem> {
    match selection.as_slice() {
        [item] => Some(item),
        _ => None,
    }
}
