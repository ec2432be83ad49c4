//! Document: the object table measurements resolve against
//!
//! The document owns features (objects carrying a shape), links (objects
//! that show another object's shape under their own placement) and groups.
//! It implements every host service a measurement kind consumes, and runs
//! measurement recomputes, recording failures as notifications.

use crate::error::{MeasureError, Result};
use crate::measure::{
    DocumentState, ElementTypeResolver, MeasureElementType, MeasureKind, MeasureRadiusInfo,
    RadiusEvaluator, ShapeResolver, SubObjectRef,
};
use crate::notification::{Notification, NotificationCollection, NotificationType};
use crate::topology::{split_sub_name, CurveType, ElementName, Face, Shape, SurfaceType};
use crate::types::{DocumentStatus, ObjectId, Placement, ShapeOptions};
use indexmap::IndexMap;
use tracing::{debug, trace, warn};

/// Configuration options for a document.
#[derive(Debug, Clone)]
pub struct DocumentConfiguration {
    /// Sweep tolerance (radians) below a full turn for a circular edge to
    /// still count as a full circle rather than an arc.
    pub angular_tolerance: f64,

    /// Longest chain of links followed before resolution gives up.
    pub max_link_depth: usize,
}

impl Default for DocumentConfiguration {
    fn default() -> Self {
        Self {
            angular_tolerance: 1e-9,
            max_link_depth: 16,
        }
    }
}

/// What an object contributes to the document
#[derive(Debug, Clone)]
pub enum ObjectKind {
    /// Object carrying its own shape
    Feature(Shape),
    /// Object showing another object's shape
    Link(ObjectId),
    /// Container whose shape is the compound of its children
    Group,
}

/// An object in the document
#[derive(Debug, Clone)]
pub struct DocumentObject {
    pub id: ObjectId,
    pub label: String,
    pub kind: ObjectKind,
    pub placement: Placement,
    pub children: Vec<ObjectId>,
}

impl DocumentObject {
    fn new(id: ObjectId, label: String, kind: ObjectKind) -> Self {
        Self {
            id,
            label,
            kind,
            placement: Placement::identity(),
            children: Vec::new(),
        }
    }
}

/// A CAD document
#[derive(Debug, Clone)]
pub struct Document {
    objects: IndexMap<ObjectId, DocumentObject>,
    next_id: u64,
    status: DocumentStatus,
    config: DocumentConfiguration,
    notifications: NotificationCollection,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::with_config(DocumentConfiguration::default())
    }

    pub fn with_config(config: DocumentConfiguration) -> Self {
        Self {
            objects: IndexMap::new(),
            next_id: 1,
            status: DocumentStatus::empty(),
            config,
            notifications: NotificationCollection::new(),
        }
    }

    pub fn config(&self) -> &DocumentConfiguration {
        &self.config
    }

    // ==================== Objects ====================

    fn insert(&mut self, label: impl Into<String>, kind: ObjectKind) -> ObjectId {
        let id = ObjectId::new(self.next_id);
        self.next_id += 1;
        self.objects.insert(id, DocumentObject::new(id, label.into(), kind));
        id
    }

    /// Add an object carrying `shape`
    pub fn add_feature(&mut self, label: impl Into<String>, shape: Shape) -> ObjectId {
        self.insert(label, ObjectKind::Feature(shape))
    }

    /// Add a link to an existing object
    pub fn add_link(&mut self, label: impl Into<String>, target: ObjectId) -> Result<ObjectId> {
        if !self.objects.contains_key(&target) {
            return Err(MeasureError::ObjectNotFound(target));
        }
        Ok(self.insert(label, ObjectKind::Link(target)))
    }

    /// Add a group over existing objects
    pub fn add_group(&mut self, label: impl Into<String>, children: Vec<ObjectId>) -> Result<ObjectId> {
        if let Some(missing) = children.iter().find(|c| !self.objects.contains_key(*c)) {
            return Err(MeasureError::ObjectNotFound(*missing));
        }
        let id = self.insert(label, ObjectKind::Group);
        if let Some(group) = self.objects.get_mut(&id) {
            group.children = children;
        }
        Ok(id)
    }

    pub fn object(&self, id: ObjectId) -> Option<&DocumentObject> {
        self.objects.get(&id)
    }

    pub fn object_by_label(&self, label: &str) -> Option<&DocumentObject> {
        self.objects.values().find(|o| o.label == label)
    }

    /// Objects in insertion order
    pub fn objects(&self) -> impl Iterator<Item = &DocumentObject> {
        self.objects.values()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn set_placement(&mut self, id: ObjectId, placement: Placement) -> Result<()> {
        let object = self
            .objects
            .get_mut(&id)
            .ok_or(MeasureError::ObjectNotFound(id))?;
        object.placement = placement;
        Ok(())
    }

    /// Replace the shape of a feature
    pub fn set_shape(&mut self, id: ObjectId, shape: Shape) -> Result<()> {
        let object = self
            .objects
            .get_mut(&id)
            .ok_or(MeasureError::ObjectNotFound(id))?;
        object.kind = ObjectKind::Feature(shape);
        Ok(())
    }

    /// Remove an object and detach it from every group
    pub fn remove_object(&mut self, id: ObjectId) -> Result<DocumentObject> {
        let removed = self
            .objects
            .shift_remove(&id)
            .ok_or(MeasureError::ObjectNotFound(id))?;
        for object in self.objects.values_mut() {
            object.children.retain(|c| *c != id);
        }
        Ok(removed)
    }

    // ==================== State ====================

    pub fn set_status(&mut self, status: DocumentStatus) {
        self.status = status;
    }

    pub fn notifications(&self) -> &NotificationCollection {
        &self.notifications
    }

    pub fn clear_notifications(&mut self) {
        self.notifications.clear();
    }

    // ==================== Recompute ====================

    /// Run a measurement's execute, recording failures as notifications.
    ///
    /// Returns `true` when the measurement recomputed successfully.
    pub fn recompute_measure<M: MeasureKind>(&mut self, measure: &mut M) -> bool {
        let label = measure.base().label().to_string();
        let subject = measure.subject().into_iter().flatten().next();

        if self.status.suppresses_changes() {
            debug!(%label, "recompute suppressed");
            self.notifications.notify(
                NotificationType::Warning,
                label,
                "recompute skipped while the document is restoring or removing objects",
            );
            return false;
        }

        self.status.insert(DocumentStatus::RECOMPUTING);
        let result = measure.execute(&*self);
        self.status.remove(DocumentStatus::RECOMPUTING);

        match result {
            Ok(()) => {
                measure.base_mut().purge_touched();
                true
            }
            Err(err) => {
                warn!(%label, error = %err, "recompute failed");
                let mut notification = Notification::new(NotificationType::Error, label, err.to_string());
                if let Some(object) = subject {
                    notification = notification.with_object(object);
                }
                self.notifications.push(notification);
                false
            }
        }
    }

    // ==================== Shape resolution ====================

    /// Resolve a sub-object reference to a shape, reporting why it fails
    pub fn resolve_sub_object(&self, element: &SubObjectRef, options: ShapeOptions) -> Result<Shape> {
        let owner = self
            .object(element.object)
            .ok_or(MeasureError::ObjectNotFound(element.object))?;
        let (path, element_name) = split_sub_name(&element.sub_name);

        let mut placement = owner.placement;
        let mut current = owner;
        for label in path {
            if let (ObjectKind::Link(target), true) =
                (&current.kind, options.contains(ShapeOptions::RESOLVE_LINK))
            {
                current = self.object(*target).ok_or(MeasureError::ObjectNotFound(*target))?;
                placement = placement * current.placement;
            }
            current = current
                .children
                .iter()
                .filter_map(|c| self.object(*c))
                .find(|c| c.label == label)
                .ok_or_else(|| MeasureError::ElementNotFound {
                    object: current.id,
                    element: label.to_string(),
                })?;
            placement = placement * current.placement;
        }

        let mut shape = self.local_shape(current, options, 0)?;
        if options.contains(ShapeOptions::TRANSFORM) && !placement.is_identity() {
            shape = shape.transformed(&placement.to_isometry());
        }

        if !options.contains(ShapeOptions::NEED_SUB_ELEMENT) || element_name.is_empty() {
            return Ok(shape);
        }

        let name: ElementName = element_name.parse()?;
        shape
            .sub_shape(&name)
            .ok_or_else(|| MeasureError::ElementNotFound {
                object: current.id,
                element: element_name.to_string(),
            })
    }

    /// Shape of `object` in its own coordinates
    fn local_shape(&self, object: &DocumentObject, options: ShapeOptions, depth: usize) -> Result<Shape> {
        if depth > self.config.max_link_depth {
            return Err(MeasureError::LinkCycle(object.id));
        }

        match &object.kind {
            ObjectKind::Feature(shape) => Ok(shape.clone()),
            ObjectKind::Link(target) => {
                if !options.contains(ShapeOptions::RESOLVE_LINK) {
                    return Err(MeasureError::ElementNotFound {
                        object: object.id,
                        element: String::new(),
                    });
                }
                let target = self.object(*target).ok_or(MeasureError::ObjectNotFound(*target))?;
                self.placed_shape(target, options, depth + 1)
            }
            ObjectKind::Group => object
                .children
                .iter()
                .map(|c| {
                    let child = self.object(*c).ok_or(MeasureError::ObjectNotFound(*c))?;
                    self.placed_shape(child, options, depth + 1)
                })
                .collect::<Result<Vec<_>>>()
                .map(Shape::Compound),
        }
    }

    /// Shape of `object` in its parent's coordinates
    fn placed_shape(&self, object: &DocumentObject, options: ShapeOptions, depth: usize) -> Result<Shape> {
        let shape = self.local_shape(object, options, depth)?;
        if options.contains(ShapeOptions::TRANSFORM) && !object.placement.is_identity() {
            Ok(shape.transformed(&object.placement.to_isometry()))
        } else {
            Ok(shape)
        }
    }

    fn classify_shape(&self, shape: &Shape) -> MeasureElementType {
        match shape {
            Shape::Vertex(_) => MeasureElementType::Point,
            Shape::Edge(edge) => match edge.curve_type() {
                CurveType::Line => MeasureElementType::LineSegment,
                CurveType::Circle if edge.is_full_circle(self.config.angular_tolerance) => {
                    MeasureElementType::Circle
                }
                CurveType::Circle => MeasureElementType::Arc,
                CurveType::Ellipse | CurveType::Bezier => MeasureElementType::Curve,
            },
            Shape::Face(face) => match face.surface.surface_type() {
                SurfaceType::Plane => MeasureElementType::Plane,
                SurfaceType::Cylinder => MeasureElementType::Cylinder,
                SurfaceType::Cone => MeasureElementType::Cone,
                SurfaceType::Torus => MeasureElementType::Torus,
                SurfaceType::Sphere | SurfaceType::Freeform => MeasureElementType::Surface,
            },
            Shape::Shell(_) | Shape::Solid(_) => MeasureElementType::Volume,
            Shape::Wire(_) | Shape::Compound(_) => MeasureElementType::Invalid,
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Radius and anchor of a face: the cylinder radius for cylindrical faces,
/// otherwise the first circular boundary edge.
fn face_radius(face: &Face) -> Option<MeasureRadiusInfo> {
    let first_circle = face.edges().find(|e| e.is_circle());

    if let Some(radius) = face.surface.cylinder_radius() {
        let anchor = first_circle
            .map(|e| e.start_point())
            .unwrap_or_else(|| face.surface.origin_point());
        return Some(MeasureRadiusInfo::new(radius, anchor));
    }

    let edge = first_circle?;
    let circle = edge.curve.as_circle()?;
    Some(MeasureRadiusInfo::new(circle.radius, edge.start_point()))
}

impl ShapeResolver for Document {
    fn shape(&self, element: &SubObjectRef, options: ShapeOptions) -> Option<Shape> {
        match self.resolve_sub_object(element, options) {
            Ok(shape) => Some(shape),
            Err(err) => {
                trace!(element = %element, error = %err, "shape resolution failed");
                None
            }
        }
    }
}

impl ElementTypeResolver for Document {
    fn element_type(&self, element: &SubObjectRef) -> MeasureElementType {
        self.shape(element, ShapeOptions::default())
            .map(|shape| self.classify_shape(&shape))
            .unwrap_or(MeasureElementType::Invalid)
    }
}

impl RadiusEvaluator for Document {
    fn measure_radius(&self, element: &SubObjectRef) -> Option<MeasureRadiusInfo> {
        match self.shape(element, ShapeOptions::default())? {
            Shape::Edge(edge) => {
                let circle = edge.curve.as_circle()?;
                Some(MeasureRadiusInfo::new(circle.radius, edge.start_point()))
            }
            Shape::Face(face) => face_radius(&face),
            _ => None,
        }
    }
}

impl DocumentState for Document {
    fn status(&self) -> DocumentStatus {
        self.status
    }
}
