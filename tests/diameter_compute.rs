//! Subject parsing, diameter computation, change handling and recompute
//! notifications of the diameter measurement.

mod common;

use cadmeasure::measure::DiameterProperty;
use cadmeasure::notification::NotificationType;
use cadmeasure::topology::{Circle, Edge, Face, Shape, Surface};
use cadmeasure::types::{Point3, UnitQuaternion, Vector3};
use cadmeasure::{
    Document, DocumentStatus, MeasureDiameter, MeasureError, MeasureKind, ObjectId, Placement,
};
use common::builders::{create_fixture_document, disc};
use common::{assert_close, select_one};
use proptest::prelude::*;

#[test]
fn test_parse_selection_round_trip() {
    let f = create_fixture_document();
    let mut m = MeasureDiameter::new();
    m.parse_selection(&select_one(f.cylinder, "Face1"), &f.doc).unwrap();

    assert_eq!(m.element().value(), Some(f.cylinder));
    assert_eq!(m.element().sub_values().to_vec(), vec!["Face1".to_string()]);
    assert_eq!(m.subject(), vec![Some(f.cylinder)]);
    assert_close(m.diameter(), 5.0);
}

#[test]
fn test_parse_selection_overwrites_subject() {
    let f = create_fixture_document();
    let mut m = MeasureDiameter::new();
    m.parse_selection(&select_one(f.disc, "Edge1"), &f.doc).unwrap();
    assert_close(m.diameter(), 10.0);

    m.parse_selection(&select_one(f.annulus, "Face1"), &f.doc).unwrap();
    assert_eq!(m.subject(), vec![Some(f.annulus)]);
    assert_eq!(m.element().sub_values().len(), 1);
    // First circular edge of the annulus is the outer one
    assert_close(m.diameter(), 12.0);
}

#[test]
fn test_arc_and_mixed_face_diameters() {
    let f = create_fixture_document();
    let mut m = MeasureDiameter::new();
    m.parse_selection(&select_one(f.half_disc, "Edge1"), &f.doc).unwrap();
    assert_close(m.diameter(), 6.0);

    m.parse_selection(&select_one(f.half_disc, "Face1"), &f.doc).unwrap();
    assert_close(m.diameter(), 6.0);
}

#[test]
fn test_placement_is_anchor_with_identity_rotation() {
    let mut f = create_fixture_document();
    f.doc
        .set_placement(
            f.disc,
            Placement::from_axis_angle(Vector3::z(), std::f64::consts::FRAC_PI_2),
        )
        .unwrap();

    let mut m = MeasureDiameter::new();
    m.parse_selection(&select_one(f.disc, "Edge1"), &f.doc).unwrap();

    let placement = MeasureKind::placement(&m, &f.doc).unwrap();
    assert!((placement.position - Point3::new(0.0, 5.0, 0.0)).norm() < 1e-9);
    assert_eq!(placement.rotation, UnitQuaternion::identity());
    assert_eq!(m.point_on_curve(&f.doc).unwrap(), placement.position);
}

#[test]
fn test_failure_preserves_last_good_value() {
    let mut f = create_fixture_document();
    let mut m = MeasureDiameter::new();
    m.parse_selection(&select_one(f.cylinder, "Edge2"), &f.doc).unwrap();
    assert_close(m.diameter(), 5.0);

    // Subject now points at a straight edge
    m.set_element(Some(f.square), vec!["Edge1".to_string()], &f.doc);
    assert_close(m.diameter(), 5.0);
    assert!(m.base().is_touched());

    let err = m.execute(&f.doc).unwrap_err();
    assert!(matches!(err, MeasureError::CannotCalculate(ref msg) if msg == "Cannot calculate diameter"));
    assert_close(m.diameter(), 5.0);

    // And at an object that no longer exists
    m.set_element(Some(f.disc), vec!["Edge1".to_string()], &f.doc);
    assert_close(m.diameter(), 10.0);
    f.doc.remove_object(f.disc).unwrap();
    assert!(m.execute(&f.doc).is_err());
    assert_close(m.diameter(), 10.0);
    assert!(m.placement(&f.doc).is_err());
}

#[test]
fn test_empty_subject_fails_without_touching_output() {
    let f = create_fixture_document();
    let mut m = MeasureDiameter::new();
    assert!(m.execute(&f.doc).is_err());
    assert_eq!(m.diameter(), 0.0);

    m.set_element(Some(f.disc), vec![], &f.doc);
    assert!(m.execute(&f.doc).is_err());
    assert_eq!(m.diameter(), 0.0);
    assert_eq!(m.subject(), vec![Some(f.disc)]);

    m.set_element(None, vec!["Edge1".to_string()], &f.doc);
    assert_eq!(m.subject(), vec![None]);
}

#[test]
fn test_restore_and_removal_suppress_recompute() {
    let mut f = create_fixture_document();
    let mut m = MeasureDiameter::new();

    f.doc.set_status(DocumentStatus::RESTORING);
    m.parse_selection(&select_one(f.disc, "Edge1"), &f.doc).unwrap();
    assert_eq!(m.diameter(), 0.0);
    assert_eq!(m.subject(), vec![Some(f.disc)]);

    f.doc.set_status(DocumentStatus::REMOVING);
    m.on_changed(DiameterProperty::Element, &f.doc);
    assert_eq!(m.diameter(), 0.0);

    f.doc.set_status(DocumentStatus::empty());
    m.on_changed(DiameterProperty::Element, &f.doc);
    assert_close(m.diameter(), 10.0);
}

#[test]
fn test_output_is_read_only_to_editors() {
    let f = create_fixture_document();
    let mut m = MeasureDiameter::new();
    m.parse_selection(&select_one(f.disc, "Edge1"), &f.doc).unwrap();

    let mut output = *m.diameter_property();
    assert!(matches!(
        output.set_value(1.0),
        Err(MeasureError::ReadOnlyProperty("Diameter"))
    ));
    assert_close(m.result_value(), 10.0);
}

#[test]
fn test_scheduler_records_failures() {
    let mut f = create_fixture_document();
    let mut m = MeasureDiameter::new();
    m.set_element(Some(f.square), vec!["Face1".to_string()], &f.doc);

    assert!(!f.doc.recompute_measure(&mut m));
    let errors = f.doc.notifications().of_type(NotificationType::Error);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Cannot calculate diameter");
    assert_eq!(errors[0].label, "Diameter");
    assert_eq!(errors[0].object, Some(f.square));
    assert!(m.base().is_touched());

    m.set_element(Some(f.cylinder), vec!["Face1".to_string()], &f.doc);
    assert!(f.doc.recompute_measure(&mut m));
    assert!(!m.base().is_touched());
    assert_close(m.diameter(), 5.0);
}

#[test]
fn test_scheduler_suppressed_while_restoring() {
    let mut f = create_fixture_document();
    let mut m = MeasureDiameter::new();
    m.parse_selection(&select_one(f.disc, "Edge1"), &f.doc).unwrap();

    f.doc.set_status(DocumentStatus::RESTORING);
    assert!(!f.doc.recompute_measure(&mut m));
    assert!(f.doc.notifications().has_type(NotificationType::Warning));
    assert!(!f.doc.notifications().has_type(NotificationType::Error));
}

#[test]
fn test_diameter_follows_shape_edits() {
    let mut f = create_fixture_document();
    let mut m = MeasureDiameter::new();
    m.parse_selection(&select_one(f.disc, "Face1"), &f.doc).unwrap();
    assert_close(m.diameter(), 10.0);

    f.doc
        .set_shape(f.disc, Shape::Face(disc(Point3::origin(), 7.5)))
        .unwrap();
    assert!(f.doc.recompute_measure(&mut m));
    assert_close(m.diameter(), 15.0);
}

fn single_circle_document(radius: f64, center: [f64; 3], normal: [f64; 3]) -> (Document, ObjectId) {
    let center = Point3::new(center[0], center[1], center[2]);
    let normal = Vector3::new(normal[0], normal[1], normal[2]);
    let mut doc = Document::new();
    let face = Face::with_outer_wire(
        Surface::plane(center, normal),
        vec![Edge::circle(Circle::new(center, normal, radius))],
    );
    let id = doc.add_feature("Circle", Shape::Face(face));
    (doc, id)
}

proptest! {
    /// Diameter is exactly twice the evaluated radius, wherever the circle is.
    #[test]
    fn diameter_is_twice_radius(
        radius in 1e-3..1e4f64,
        center in prop::array::uniform3(-1e3..1e3f64),
        normal in prop::array::uniform3(0.1..1.0f64),
    ) {
        let (doc, id) = single_circle_document(radius, center, normal);
        let mut m = MeasureDiameter::new();
        m.parse_selection(&select_one(id, "Edge1"), &doc).unwrap();
        prop_assert_eq!(m.diameter(), radius * 2.0);

        let anchor = m.point_on_curve(&doc).unwrap();
        let c = Point3::new(center[0], center[1], center[2]);
        prop_assert!(((anchor - c).norm() - radius).abs() < 1e-6 * radius.max(1.0));
    }

    /// Selections of any size other than one are never accepted.
    #[test]
    fn only_single_selections_accepted(count in 0usize..6) {
        let f = create_fixture_document();
        let names: Vec<&str> = std::iter::repeat("Edge1").take(count).collect();
        let selection = common::select_many(f.disc, &names);
        let expected = count == 1;
        prop_assert_eq!(MeasureDiameter::is_valid_selection(&selection, &f.doc), expected);
        prop_assert_eq!(MeasureDiameter::is_prioritized_selection(&selection, &f.doc), expected);
    }

    /// A failed recompute never changes a previously computed diameter.
    #[test]
    fn failed_recompute_keeps_value(radius in 0.5..500.0f64, bad in "Edge[2-9]|Face[2-9]|Vertex[3-9]") {
        let (doc, id) = single_circle_document(radius, [0.0; 3], [0.0, 0.0, 1.0]);
        let mut m = MeasureDiameter::new();
        m.parse_selection(&select_one(id, "Edge1"), &doc).unwrap();
        let good = m.diameter();

        m.set_element(Some(id), vec![bad], &doc);
        prop_assert!(m.execute(&doc).is_err());
        prop_assert_eq!(m.diameter(), good);
    }
}
