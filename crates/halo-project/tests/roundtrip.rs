//! Spec file round-trip tests.

use halo_project::{
    CircleDef, MaterialSpec, ProjectError, RotationDef, SegmentsDef, SpinDirection, load_yaml,
    save_yaml,
};

fn sample_spec() -> MaterialSpec {
    let mut spec = MaterialSpec::new("M_HudRings");
    spec.circles.push(CircleDef {
        radius: Some(0.25),
        thickness: Some(0.05),
        density: Some(120.0),
        opacity: Some(0.8),
        segments: None,
        rotation: None,
    });
    spec.circles.push(CircleDef {
        segments: Some(SegmentsDef {
            count: 8,
            spacing: 0.01,
            center_offset: [0.5, 0.5, 0.0, 0.0],
        }),
        rotation: Some(RotationDef {
            inverse_speed: 6.0,
            direction: SpinDirection::CounterClockwise,
        }),
        ..Default::default()
    });
    spec
}

#[test]
fn save_then_load_preserves_spec() {
    let dir = std::env::temp_dir().join("halo_project_roundtrip");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("rings.yaml");

    let spec = sample_spec();
    save_yaml(&path, &spec).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(loaded, spec);
}

#[test]
fn save_rejects_invalid_spec() {
    let dir = std::env::temp_dir().join("halo_project_save_invalid");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("bad.yaml");

    // No circles at all
    let spec = MaterialSpec::new("M_Empty");
    let err = save_yaml(&path, &spec).unwrap_err();
    assert!(matches!(err, ProjectError::Validation(_)));
    assert!(!path.exists());
}

#[test]
fn minimal_yaml_applies_defaults() {
    let text = "
version: 1
name: M_Minimal
circles:
  - {}
  - radius: 0.4
";
    let spec: MaterialSpec = serde_yaml::from_str(text).unwrap();
    halo_project::validate_spec(&spec).unwrap();

    assert_eq!(spec.circles.len(), 2);
    assert_eq!(spec.circles[0], CircleDef::default());
    assert_eq!(spec.circles[1].radius, Some(0.4));
    assert!(spec.circles[1].segments.is_none());
}

#[test]
fn load_rejects_semantically_invalid_file() {
    let dir = std::env::temp_dir().join("halo_project_load_invalid");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("rotation_only.yaml");

    std::fs::write(
        &path,
        "version: 1\nname: M_Bad\ncircles:\n  - rotation:\n      inverse_speed: 2.0\n",
    )
    .unwrap();

    let err = load_yaml(&path).unwrap_err();
    assert!(matches!(err, ProjectError::Validation(_)));
}
