use bcs_core::{get_enum, CaseStore, ConfigAccessor};

const CASE: &str = r#"
operatingConditions:
  pressure: 101325
regions:
  fluid:
    material: air
    boundaryConditions:
      2:
        name: inlet
        physicalType: velocityInlet
        velocity:
          constant: [10, 0, 0]
      1:
        name: outlet
        physicalType: pressureOutlet
        pressureOutlet:
          calculatedBackflow: true
    cellZones:
      7:
        name: rotor
        zoneType: mrf
      8:
        name: porous
        zoneType: porous
  solid:
    material: steel
"#;

#[test]
fn nested_yaml_becomes_slash_paths() {
    let store = CaseStore::from_yaml_str(CASE).expect("case");
    assert_eq!(store.get_value("regions/fluid/material").unwrap(), "air");
    assert_eq!(store.get_f64("operatingConditions/pressure").unwrap(), 101325.0);
    assert!(store
        .get_bool("regions/fluid/boundaryConditions/1/pressureOutlet/calculatedBackflow")
        .unwrap());
    assert_eq!(
        store
            .get_vector("regions/fluid/boundaryConditions/2/velocity/constant")
            .unwrap(),
        [10.0, 0.0, 0.0]
    );
}

#[test]
fn boundaries_keep_declaration_order() {
    let store = CaseStore::from_yaml_str(CASE).expect("case");
    let boundaries = store.get_boundary_conditions("fluid").expect("boundaries");
    let names: Vec<_> = boundaries.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["inlet", "outlet"]);
    assert_eq!(boundaries[0].id, 2);
    assert_eq!(boundaries[0].physical_type, "velocityInlet");
    assert!(store.get_boundary_conditions("solid").unwrap().is_empty());
}

#[test]
fn cell_zones_filter_by_type() {
    let store = CaseStore::from_yaml_str(CASE).expect("case");
    assert_eq!(store.get_cell_zones_by_type("fluid", "mrf").unwrap(), vec![7]);
    assert!(store.get_cell_zones_by_type("solid", "mrf").unwrap().is_empty());
}

#[test]
fn regions_are_listed_once_in_order() {
    let store = CaseStore::from_yaml_str(CASE).expect("case");
    assert_eq!(store.region_names().unwrap(), ["fluid", "solid"]);
}

#[test]
fn missing_paths_and_regions_are_reported() {
    let store = CaseStore::from_yaml_str(CASE).expect("case");
    let err = store.get_value("regions/fluid/nothing").expect_err("missing");
    assert_eq!(err.info().code, "path-not-found");
    assert_eq!(err.path(), Some("regions/fluid/nothing"));

    let err = store.get_boundary_conditions("ghost").expect_err("unknown region");
    assert_eq!(err.path(), Some("regions/ghost"));
}

#[test]
fn malformed_values_are_invalid_not_missing() {
    let mut store = CaseStore::new();
    store.set("a/flag", "yes");
    store.set("a/vector", "1 2");
    assert_eq!(store.get_bool("a/flag").unwrap_err().info().code, "invalid-value");
    assert_eq!(store.get_vector("a/vector").unwrap_err().info().code, "invalid-value");
    let err = get_enum::<u8>(&store, "a/flag").unwrap_err();
    assert_eq!(err.info().code, "invalid-value");
}

#[test]
fn non_finite_numbers_are_invalid() {
    let mut store = CaseStore::new();
    store.set("a/nan", "NaN");
    store.set("a/inf", " inf ");
    store.set("a/list", "1 2 -infinity");
    store.set("a/vector", "0 NaN 0");
    store.set("a/fine", "-1.5e3");
    for path in ["a/nan", "a/inf"] {
        let err = store.get_f64(path).expect_err("non-finite scalar");
        assert_eq!(err.info().code, "invalid-value");
        assert_eq!(err.path(), Some(path));
    }
    assert_eq!(store.get_list("a/list").unwrap_err().path(), Some("a/list"));
    assert_eq!(store.get_vector("a/vector").unwrap_err().path(), Some("a/vector"));
    assert_eq!(store.get_f64("a/fine").unwrap(), -1500.0);
}
