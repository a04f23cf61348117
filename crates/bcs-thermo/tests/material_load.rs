use bcs_core::CaseStore;
use bcs_thermo::{Material, Phase};

#[test]
fn region_material_is_read_from_configuration() {
    let store = CaseStore::from_yaml_str(
        r#"
materials:
  1:
    name: air
    phase: gas
    propertyKey: Air
  2:
    name: steel
    phase: solid
regions:
  fluid:
    material: 1
  wall:
    material: 2
"#,
    )
    .unwrap();
    let air = Material::for_region(&store, "fluid").unwrap();
    assert_eq!(air.phase, Phase::Gas);
    assert_eq!(air.property_key.as_deref(), Some("Air"));

    let steel = Material::for_region(&store, "wall").unwrap();
    assert_eq!(steel.phase, Phase::Solid);
    assert_eq!(steel.property_key, None);
}

#[test]
fn fluid_without_property_key_is_a_configuration_error() {
    let store = CaseStore::from_yaml_str(
        "materials:\n  1:\n    name: gas\n    phase: gas\n",
    )
    .unwrap();
    let err = Material::load(&store, "1").unwrap_err();
    assert_eq!(err.path(), Some("materials/1/propertyKey"));
}
