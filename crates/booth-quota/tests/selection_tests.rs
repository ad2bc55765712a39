use booth_quota::*;

#[test]
fn test_default_selection() {
    let selection = BoothSelection::default();
    assert_eq!(selection.booth_size, BoothSize::OneStandard.label());
    assert_eq!(selection.quota(), 4);
    assert_eq!(selection.fixtures.total(), 4);
    assert_eq!(selection.final_description(), BoothSize::OneStandard.label());
}

#[test]
fn test_switching_size_rebalances_single_row() {
    let mut selection = BoothSelection::default();
    let quota = selection.select_booth_size(BoothSize::TwoStandard.label());
    assert_eq!(quota, 8);
    assert_eq!(selection.fixtures.rows()[0].quantity, 8);
}

#[test]
fn test_switching_size_leaves_multiple_rows() {
    let mut selection = BoothSelection::default();
    selection.add_fixture("Shelving Unit (6ft)");
    let before = selection.fixtures.clone();
    selection.select_booth_size(BoothSize::ThreeStandard.label());
    assert_eq!(selection.fixtures, before);
    assert_eq!(selection.usage().unused, 7);
}

#[test]
fn test_custom_units_drive_quota_and_description() {
    let mut selection = BoothSelection::default();
    selection.select_booth_size(BoothSize::Custom.label());
    assert_eq!(selection.quota(), DEFAULT_QUOTA);
    assert_eq!(
        selection.final_description(),
        "Custom Custom || Custom Dimensions || (4 Fixtures)"
    );

    let quota = selection.set_custom_units(Some("8.5".to_string()));
    assert_eq!(quota, 34);
    assert_eq!(selection.fixtures.rows()[0].quantity, 34);

    selection.set_custom_dimensions(Some("15' x 10'".to_string()));
    assert_eq!(
        selection.final_description(),
        "8.5 Custom || 15' x 10' || (34 Fixtures)"
    );
}

#[test]
fn test_blank_custom_inputs_are_cleared() {
    let mut selection = BoothSelection::default();
    selection.select_booth_size("Custom Fixture");
    selection.set_custom_units(Some("  ".to_string()));
    selection.set_custom_dimensions(Some(String::new()));
    assert!(selection.custom_units.is_none());
    assert!(selection.custom_dimensions.is_none());
}

#[test]
fn test_malformed_size_never_blocks() {
    let mut selection = BoothSelection::default();
    assert_eq!(selection.select_booth_size("mystery booth"), DEFAULT_QUOTA);
    assert_eq!(selection.final_description(), "mystery booth");
}
