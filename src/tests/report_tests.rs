// src/tests/report_tests.rs

use pretty_assertions::assert_eq;

use super::utils::{loaded_state, reference_now};
use crate::api::parse_sensor_reading;
use crate::config::ClassifierConfig;
use crate::domain::{ExpiryPolicy, SpoilageWarning};
use crate::report::StatusReport;
use crate::view::ViewState;

#[test]
fn report_flags_long_expired_items_for_the_detector() {
    let report = StatusReport::build(
        &loaded_state(),
        reference_now(),
        &ClassifierConfig::default(),
    );

    // Eggs are two days past; yogurt is inside the grace day; chicken is already spoiled
    assert_eq!(report.spoilage.flagged_ids, vec![2]);
    assert!(report.spoilage.warnings.is_empty());
    assert_eq!(report.revision, 2);
}

#[test]
fn immediate_policy_flags_yesterdays_items_too() {
    let config = ClassifierConfig {
        expiry_policy: ExpiryPolicy::Immediate,
        ..Default::default()
    };
    let report = StatusReport::build(&loaded_state(), reference_now(), &config);
    assert_eq!(report.spoilage.flagged_ids, vec![2, 5]);
}

#[test]
fn gas_spike_flags_perishables() {
    let mut state = loaded_state();
    state.apply_sensors(parse_sensor_reading(
        r#"{"ammonia_ppm": 40.0, "door_open": true, "air_quality": "poor"}"#,
    ));

    let report = StatusReport::build(&state, reference_now(), &ClassifierConfig::default());

    // Milk, salmon, yogurt are perishable and not yet spoiled; eggs come from the expiry pass
    assert_eq!(report.spoilage.flagged_ids, vec![1, 3, 5, 2]);
    assert_eq!(
        report.spoilage.warnings,
        vec![
            SpoilageWarning::HighAmmonia(40.0),
            SpoilageWarning::PoorAirQuality,
            SpoilageWarning::DoorOpen,
        ]
    );
}

#[test]
fn text_report_lists_rows_and_sensors() {
    let report = StatusReport::build(
        &loaded_state(),
        reference_now(),
        &ClassifierConfig::default(),
    );
    let text = report.to_string();

    assert!(text.starts_with("Fridge status at 2024-01-10 00:00\n"));
    assert!(text.contains("6 items: 1 spoiled, 1 expired, 2 expiring, 2 fresh"));
    assert!(text.contains("[Spoiled      ] 🥩 Chicken (3 pieces) | Expires: 2024-01-30"));
    assert!(text.contains("[Fresh        ] 🥛 Milk (2 liters)\n"));
    assert!(text.contains("Sensors (Last updated: 2024-01-10 07:59:30)"));
    assert!(text.contains("! CO2          640 PPM"));
    assert!(text.contains("Warning: 1 items may be spoiled!"));
}

#[test]
fn empty_state_report() {
    let report = StatusReport::build(
        &ViewState::new(),
        reference_now(),
        &ClassifierConfig::default(),
    );
    let text = report.to_string();

    assert!(text.contains("No items in fridge"));
    assert!(!text.contains("Sensors"));
    assert!(report.spoilage.is_clear());
}

#[test]
fn json_report_shape() {
    let report = StatusReport::build(
        &loaded_state(),
        reference_now(),
        &ClassifierConfig::default(),
    );
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["inventory"]["state"], "listed");
    assert_eq!(json["inventory"]["rows"][0]["name"], "Chicken");
    assert_eq!(json["inventory"]["rows"][0]["status"], "Spoiled");
    assert_eq!(json["inventory"]["summary"]["total"], 6);
    assert_eq!(json["sensors"]["overall"], "warning");
    assert_eq!(json["spoilage"]["flagged_ids"][0], 2);
}
