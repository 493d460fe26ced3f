use health_aggregator::{CheckDetail, Status};
use proptest::prelude::*;

/// Strategy for generating check statuses
pub fn status_strategy() -> impl Strategy<Value = Status> {
    prop_oneof![Just(Status::Pass), Just(Status::Warn), Just(Status::Fail)]
}

/// Strategy for generating observed values (numeric, textual or absent)
pub fn observed_value_strategy() -> impl Strategy<Value = serde_json::Value> {
    prop_oneof![
        Just(serde_json::Value::Null),
        any::<u32>().prop_map(serde_json::Value::from),
        "[a-z]{1,12}".prop_map(serde_json::Value::from),
    ]
}

/// Strategy for generating check details
pub fn check_detail_strategy() -> impl Strategy<Value = CheckDetail> {
    (
        "[A-Za-z ]{1,32}",
        observed_value_strategy(),
        prop_oneof![Just(""), Just("MiB"), Just("ms"), Just("tasks")],
        status_strategy(),
    )
        .prop_map(|(description, value, unit, status)| {
            CheckDetail::new(description, status).with_observed(value, unit)
        })
}

/// Strategy for generating a list of details together with a shuffled copy of it
pub fn shuffled_details_strategy() -> impl Strategy<Value = (Vec<CheckDetail>, Vec<CheckDetail>)> {
    prop::collection::vec(check_detail_strategy(), 0..32)
        .prop_flat_map(|details| (Just(details.clone()), Just(details).prop_shuffle()))
}

/// Strategy for generating provider names usable as key prefixes
pub fn provider_name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,15}"
}
