//! End-to-end scenarios driven through the hub, the way a UI host uses it.

use calc_core::{filter, format_number, CalculatorId, Hub, REGISTRY};
use chrono::NaiveDate;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
}

fn outputs(hub: &Hub, id: CalculatorId) -> Vec<(String, String)> {
    hub.evaluate(id, today())
        .lines
        .into_iter()
        .map(|l| (l.label.to_string(), l.value))
        .collect()
}

fn value_of(hub: &Hub, id: CalculatorId, label: &str) -> String {
    outputs(hub, id)
        .into_iter()
        .find(|(l, _)| l == label)
        .map(|(_, v)| v)
        .unwrap_or_else(|| panic!("{} has no output '{}'", id, label))
}

fn set(hub: &mut Hub, id: CalculatorId, fields: &[(&str, &str)]) {
    for (key, value) in fields {
        hub.set_field(id, key, *value).unwrap();
    }
}

#[test]
fn basic_division() {
    let mut hub = Hub::new();
    set(&mut hub, CalculatorId::Basic, &[("a", "6"), ("b", "3"), ("op", "÷")]);
    assert_eq!(value_of(&hub, CalculatorId::Basic, "Result"), "2");
}

#[test]
fn percentage_of_hundred() {
    let mut hub = Hub::new();
    set(&mut hub, CalculatorId::Percentage, &[("base", "100"), ("percent", "10")]);
    assert_eq!(value_of(&hub, CalculatorId::Percentage, "Percent of value"), "10");
    assert_eq!(value_of(&hub, CalculatorId::Percentage, "Value + percent"), "110");
}

#[test]
fn percentage_rounds_half_away_from_zero() {
    let mut hub = Hub::new();
    set(&mut hub, CalculatorId::Percentage, &[("base", "12.5"), ("percent", "1")]);
    assert_eq!(value_of(&hub, CalculatorId::Percentage, "Percent of value"), "0.13");
}

#[test]
fn bmi_metric_normal() {
    let mut hub = Hub::new();
    set(&mut hub, CalculatorId::Bmi, &[("units", "Metric"), ("weight", "70"), ("height", "170")]);
    assert_eq!(value_of(&hub, CalculatorId::Bmi, "BMI"), "24.22");
    assert_eq!(value_of(&hub, CalculatorId::Bmi, "Status"), "Normal");
}

#[test]
fn emi_reference_loan() {
    let mut hub = Hub::new();
    set(
        &mut hub,
        CalculatorId::Emi,
        &[("principal", "500,000"), ("rate", "10"), ("tenure", "5"), ("tenure_unit", "Years")],
    );
    assert_eq!(value_of(&hub, CalculatorId::Emi, "Monthly EMI"), "10,623.52");
    assert_eq!(value_of(&hub, CalculatorId::Emi, "Months"), "60");
    assert_eq!(value_of(&hub, CalculatorId::Emi, "Total payment"), "637,411.34");
    assert_eq!(value_of(&hub, CalculatorId::Emi, "Total interest"), "137,411.34");
}

#[test]
fn emi_zero_rate_has_no_interest() {
    let mut hub = Hub::new();
    set(&mut hub, CalculatorId::Emi, &[("principal", "1200"), ("rate", "0"), ("tenure", "12"), ("tenure_unit", "Months")]);
    assert_eq!(value_of(&hub, CalculatorId::Emi, "Monthly EMI"), "100");
    assert_eq!(value_of(&hub, CalculatorId::Emi, "Total interest"), "0");
}

#[test]
fn base_converter_decimal_to_binary() {
    let mut hub = Hub::new();
    set(&mut hub, CalculatorId::BaseConverter, &[("value", "42"), ("from", "10"), ("to", "2")]);
    assert_eq!(value_of(&hub, CalculatorId::BaseConverter, "Result"), "101010");

    let forty_ones = "1".repeat(40);
    set(&mut hub, CalculatorId::BaseConverter, &[("value", forty_ones.as_str()), ("from", "10"), ("to", "16")]);
    let hex = value_of(&hub, CalculatorId::BaseConverter, "Result");
    assert_eq!(hex, "343E8374E9884154BF837B571C71C71C7");
    set(&mut hub, CalculatorId::BaseConverter, &[("value", hex.as_str()), ("from", "16"), ("to", "10")]);
    assert_eq!(value_of(&hub, CalculatorId::BaseConverter, "Result"), forty_ones);

    hub.set_field(CalculatorId::BaseConverter, "value", "4z").unwrap();
    assert_eq!(value_of(&hub, CalculatorId::BaseConverter, "Result"), "-");
}

#[test]
fn length_meter_to_feet() {
    let mut hub = Hub::new();
    set(&mut hub, CalculatorId::Length, &[("value", "1"), ("from", "m"), ("to", "ft")]);
    assert_eq!(value_of(&hub, CalculatorId::Length, "Result"), "3.2808");
}

#[test]
fn age_and_date_difference() {
    let mut hub = Hub::new();
    hub.set_field(CalculatorId::Age, "dob", "1990-05-20").unwrap();
    assert_eq!(value_of(&hub, CalculatorId::Age, "Years"), "33");
    assert_eq!(value_of(&hub, CalculatorId::Age, "Months"), "9");
    assert_eq!(value_of(&hub, CalculatorId::Age, "Days"), "19");

    hub.set_field(CalculatorId::Age, "dob", "1990-02-30").unwrap();
    assert_eq!(value_of(&hub, CalculatorId::Age, "Years"), "-");

    set(&mut hub, CalculatorId::DateDiff, &[("from", "2024-03-01"), ("to", "2024-02-01")]);
    assert_eq!(value_of(&hub, CalculatorId::DateDiff, "Days"), "29");
    assert_eq!(value_of(&hub, CalculatorId::DateDiff, "Weeks"), "4.14");

    hub.set_field(CalculatorId::DateDiff, "to", "someday").unwrap();
    assert_eq!(value_of(&hub, CalculatorId::DateDiff, "Days"), "-");
}

#[test]
fn gst_remove_recovers_added_amount() {
    let mut hub = Hub::new();
    set(&mut hub, CalculatorId::Gst, &[("amount", "2500"), ("rate", "12"), ("mode", "Add")]);
    let gross = value_of(&hub, CalculatorId::Gst, "Total");
    assert_eq!(gross, "2,800");

    set(&mut hub, CalculatorId::Gst, &[("amount", gross.as_str()), ("mode", "Remove")]);
    assert_eq!(value_of(&hub, CalculatorId::Gst, "Total"), "2,500");
    assert_eq!(value_of(&hub, CalculatorId::Gst, "Tax"), "300");
}

#[test]
fn sip_zero_rate_is_plain_savings() {
    let mut hub = Hub::new();
    set(&mut hub, CalculatorId::Sip, &[("monthly", "1000"), ("rate", "0"), ("years", "1")]);
    assert_eq!(value_of(&hub, CalculatorId::Sip, "Total value"), "12,000");
    assert_eq!(value_of(&hub, CalculatorId::Sip, "Estimated returns"), "0");
}

#[test]
fn search_scenarios() {
    let all: Vec<_> = filter("").into_iter().map(|e| e.id).collect();
    let registry: Vec<_> = REGISTRY.iter().map(|e| e.id).collect();
    assert_eq!(all, registry);
    assert!(filter("zzz-no-match").is_empty());

    let mut hub = Hub::new();
    hub.set_query("TAX");
    assert_eq!(hub.active_entry().id, CalculatorId::Gst);
    hub.select(CalculatorId::Gst);
    hub.set_query("");
    assert_eq!(hub.active_entry().id, CalculatorId::Gst);
}

#[test]
fn placeholder_formatting() {
    assert_eq!(format_number(f64::NAN, 2), "-");
    assert_eq!(format_number(None::<f64>, 2), "-");
}
