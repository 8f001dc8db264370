//! Tests for sensitivity curves end to end
//!
//! These tests verify that:
//! - Curves always have 100 points spanning the requested range
//! - A sweep crossing a zero effect breaks exactly at the crossing
//! - Scenario series are independent of each other
//! - Curve output serializes as flat maps

use crate::analysis::{CURVE_POINTS, generate_curve, select_scenarios};
use crate::model::{Design, Param, ParameterSet};

fn means_with_zero_b() -> ParameterSet {
    ParameterSet::from([
        (Param::Alpha, 0.05),
        (Param::Power, 0.8),
        (Param::MeanA, 1.0),
        (Param::MeanB, 0.0),
        (Param::StdDevA, 10.0),
        (Param::StdDevB, 10.0),
        (Param::Kappa, 1.0),
    ])
}

/// Sweeping meanA over [-49, 50] hits meanA = meanB = 0 exactly at i = 49
#[test]
fn test_null_exactly_at_zero_crossing() {
    let scenarios = select_scenarios(Some(0.8));
    for design in [Design::TwoMeansTwoSided, Design::TwoMeansOneSided] {
        let points =
            generate_curve(design, &means_with_zero_b(), Param::MeanA, -49.0, 50.0, &scenarios)
                .unwrap();
        assert_eq!(points.len(), CURVE_POINTS);

        for (i, point) in points.iter().enumerate() {
            assert_eq!(point.value, -49.0 + i as f64);
            for (label, value) in &point.series {
                if i == 49 {
                    assert_eq!(*value, None, "{design} {label}");
                } else {
                    let n = value.unwrap();
                    assert!(n >= 1.0 && n.fract() == 0.0, "{design} {label} at {i}: {n}");
                }
            }
        }
    }
}

#[test]
fn test_curve_is_symmetric_around_crossing() {
    let scenarios = select_scenarios(Some(0.8));
    let points = generate_curve(
        Design::TwoMeansTwoSided,
        &means_with_zero_b(),
        Param::MeanA,
        -49.0,
        50.0,
        &scenarios,
    )
    .unwrap();
    // meanA = -k and meanA = +k need the same sample size
    for k in 1..=49 {
        assert_eq!(points[49 - k].get("80.00%"), points[49 + k].get("80.00%"), "k = {k}");
    }
}

#[test]
fn test_scenarios_are_independent() {
    let params = super::fixture(Design::OddsRatioOneSided);
    let all = select_scenarios(Some(0.8));
    let together = generate_curve(
        Design::OddsRatioOneSided,
        &params,
        Param::ProportionA,
        0.4,
        0.6,
        &all,
    )
    .unwrap();

    let reversed: Vec<_> = all.iter().rev().cloned().collect();
    let backwards = generate_curve(
        Design::OddsRatioOneSided,
        &params,
        Param::ProportionA,
        0.4,
        0.6,
        &reversed,
    )
    .unwrap();

    for scenario in &all {
        let alone = generate_curve(
            Design::OddsRatioOneSided,
            &params,
            Param::ProportionA,
            0.4,
            0.6,
            std::slice::from_ref(scenario),
        )
        .unwrap();
        for ((a, b), c) in together.iter().zip(&backwards).zip(&alone) {
            assert_eq!(a.get(&scenario.label), b.get(&scenario.label));
            assert_eq!(a.get(&scenario.label), c.get(&scenario.label));
        }
    }
}

#[test]
fn test_out_of_domain_sweep_breaks_curve() {
    let params = super::fixture(Design::OneProportionTwoSided);
    let scenarios = select_scenarios(Some(0.8));
    let points = generate_curve(
        Design::OneProportionTwoSided,
        &params,
        Param::Proportion,
        -0.5,
        1.5,
        &scenarios,
    )
    .unwrap();
    assert!(points[0].series.iter().all(|(_, v)| v.is_none()));
    assert!(points[99].series.iter().all(|(_, v)| v.is_none()));
    assert!(points.iter().any(|p| p.is_complete()));
}

#[test]
fn test_curve_serializes_as_flat_maps() {
    let scenarios = select_scenarios(Some(0.8));
    let points = generate_curve(
        Design::TwoMeansTwoSided,
        &means_with_zero_b(),
        Param::MeanA,
        -49.0,
        50.0,
        &scenarios,
    )
    .unwrap();
    let json = serde_json::to_value(&points).unwrap();
    let crossing = &json[49];
    assert_eq!(crossing["meanA"], 0.0);
    assert!(crossing["80.00%"].is_null());
    assert!(crossing["90.00%"].is_null());
    assert!(json[0]["70.00%"].is_number());
}
