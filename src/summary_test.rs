use serde_json::json;

use super::*;

fn tooth(code: u8) -> ToothId {
    ToothId::new(code).unwrap()
}

fn records(value: serde_json::Value) -> ChartRecords {
    ChartRecords::from_json_value(&value).unwrap()
}

#[test]
fn empty_chart_is_all_healthy() {
    let summary = summarize(&ChartRecords::new());
    assert_eq!(summary.count(Condition::Healthy), 32);
    assert_eq!(summary.counts.len(), 1);
    assert!(summary.treatment_plan.is_empty());
    assert_eq!(summary.annotated_surfaces, 0);
}

#[test]
fn counts_sum_to_32() {
    let summary = summarize(&records(json!({
        "11": { "condition": "crown" },
        "36": { "condition": "caries", "surfaces": { "occlusal": "deep", "distal": true } },
        "46": { "condition": "caries" },
        "18": { "condition": "missing" },
    })));
    assert_eq!(summary.count(Condition::Caries), 2);
    assert_eq!(summary.count(Condition::Crown), 1);
    assert_eq!(summary.count(Condition::Missing), 1);
    assert_eq!(summary.count(Condition::Healthy), 28);
    assert_eq!(summary.counts.values().sum::<usize>(), 32);
    assert_eq!(summary.annotated_surfaces, 2);
}

#[test]
fn treatment_plan_in_fdi_order_skipping_blank() {
    let summary = summarize(&records(json!({
        "46": { "treatment_needed": "root canal" },
        "12": { "treatment_needed": "filling" },
        "21": { "treatment_needed": "  " },
    })));
    assert_eq!(
        summary.treatment_plan,
        vec![(tooth(12), "filling".to_owned()), (tooth(46), "root canal".to_owned())]
    );
}

#[test]
fn describe_healthy_tooth() {
    assert_eq!(describe(tooth(11), &ChartRecords::new()), "11 upper-right central incisor: Healthy");
}

#[test]
fn describe_with_surfaces_and_plan() {
    let store = records(json!({
        "36": {
            "condition": "caries",
            "surfaces": { "occlusal": "deep" },
            "treatment_needed": "composite filling"
        }
    }));
    assert_eq!(
        describe(tooth(36), &store),
        "36 lower-left first molar: Caries (occlusal: deep); planned: composite filling"
    );
}

#[test]
fn summary_serializes() {
    let summary = summarize(&records(json!({ "11": { "condition": "root_canal" } })));
    let value = serde_json::to_value(&summary).unwrap();
    assert_eq!(value["counts"]["root_canal"], json!(1));
    assert_eq!(value["counts"]["healthy"], json!(31));
}
