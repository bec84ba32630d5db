//! End-to-end behaviour of the chart through the public API: records in,
//! scene and click actions out.

use std::collections::HashSet;

use odontogram::consts::TOOTH_COUNT;
use odontogram::doc::{ChartRecords, Condition};
use odontogram::engine::{Action, EngineCore};
use odontogram::input::Button;
use odontogram::scene::build_scene;
use odontogram::style::style_for_name;
use odontogram::tooth::{ToothId, all_teeth};

fn tooth(code: u8) -> ToothId {
    ToothId::new(code).unwrap()
}

fn engine(json: &str) -> EngineCore {
    let mut core = EngineCore::new();
    core.load_records(ChartRecords::from_json_str(json).unwrap());
    core
}

fn click_center(core: &mut EngineCore, id: ToothId) -> Vec<Action> {
    let pt = core.camera.chart_to_screen(core.config.layout.tooth_bounds(id).center());
    core.on_pointer_down(pt, Button::Primary)
}

#[test]
fn one_shape_per_valid_identifier() {
    let core = engine(r#"{"11": {"condition": "crown"}, "36": {"condition": "caries"}}"#);
    let scene = core.scene();
    let ids: Vec<u8> = scene.teeth().map(|t| t.id.code()).collect();
    assert_eq!(ids.len(), TOOTH_COUNT);
    let unique: HashSet<u8> = ids.iter().copied().collect();
    let expected: HashSet<u8> = (1..=4u8).flat_map(|q| (1..=8u8).map(move |p| q * 10 + p)).collect();
    assert_eq!(unique, expected);
}

#[test]
fn absent_tooth_styled_like_explicit_healthy() {
    let explicit = engine(r#"{"25": {"condition": "healthy"}}"#).scene();
    let absent = engine("{}").scene();
    assert_eq!(absent.tooth(tooth(25)).unwrap().style, explicit.tooth(tooth(25)).unwrap().style);
    assert_eq!(absent.tooth(tooth(25)).unwrap().crossed, explicit.tooth(tooth(25)).unwrap().crossed);
}

#[test]
fn extraction_and_missing_always_crossed() {
    let scene = engine(
        r#"{
            "17": {"condition": "extraction"},
            "27": {"condition": "extraction", "surfaces": {"mesial": "x", "occlusal": "y"}},
            "37": {"condition": "missing", "surfaces": {}},
            "47": {"condition": "missing"}
        }"#,
    )
    .scene();
    for code in [17, 27, 37, 47] {
        assert!(scene.tooth(tooth(code)).unwrap().crossed, "{code}");
    }
}

#[test]
fn selection_marks_only_one_tooth() {
    let mut core = engine(r#"{"14": {"condition": "caries"}, "24": {"condition": "crown"}, "34": {"condition": "filling"}}"#);
    core.set_selection(Some(tooth(14)));
    let selected: Vec<u8> = core.scene().teeth().filter(|t| t.selected).map(|t| t.id.code()).collect();
    assert_eq!(selected, vec![14]);
}

#[test]
fn read_only_never_invokes_handler() {
    let mut core = engine("{}");
    core.set_read_only(true);
    let calls: usize = all_teeth()
        .map(|id| {
            click_center(&mut core, id)
                .iter()
                .filter(|a| matches!(a, Action::ToothClicked(_)))
                .count()
        })
        .sum();
    assert_eq!(calls, 0);
}

#[test]
fn interactive_click_reports_single_identifier() {
    let mut core = engine("{}");
    assert_eq!(click_center(&mut core, tooth(47)), vec![Action::ToothClicked(tooth(47))]);
}

#[test]
fn caries_occlusal_finding_without_cross() {
    let records = ChartRecords::from_json_str(r#"{"36": {"condition": "caries", "surfaces": {"occlusal": "deep"}}}"#).unwrap();
    let scene = build_scene(&records, None, &odontogram::geometry::ChartLayout::default());
    let view = scene.tooth(tooth(36)).unwrap();
    assert_eq!(view.condition, Condition::Caries);
    assert!(view.overlays.iter().any(|o| o.surface == odontogram::doc::Surface::Occlusal));
    assert!(!view.crossed);
}

#[test]
fn unknown_condition_falls_back_to_healthy() {
    assert_eq!(style_for_name("unknown_xyz"), style_for_name("healthy"));
    let scene = engine(r#"{"44": {"condition": "unknown_xyz"}}"#).scene();
    assert_eq!(scene.tooth(tooth(44)).unwrap().style, style_for_name("healthy"));
}

#[test]
fn bad_field_does_not_lose_crossing_mark() {
    let core = engine(
        r#"{"16": {"condition": "missing", "notes": 5}, "26": {"condition": "extraction", "treatment_needed": ["x"]}}"#,
    );
    let scene = core.scene();
    for code in [16, 26] {
        let view = scene.tooth(tooth(code)).unwrap();
        assert!(view.crossed, "tooth {code} lost its crossing mark");
    }
    assert_eq!(scene.tooth(tooth(16)).unwrap().condition, Condition::Missing);
}
