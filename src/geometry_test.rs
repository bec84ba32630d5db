#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn tooth(code: u8) -> ToothId {
    ToothId::new(code).unwrap()
}

// --- Rect ---

#[test]
fn rect_edges_and_center() {
    let r = Rect::new(10.0, 20.0, 30.0, 40.0);
    assert_eq!(r.right(), 40.0);
    assert_eq!(r.bottom(), 60.0);
    assert_eq!(r.center(), Point::new(25.0, 40.0));
}

#[test]
fn rect_contains_is_inclusive() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(r.contains(Point::new(0.0, 0.0)));
    assert!(r.contains(Point::new(10.0, 10.0)));
    assert!(r.contains(Point::new(5.0, 5.0)));
    assert!(!r.contains(Point::new(10.1, 5.0)));
    assert!(!r.contains(Point::new(5.0, -0.1)));
}

// --- ChartLayout ---

#[test]
fn default_layout_dimensions() {
    let l = ChartLayout::default();
    assert!(approx_eq(l.half_width(), 8.0 * 36.0 + 7.0 * 4.0));
    assert!(approx_eq(l.width(), 16.0 * 2.0 + l.half_width() * 2.0 + 20.0));
    assert!(approx_eq(l.height(), 16.0 * 2.0 + 18.0 * 2.0 + 84.0 * 2.0 + 36.0));
}

#[test]
fn central_incisors_flank_the_midline() {
    let l = ChartLayout::default();
    let mid = l.midline_x();
    let b11 = l.tooth_bounds(tooth(11));
    let b21 = l.tooth_bounds(tooth(21));
    assert!(b11.right() < mid);
    assert!(b21.x > mid);
    assert!(approx_eq(mid - b11.right(), b21.x - mid));
}

#[test]
fn rows_mirror_outward() {
    let l = ChartLayout::default();
    assert!(l.tooth_bounds(tooth(18)).x < l.tooth_bounds(tooth(11)).x);
    assert!(l.tooth_bounds(tooth(21)).x < l.tooth_bounds(tooth(28)).x);
    assert!(l.tooth_bounds(tooth(48)).x < l.tooth_bounds(tooth(41)).x);
    assert!(l.tooth_bounds(tooth(31)).x < l.tooth_bounds(tooth(38)).x);
    // Opposing teeth share a column.
    assert!(approx_eq(l.tooth_bounds(tooth(16)).x, l.tooth_bounds(tooth(46)).x));
    assert!(approx_eq(l.tooth_bounds(tooth(26)).x, l.tooth_bounds(tooth(36)).x));
}

#[test]
fn upper_row_above_lower_row() {
    let l = ChartLayout::default();
    let upper = l.tooth_bounds(tooth(14));
    let lower = l.tooth_bounds(tooth(44));
    assert!(upper.bottom() < lower.y);
    assert!(approx_eq(lower.y - upper.bottom(), l.arch_gap));
}

#[test]
fn cells_do_not_overlap() {
    let l = ChartLayout::default();
    let cells: Vec<Rect> = crate::tooth::all_teeth().map(|id| l.tooth_bounds(id)).collect();
    for (i, a) in cells.iter().enumerate() {
        for b in cells.iter().skip(i + 1) {
            let overlap = a.x < b.right() && b.x < a.right() && a.y < b.bottom() && b.y < a.bottom();
            assert!(!overlap, "{a:?} overlaps {b:?}");
        }
    }
}

#[test]
fn captions_sit_outside_rows() {
    let l = ChartLayout::default();
    let top = l.caption_bounds(Quadrant::UpperRight);
    let bottom = l.caption_bounds(Quadrant::LowerLeft);
    assert!(top.bottom() <= l.row_y(Arch::Upper) + EPSILON);
    assert!(bottom.y >= l.row_y(Arch::Lower) + l.tooth_height - EPSILON);
}

#[test]
fn layout_deserializes_partially() {
    let l: ChartLayout = serde_json::from_str(r#"{"tooth_width": 40}"#).unwrap();
    assert_eq!(l.tooth_width, 40.0);
    assert_eq!(l.tooth_height, ChartLayout::default().tooth_height);
}

// --- Shapes ---

#[test]
fn root_count_follows_type() {
    let b = Rect::new(0.0, 0.0, 36.0, 84.0);
    assert_eq!(tooth_shape(b, ToothType::Incisor, Arch::Upper).roots.len(), 1);
    assert_eq!(tooth_shape(b, ToothType::Canine, Arch::Upper).roots.len(), 1);
    assert_eq!(tooth_shape(b, ToothType::Premolar, Arch::Upper).roots.len(), 2);
    assert_eq!(tooth_shape(b, ToothType::Molar, Arch::Lower).roots.len(), 3);
}

#[test]
fn upper_roots_point_up_lower_roots_point_down() {
    let b = Rect::new(0.0, 0.0, 36.0, 84.0);
    let upper = tooth_shape(b, ToothType::Molar, Arch::Upper);
    assert!(approx_eq(upper.crown.bottom(), b.bottom()));
    for [_, tip, _] in &upper.roots {
        assert!(approx_eq(tip.y, b.y));
    }
    let lower = tooth_shape(b, ToothType::Molar, Arch::Lower);
    assert!(approx_eq(lower.crown.y, b.y));
    for [_, tip, _] in &lower.roots {
        assert!(approx_eq(tip.y, b.bottom()));
    }
}

#[test]
fn roots_stay_inside_the_cell() {
    let b = Rect::new(5.0, 5.0, 36.0, 84.0);
    for ty in [ToothType::Incisor, ToothType::Canine, ToothType::Premolar, ToothType::Molar] {
        for root in tooth_shape(b, ty, Arch::Upper).roots {
            for p in root {
                assert!(p.x >= b.x - EPSILON && p.x <= b.right() + EPSILON);
            }
        }
    }
}

// --- Surface regions ---

#[test]
fn mesial_faces_the_midline() {
    let crown = Rect::new(0.0, 0.0, 40.0, 30.0);
    let right_side = surface_region(crown, Surface::Mesial, Quadrant::UpperRight);
    assert!(approx_eq(right_side.right(), crown.right()));
    let left_side = surface_region(crown, Surface::Mesial, Quadrant::LowerLeft);
    assert!(approx_eq(left_side.x, crown.x));
    let distal = surface_region(crown, Surface::Distal, Quadrant::LowerRight);
    assert!(approx_eq(distal.x, crown.x));
}

#[test]
fn occlusal_is_centered() {
    let crown = Rect::new(0.0, 0.0, 40.0, 30.0);
    let r = surface_region(crown, Surface::Occlusal, Quadrant::LowerLeft);
    assert_eq!(r.center(), crown.center());
    assert!(r.width < crown.width);
}

#[test]
fn vestibular_and_lingual_flip_between_arches() {
    let crown = Rect::new(0.0, 0.0, 40.0, 30.0);
    let upper_v = surface_region(crown, Surface::Vestibular, Quadrant::UpperLeft);
    let lower_v = surface_region(crown, Surface::Vestibular, Quadrant::LowerLeft);
    assert!(approx_eq(upper_v.y, crown.y));
    assert!(approx_eq(lower_v.bottom(), crown.bottom()));
    let upper_l = surface_region(crown, Surface::Lingual, Quadrant::UpperLeft);
    assert!(approx_eq(upper_l.bottom(), crown.bottom()));
}
