//! End-to-end layout tests: whole charts composed into scenes.

use pretty_assertions::assert_eq;

use volvelle::layout::RingBand;
use volvelle::{
    BodyKind, CelestialPoint, Chart, ChartConfig, ChartError, ChartKind, HouseCusps, PatternKind,
    Primitive, StyleClass, Subject, Symbol, wheel,
};

fn cusps() -> HouseCusps {
    HouseCusps::from_degrees([
        12.0, 43.0, 75.0, 104.0, 133.0, 161.0, 192.0, 223.0, 255.0, 284.0, 313.0, 341.0,
    ])
}

fn subject() -> Subject {
    let lons = [
        (0, 125.6),
        (1, 17.9),
        (2, 140.2),
        (3, 98.4),
        (4, 201.7),
        (5, 245.0),
        (6, 310.3),
        (7, 42.8),
        (8, 352.1),
        (9, 268.9),
    ];
    let mut points: Vec<CelestialPoint> = lons
        .iter()
        .map(|&(i, lon)| CelestialPoint::new(i, lon, i == 8, BodyKind::Planet))
        .collect();
    points.push(CelestialPoint::new(
        13,
        12.0,
        false,
        BodyKind::Angle(volvelle::ChartAngle::Ascendant),
    ));
    points.push(CelestialPoint::new(
        14,
        284.0,
        false,
        BodyKind::Angle(volvelle::ChartAngle::MidHeaven),
    ));
    Subject {
        points,
        cusps: cusps(),
        latitude: 53.4,
        sun_moon_separation: 107.7,
    }
}

fn second_subject() -> Subject {
    let mut s = subject();
    s.cusps = HouseCusps::from_degrees([
        30.0, 60.0, 92.0, 121.0, 150.0, 179.0, 210.0, 240.0, 272.0, 301.0, 330.0, 359.0,
    ]);
    for (i, p) in s.points.iter_mut().enumerate() {
        *p = CelestialPoint::new(p.index, 11.0 + 29.0 * i as f64, false, p.kind);
    }
    s
}

fn natal_chart() -> Chart {
    Chart {
        kind: ChartKind::Natal,
        first: subject(),
        second: None,
    }
}

#[test]
fn natal_scene_carries_the_fixed_ring_structure() {
    let scene = wheel(&natal_chart(), &ChartConfig::default()).unwrap();

    assert_eq!(
        scene.count_class(|c| matches!(c, StyleClass::ZodiacWedge(_))),
        12
    );
    assert_eq!(scene.count_class(|c| matches!(c, StyleClass::DegreeTick)), 72);
    assert_eq!(
        scene.count_class(|c| matches!(c, StyleClass::HouseLine(_))),
        12
    );
    assert_eq!(scene.count_class(|c| matches!(c, StyleClass::HouseNumber)), 12);
    assert_eq!(
        scene.count_class(|c| matches!(c, StyleClass::WheelBand(_))),
        4
    );
    assert_eq!(
        scene.count_class(|c| matches!(c, StyleClass::ElementPercent(_))),
        4
    );
}

#[test]
fn dual_scene_keeps_the_invariant_wedge_counts() {
    let chart = Chart {
        kind: ChartKind::Transit,
        first: subject(),
        second: Some(second_subject()),
    };
    let scene = wheel(&chart, &ChartConfig::default()).unwrap();

    // ring constants change with the chart type, the wedge counts never do
    assert_eq!(
        scene.count_class(|c| matches!(c, StyleClass::ZodiacWedge(_))),
        12
    );
    assert_eq!(
        scene.count_class(|c| matches!(c, StyleClass::HouseLine(_))),
        12
    );
    assert_eq!(
        scene.count_class(|c| matches!(c, StyleClass::OverlayHouseLine(_))),
        12
    );
    assert_eq!(
        scene.count_class(|c| matches!(c, StyleClass::OverlayDegreeTick)),
        72
    );
    assert_eq!(scene.count_class(|c| matches!(c, StyleClass::OverlayBand)), 1);
}

#[test]
fn ring_radii_differ_between_chart_types() {
    let natal = wheel(&natal_chart(), &ChartConfig::default()).unwrap();
    let chart = Chart {
        kind: ChartKind::Transit,
        first: subject(),
        second: Some(second_subject()),
    };
    let transit = wheel(&chart, &ChartConfig::default()).unwrap();

    let zodiac_radius = |scene: &volvelle::Scene| {
        scene
            .primitives
            .iter()
            .find_map(|p| match p {
                Primitive::Circle {
                    radius,
                    class: StyleClass::WheelBand(RingBand::Zodiac),
                    ..
                } => Some(*radius),
                _ => None,
            })
            .unwrap()
    };
    let r = natal.wheel_radius;
    assert_eq!(zodiac_radius(&natal), r * 0.85);
    assert_eq!(zodiac_radius(&transit), r - 36.0);
}

#[test]
fn missing_second_subject_aborts_dual_charts() {
    for kind in [ChartKind::Transit, ChartKind::Synastry] {
        let chart = Chart {
            kind,
            first: subject(),
            second: None,
        };
        let err = wheel(&chart, &ChartConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            ChartError::MissingSecondSubject { kind: k } if k == kind
        ));
    }
}

#[test]
fn natal_charts_ignore_a_stray_second_subject() {
    let chart = Chart {
        kind: ChartKind::Natal,
        first: subject(),
        second: Some(second_subject()),
    };
    assert!(wheel(&chart, &ChartConfig::default()).is_ok());
}

#[test]
fn anchor_comes_from_the_primary_subject_only() {
    let first = subject();
    let expected = first.cusps.anchor();
    let chart = Chart {
        kind: ChartKind::Synastry,
        first,
        second: Some(second_subject()),
    };
    let scene = wheel(&chart, &ChartConfig::default()).unwrap();
    assert_eq!(scene.anchor, expected);
    assert_eq!(scene.anchor, 360.0 - 192.0);
}

#[test]
fn one_aspect_line_per_classified_aspect() {
    let scene = wheel(&natal_chart(), &ChartConfig::default()).unwrap();
    assert!(!scene.aspects.is_empty());
    assert_eq!(
        scene.count_class(|c| matches!(c, StyleClass::AspectLine(_))),
        scene.aspects.len()
    );
}

#[test]
fn external_natal_draws_pointer_lines() {
    let chart = Chart {
        kind: ChartKind::ExternalNatal,
        first: subject(),
        second: None,
    };
    let scene = wheel(&chart, &ChartConfig::default()).unwrap();
    let pointers = scene.count_class(|c| matches!(c, StyleClass::PointerLine(_)));
    assert_eq!(pointers, 2 * chart.first.points.len());

    let natal = wheel(&natal_chart(), &ChartConfig::default()).unwrap();
    assert_eq!(
        natal.count_class(|c| matches!(c, StyleClass::PointerLine(_))),
        0
    );
}

#[test]
fn composition_is_deterministic() {
    let chart = natal_chart();
    let config = ChartConfig::default();
    let a = wheel(&chart, &config).unwrap();
    let b = wheel(&chart, &config).unwrap();
    assert_eq!(a.primitives, b.primitives);
    assert_eq!(a.aspects, b.aspects);
    assert_eq!(a.elements, b.elements);
}

#[test]
fn patterns_stay_dropped_unless_opted_in() {
    // four bodies in a conjunction chain
    let points: Vec<CelestialPoint> = [0.0, 8.0, 16.0, 24.0]
        .iter()
        .enumerate()
        .map(|(i, &lon)| CelestialPoint::new(i, lon, false, BodyKind::Planet))
        .collect();
    let first = Subject {
        points,
        cusps: cusps(),
        latitude: 0.0,
        sun_moon_separation: 90.0,
    };
    let chart = Chart {
        kind: ChartKind::Natal,
        first,
        second: None,
    };

    let silent = wheel(&chart, &ChartConfig::default()).unwrap();
    assert!(silent.patterns.is_empty());

    let config = ChartConfig {
        emit_patterns: true,
        ..ChartConfig::default()
    };
    let surfaced = wheel(&chart, &config).unwrap();
    assert_eq!(surfaced.patterns.len(), 1);
    assert_eq!(surfaced.patterns[0].kind, PatternKind::Stellium);
    assert_eq!(surfaced.patterns[0].members, vec![0, 1, 2, 3]);
}

#[test]
fn out_of_range_lunar_separation_fails_the_build() {
    let mut first = subject();
    first.sun_moon_separation = 400.0;
    let chart = Chart {
        kind: ChartKind::Natal,
        first,
        second: None,
    };
    let err = wheel(&chart, &ChartConfig::default()).unwrap_err();
    assert!(matches!(err, ChartError::UnreachableBracket { .. }));
}

#[test]
fn retrograde_bodies_get_a_marker_in_the_point_grid() {
    let scene = wheel(&natal_chart(), &ChartConfig::default()).unwrap();
    let markers = scene
        .glyphs()
        .filter(|g| g.symbol == Symbol::Retrograde)
        .count();
    assert_eq!(markers, 1);
}

#[test]
fn every_body_appears_as_a_glyph() {
    let chart = natal_chart();
    let config = ChartConfig::default();
    let scene = wheel(&chart, &config).unwrap();
    for point in &chart.first.points {
        let name = &config.points[point.index].name;
        assert!(
            scene.glyphs().any(|g| match &g.symbol {
                Symbol::Body(n) => n == name,
                _ => false,
            }),
            "no glyph for {name}"
        );
    }
}
