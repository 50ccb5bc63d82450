use cocomo::error::CocomoError;
use cocomo::estimator::{estimate, estimate_named};
use cocomo::model::{DevelopmentMode, ModelConstants};
use rstest::rstest;
use strum::IntoEnumIterator;

fn assert_close(actual: f64, expected: f64, label: &str) {
    let tol = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tol,
        "{} mismatch: got {}, expected {}",
        label,
        actual,
        expected
    );
}

// --- REFERENCE SCENARIOS ---
#[rstest]
#[case(DevelopmentMode::Organic, 10.0, 26.928442903247127, 8.738165793274268, 3.081704277569767, 371.35455755572724)]
#[case(DevelopmentMode::SemiDetached, 32.0, 145.50879038499826, 14.287335375866538, 10.184459632044792, 219.91798512881564)]
#[case(DevelopmentMode::Embedded, 50.0, 393.61034661958, 16.918477984655127, 23.265115631357634, 127.02918109092401)]
#[case(DevelopmentMode::Organic, 1.0, 2.4, 3.4867457524854744, 0.6883209073357861, 416.6666666666667)]
fn test_reference_scenarios(
    #[case] mode: DevelopmentMode,
    #[case] kloc: f64,
    #[case] effort: f64,
    #[case] schedule: f64,
    #[case] team: f64,
    #[case] productivity: f64,
) {
    let r = estimate(kloc, mode).unwrap();
    assert_close(r.effort_pm, effort, "effort");
    assert_close(r.schedule_months, schedule, "schedule");
    assert_close(r.team_size, team, "team");
    assert_close(r.productivity, productivity, "productivity");
}

#[test]
fn test_result_carries_inputs() {
    let r = estimate(42.5, DevelopmentMode::SemiDetached).unwrap();
    assert_eq!(r.size_kloc, 42.5);
    assert_eq!(r.mode, DevelopmentMode::SemiDetached);
    assert_eq!(
        r.constants,
        ModelConstants {
            a: 3.0,
            b: 1.12,
            c: 2.5,
            d: 0.35
        }
    );
}

// --- CONSTANT TABLE ---
#[rstest]
#[case(DevelopmentMode::Organic, 2.4, 1.05, 2.5, 0.38)]
#[case(DevelopmentMode::SemiDetached, 3.0, 1.12, 2.5, 0.35)]
#[case(DevelopmentMode::Embedded, 3.6, 1.20, 2.5, 0.32)]
fn test_constant_table(
    #[case] mode: DevelopmentMode,
    #[case] a: f64,
    #[case] b: f64,
    #[case] c: f64,
    #[case] d: f64,
) {
    assert_eq!(*mode.constants(), ModelConstants { a, b, c, d });
}

#[test]
fn test_all_modes_in_table_order() {
    let modes: Vec<DevelopmentMode> = DevelopmentMode::iter().collect();
    assert_eq!(
        modes,
        vec![
            DevelopmentMode::Organic,
            DevelopmentMode::SemiDetached,
            DevelopmentMode::Embedded
        ]
    );
}

// --- INVALID SIZE ---
#[rstest]
#[case(0.0)]
#[case(-0.0)]
#[case(-1.0)]
#[case(-1e-12)]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
#[case(f64::NEG_INFINITY)]
fn test_invalid_size_rejected(#[case] kloc: f64) {
    for mode in DevelopmentMode::iter() {
        match estimate(kloc, mode) {
            Err(CocomoError::InvalidSize(_)) => {}
            other => panic!("Expected InvalidSize for {} ({}), got {:?}", kloc, mode, other),
        }
    }
}

// --- OUT OF RANGE (powf overflow / underflow) ---
#[rstest]
#[case(1e300, DevelopmentMode::Embedded)]
#[case(1e300, DevelopmentMode::Organic)]
#[case(f64::MAX, DevelopmentMode::SemiDetached)]
#[case(1e-320, DevelopmentMode::Organic)]
#[case(f64::MIN_POSITIVE / 1e10, DevelopmentMode::Embedded)]
fn test_extreme_sizes_rejected(#[case] kloc: f64, #[case] mode: DevelopmentMode) {
    match estimate(kloc, mode) {
        Err(CocomoError::InvalidSize(v)) => assert_eq!(v, kloc),
        other => panic!("Expected InvalidSize for {} ({}), got {:?}", kloc, mode, other),
    }
}

#[test]
fn test_large_but_representable_size() {
    let r = estimate(1e12, DevelopmentMode::Embedded).unwrap();
    for v in [r.effort_pm, r.schedule_months, r.team_size, r.productivity] {
        assert!(v.is_finite() && v > 0.0);
    }
}

// --- MODE NAMES ---
#[rstest]
#[case("organic", DevelopmentMode::Organic)]
#[case("semi-detached", DevelopmentMode::SemiDetached)]
#[case("embedded", DevelopmentMode::Embedded)]
#[case("Embedded", DevelopmentMode::Embedded)]
#[case(" SEMI-DETACHED ", DevelopmentMode::SemiDetached)]
fn test_mode_names(#[case] name: &str, #[case] expected: DevelopmentMode) {
    assert_eq!(DevelopmentMode::parse(name).unwrap(), expected);
    let r = estimate_named(10.0, name).unwrap();
    assert_eq!(r.mode, expected);
}

#[rstest]
#[case("waterfall")]
#[case("")]
#[case("semidetached")]
#[case("organic2")]
fn test_unknown_mode(#[case] name: &str) {
    match estimate_named(10.0, name) {
        Err(CocomoError::UnknownMode(m)) => assert_eq!(m, name),
        other => panic!("Expected UnknownMode for '{}', got {:?}", name, other),
    }
}

#[test]
fn test_mode_resolved_before_size() {
    assert!(matches!(
        estimate_named(0.0, "waterfall"),
        Err(CocomoError::UnknownMode(_))
    ));
}

#[test]
fn test_display_round_trips_through_parse() {
    for mode in DevelopmentMode::iter() {
        assert_eq!(DevelopmentMode::parse(&mode.to_string()).unwrap(), mode);
    }
    assert_eq!(DevelopmentMode::SemiDetached.to_string(), "semi-detached");
}

#[test]
fn test_idempotent_bit_identical() {
    let a = estimate(123.456, DevelopmentMode::Embedded).unwrap();
    let b = estimate(123.456, DevelopmentMode::Embedded).unwrap();
    assert_eq!(a.effort_pm.to_bits(), b.effort_pm.to_bits());
    assert_eq!(a.schedule_months.to_bits(), b.schedule_months.to_bits());
    assert_eq!(a.team_size.to_bits(), b.team_size.to_bits());
    assert_eq!(a.productivity.to_bits(), b.productivity.to_bits());
}

#[test]
fn test_concurrent_callers_agree() {
    let expected = estimate(77.0, DevelopmentMode::Organic).unwrap();
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| estimate(77.0, DevelopmentMode::Organic).unwrap()))
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}

#[test]
fn test_mode_catalogue_text() {
    assert_eq!(
        DevelopmentMode::Organic.description(),
        "Simple projects with small, experienced teams"
    );
    assert!(DevelopmentMode::Embedded
        .help_text()
        .contains("real-time systems"));
    assert!(DevelopmentMode::SemiDetached
        .help_text()
        .contains("compilers"));
}
