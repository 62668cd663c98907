// Host-side tests for scroll reveal interpolation and the region registry.

use backdrop_web::core::*;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn default_region_fades_in_holds_and_fades_out() {
    let r = RevealRegion::default();
    let cases = [
        (-0.1, 0.0),
        (0.0, 0.0),
        (0.1, 0.5),
        (0.2, 1.0),
        (0.5, 1.0),
        (0.8, 1.0),
        (0.9, 0.5),
        (1.0, 0.0),
        (1.1, 0.0),
    ];
    for (p, want) in cases {
        let got = r.evaluate(p).opacity;
        assert!(close(got, want), "opacity at {}: {} != {}", p, got, want);
    }
}

#[test]
fn default_region_slides_up_and_back() {
    let r = RevealRegion::fade_up();
    assert!(close(r.evaluate(0.0).offset, 50.0));
    assert!(close(r.evaluate(0.1).offset, 25.0));
    assert!(close(r.evaluate(0.5).offset, 0.0));
    assert!(close(r.evaluate(0.9).offset, 25.0));
    assert!(close(r.evaluate(1.0).offset, 50.0));
}

#[test]
fn fade_in_preset_never_moves() {
    let r = RevealRegion::fade_in();
    for i in 0..=20 {
        let p = i as f32 / 20.0;
        assert_eq!(r.evaluate(p).offset, 0.0);
    }
    assert!(close(r.evaluate(0.1).opacity, 0.5));
}

#[test]
fn nan_progress_maps_to_the_first_output() {
    let r = RevealRegion::default();
    assert_eq!(r.evaluate(f32::NAN).opacity, 0.0);
    assert_eq!(r.evaluate(f32::NAN).offset, 50.0);
}

#[test]
fn coincident_thresholds_jump_without_nan() {
    let t = [0.2, 0.2, 0.8, 1.0];
    let o = [0.0, 1.0, 1.0, 0.0];
    assert_eq!(interpolate(0.19, &t, &o), 0.0);
    assert_eq!(interpolate(0.2, &t, &o), 1.0);

    let t = [0.0, 0.5, 0.5, 1.0];
    let o = [0.0, 1.0, 0.25, 0.0];
    assert!(interpolate(0.4999, &t, &o) > 0.99);
    assert_eq!(interpolate(0.5, &t, &o), 0.25);

    let t = [0.3; 4];
    let o = [0.0, 1.0, 2.0, 3.0];
    assert_eq!(interpolate(0.29, &t, &o), 0.0);
    assert_eq!(interpolate(0.3, &t, &o), 3.0);

    for i in 0..=100 {
        let p = i as f32 / 100.0;
        assert!(interpolate(p, &[0.0, 0.0, 1.0, 1.0], &o).is_finite());
    }
}

#[test]
fn custom_thresholds_interpolate_linearly() {
    let r = RevealRegion::default().with_thresholds([0.1, 0.3, 0.6, 0.9]);
    assert!(close(r.evaluate(0.2).opacity, 0.5));
    assert!(close(r.evaluate(0.45).opacity, 1.0));
    assert!(close(r.evaluate(0.75).opacity, 0.5));
}

#[test]
fn validation_rejects_decreasing_or_non_finite_thresholds() {
    assert!(RevealRegion::default().validate().is_ok());
    let bad = RevealRegion::default().with_thresholds([0.5, 0.2, 0.8, 1.0]);
    assert_eq!(
        bad.validate(),
        Err(ConfigError::InvalidThresholds([0.5, 0.2, 0.8, 1.0]))
    );
    let nan = RevealRegion::default().with_thresholds([0.0, f32::NAN, 0.8, 1.0]);
    assert!(nan.validate().is_err());
    let inf = RevealRegion::default().with_thresholds([0.0, 0.2, 0.8, f32::INFINITY]);
    assert!(inf.validate().is_err());
}

#[test]
fn scroll_progress_runs_from_bottom_entry_to_top_exit() {
    let vh = 800.0;
    let h = 200.0;
    assert_eq!(scroll_progress(vh, h, vh), 0.0);
    assert_eq!(scroll_progress(vh + 100.0, h, vh), 0.0);
    assert!(close(scroll_progress(300.0, h, vh), 0.5));
    assert_eq!(scroll_progress(-h, h, vh), 1.0);
    assert_eq!(scroll_progress(-5000.0, h, vh), 1.0);
    assert_eq!(scroll_progress(0.0, 0.0, 0.0), 0.0);
}

#[test]
fn registry_assigns_ids_and_evaluates_regions() {
    let mut m = ScrollRevealMapper::new();
    assert!(m.is_empty());
    let a = m.register(RevealRegion::default()).unwrap();
    let b = m.register(RevealRegion::fade_in()).unwrap();
    assert_ne!(a, b);
    assert_eq!(m.len(), 2);
    assert_eq!(m.get(b), Some(&RevealRegion::fade_in()));

    let style = m.evaluate(a, 0.1).unwrap();
    assert!(close(style.opacity, 0.5));
    assert!(close(style.offset, 25.0));

    assert_eq!(m.unregister(a), Some(RevealRegion::default()));
    assert_eq!(m.evaluate(a, 0.5), None);
    assert_eq!(m.unregister(a), None);
    assert_eq!(m.len(), 1);

    m.clear();
    assert!(m.is_empty());
    assert_eq!(m.evaluate(b, 0.5), None);
}

#[test]
fn resting_style_shows_regions_below_the_fold() {
    let r = RevealRegion::default();
    // top edge 400px under an 800px viewport
    let below = r.evaluate(scroll_progress(1200.0, 400.0, 800.0));
    assert_eq!(below.opacity, 0.0);
    assert_eq!(below.offset, 50.0);

    let rest = r.resting();
    assert_eq!(rest, r.evaluate(0.5));
    assert_eq!(rest.opacity, 1.0);
    assert_eq!(rest.offset, 0.0);

    let custom = RevealRegion::default().with_offset([80.0, 10.0, 10.0, 80.0]);
    assert_eq!(custom.resting().offset, 10.0);
}

#[test]
fn registry_reports_resting_styles_by_id() {
    let mut m = ScrollRevealMapper::new();
    let a = m.register(RevealRegion::fade_in()).unwrap();
    assert_eq!(
        m.resting(a),
        Some(RevealStyle {
            opacity: 1.0,
            offset: 0.0
        })
    );
    m.unregister(a);
    assert_eq!(m.resting(a), None);
}

#[test]
fn registry_rejects_invalid_regions() {
    let mut m = ScrollRevealMapper::new();
    let bad = RevealRegion::default().with_thresholds([1.0, 0.0, 0.0, 0.0]);
    assert!(m.register(bad).is_err());
    assert!(m.is_empty());
}

#[test]
fn ids_are_not_reused_after_unregister() {
    let mut m = ScrollRevealMapper::new();
    let a = m.register(RevealRegion::default()).unwrap();
    m.unregister(a);
    let b = m.register(RevealRegion::default()).unwrap();
    assert_ne!(a, b);
}

#[test]
fn view_latch_stays_latched_once_seen() {
    let mut latch = ViewLatch::default();
    assert!(!latch.update(800.0, 1000.0));
    assert!(latch.update(700.0, 1000.0));
    assert!(latch.update(900.0, 1000.0));
    assert!(latch.is_in_view());
}

#[test]
fn repeating_view_latch_follows_the_element() {
    let mut latch = ViewLatch::new(0.3, false);
    assert!(latch.update(100.0, 1000.0));
    assert!(!latch.update(950.0, 1000.0));
    assert!(!latch.is_in_view());
}
