// Host-side tests for the particle field: spawning, physics and painting.

use backdrop_web::constants::*;
use backdrop_web::core::*;
use glam::Vec2;

#[derive(Default)]
struct Recorder {
    clears: usize,
    fills: Vec<(Vec2, f32, Rgb, f32)>,
    strokes: usize,
}

impl DrawSurface for Recorder {
    fn clear(&mut self, _width: f32, _height: f32) {
        self.clears += 1;
        self.fills.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32) {
        self.fills.push((center, radius, color, alpha));
    }

    fn stroke_circle(&mut self, _c: Vec2, _r: f32, _w: f32, _color: Rgb, _alpha: f32) {
        self.strokes += 1;
    }
}

fn params(count: usize, speed: f32) -> ParticleParams {
    ParticleParams {
        count,
        speed,
        ..ParticleParams::default()
    }
}

fn field(count: usize, speed: f32, bounds: Bounds, seed: u64) -> ParticleField {
    let mut f = ParticleField::new(params(count, speed), seed);
    f.initialize(bounds);
    f
}

fn max_velocity_component(f: &ParticleField) -> f32 {
    f.particles()
        .iter()
        .map(|p| p.velocity.abs().max_element())
        .fold(0.0, f32::max)
}

fn assert_within(f: &ParticleField, tol: f32) {
    let Bounds { width, height } = f.bounds();
    for p in f.particles() {
        let pos = p.position;
        assert!(
            pos.x >= -tol && pos.x <= width + tol,
            "x out of bounds: {} (tol {})",
            pos.x,
            tol
        );
        assert!(
            pos.y >= -tol && pos.y <= height + tol,
            "y out of bounds: {} (tol {})",
            pos.y,
            tol
        );
        assert!(
            pos.z >= -tol && pos.z <= Z_MAX + tol,
            "z out of bounds: {} (tol {})",
            pos.z,
            tol
        );
    }
}

#[test]
fn initialize_spawns_configured_count_inside_bounds() {
    let bounds = Bounds::new(800.0, 600.0);
    let f = field(50, DEFAULT_PARTICLE_SPEED, bounds, 1);
    assert_eq!(f.len(), 50);
    let palette = default_palette();
    for p in f.particles() {
        assert!(p.position.x >= 0.0 && p.position.x <= 800.0);
        assert!(p.position.y >= 0.0 && p.position.y <= 600.0);
        assert!(p.position.z >= 0.0 && p.position.z <= Z_MAX);
        assert_eq!(p.origin, p.position.truncate());
        assert!(palette.contains(&p.color));
        assert!(p.radius >= DEFAULT_PARTICLE_SIZE * 0.5 - 1e-6);
        assert!(p.radius <= DEFAULT_PARTICLE_SIZE + 1e-6);
        assert!(p.velocity.x.abs() <= DEFAULT_PARTICLE_SPEED / 2.0);
        assert!(p.velocity.y.abs() <= DEFAULT_PARTICLE_SPEED / 2.0);
        // depth drift starts non-negative
        assert!(p.velocity.z >= 0.0);
        assert!(p.velocity.z <= DEFAULT_PARTICLE_SPEED * Z_SPEED_FACTOR);
    }
}

#[test]
fn positions_stay_in_bounds_over_many_steps() {
    let mut f = field(40, 40.0, Bounds::new(200.0, 100.0), 9);
    let tol = max_velocity_component(&f) + 1e-3;
    for _ in 0..2000 {
        f.step(None, false);
        assert_within(&f, tol);
    }
}

#[test]
fn positions_stay_in_bounds_with_pointer_repulsion() {
    let mut f = field(60, 8.0, Bounds::new(800.0, 600.0), 21);
    let pointer = Some(Vec2::new(400.0, 300.0));
    for _ in 0..1500 {
        let tol = max_velocity_component(&f) + 1.0 + 1e-3;
        f.step(pointer, true);
        assert_within(&f, tol);
    }
}

#[test]
fn same_seed_reproduces_the_same_sequence() {
    let bounds = Bounds::new(640.0, 480.0);
    let mut a = field(30, 2.0, bounds, 42);
    let mut b = field(30, 2.0, bounds, 42);
    assert_eq!(a.particles(), b.particles());
    let pointer = Some(Vec2::new(320.0, 240.0));
    for i in 0..300 {
        let active = i % 3 == 0;
        a.step(pointer, active);
        b.step(pointer, active);
    }
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn different_seeds_differ() {
    let bounds = Bounds::new(640.0, 480.0);
    let a = field(30, 2.0, bounds, 1);
    let b = field(30, 2.0, bounds, 2);
    assert_ne!(a.particles(), b.particles());
}

#[test]
fn repulsion_is_stronger_closer_to_the_pointer() {
    let near = repulsion_impulse(Vec2::new(50.0, 0.0));
    let far = repulsion_impulse(Vec2::new(99.0, 0.0));
    assert!(near.length() > far.length());
    assert!((near.length() - 0.5).abs() < 1e-5);
    assert!((far.length() - 0.01).abs() < 1e-5);
    // pushes away from the pointer
    assert!(near.x < 0.0 && near.y.abs() < 1e-6);
}

#[test]
fn repulsion_vanishes_at_and_beyond_radius() {
    assert_eq!(repulsion_impulse(Vec2::new(REPULSION_RADIUS, 0.0)), Vec2::ZERO);
    assert_eq!(repulsion_impulse(Vec2::new(0.0, -150.0)), Vec2::ZERO);
    assert_eq!(repulsion_impulse(Vec2::new(300.0, 400.0)), Vec2::ZERO);
}

#[test]
fn repulsion_direction_follows_the_offset() {
    // pointer below-right of the particle: particle is pushed up-left
    let v = repulsion_impulse(Vec2::new(30.0, 40.0));
    assert!(v.x < 0.0 && v.y < 0.0);
    let expected = (REPULSION_RADIUS - 50.0) * REPULSION_STRENGTH;
    assert!((v.length() - expected).abs() < 1e-5);
    assert!((v.y / v.x - 40.0 / 30.0).abs() < 1e-4);
}

#[test]
fn step_applies_repulsion_only_when_active_and_interactive() {
    let bounds = Bounds::new(800.0, 600.0);
    let mut f = field(1, 0.0, bounds, 5);
    let at = f.particles()[0].position.truncate();
    let pointer = Some(at + Vec2::new(50.0, 0.0));

    f.step(pointer, false);
    assert_eq!(f.particles()[0].velocity.truncate(), Vec2::ZERO);

    f.step(pointer, true);
    let v = f.particles()[0].velocity;
    assert!((v.x + 0.5).abs() < 1e-5, "vx = {}", v.x);
    assert!(v.y.abs() < 1e-6);

    let mut still = ParticleField::new(
        ParticleParams {
            interactive: false,
            ..params(1, 0.0)
        },
        5,
    );
    still.initialize(bounds);
    let at = still.particles()[0].position.truncate();
    still.step(Some(at + Vec2::new(10.0, 0.0)), true);
    assert_eq!(still.particles()[0].velocity.truncate(), Vec2::ZERO);
}

#[test]
fn perspective_scale_halves_at_max_depth() {
    assert!((perspective_scale(0.0) - 1.0).abs() < 1e-6);
    assert!((perspective_scale(Z_MAX) - 0.5).abs() < 1e-6);
    assert!(perspective_scale(250.0) > perspective_scale(750.0));
}

#[test]
fn draw_clears_then_paints_every_particle_with_depth_alpha() {
    let f = field(25, 1.0, Bounds::new(300.0, 300.0), 3);
    let mut surface = Recorder::default();
    f.draw(&mut surface);
    assert_eq!(surface.clears, 1);
    assert_eq!(surface.fills.len(), 25);
    for (p, (center, radius, color, alpha)) in f.particles().iter().zip(&surface.fills) {
        let scale = perspective_scale(p.position.z);
        assert_eq!(*center, p.position.truncate());
        assert_eq!(*color, p.color);
        assert!((radius - p.radius * scale).abs() < 1e-5);
        assert!((alpha - scale * DEPTH_ALPHA).abs() < 1e-6);
        assert!(*alpha >= 0.4 - 1e-6 && *alpha <= 0.8 + 1e-6);
    }
}

#[test]
fn advance_without_surface_still_moves_particles() {
    let mut f = field(10, 5.0, Bounds::new(500.0, 500.0), 11);
    let before: Vec<_> = f.particles().iter().map(|p| p.position).collect();
    f.advance::<Recorder>(None, false, None);
    let after: Vec<_> = f.particles().iter().map(|p| p.position).collect();
    assert_ne!(before, after);
}

#[test]
fn resize_rebuilds_with_same_count_inside_new_bounds() {
    let mut f = field(50, 1.0, Bounds::new(1200.0, 900.0), 8);
    assert!(f.resize(Bounds::new(320.0, 240.0)));
    assert_eq!(f.len(), 50);
    for p in f.particles() {
        assert!(p.position.x <= 320.0 && p.position.y <= 240.0);
    }
    // identical bounds are a no-op
    let snapshot = f.particles().to_vec();
    assert!(!f.resize(Bounds::new(320.0, 240.0)));
    assert_eq!(f.particles(), &snapshot[..]);
}

#[test]
fn zero_area_viewport_yields_no_particles() {
    let mut f = field(50, 1.0, Bounds::new(0.0, 600.0), 4);
    assert!(f.is_empty());
    f.step(Some(Vec2::ZERO), true);
    let mut surface = Recorder::default();
    f.draw(&mut surface);
    assert!(surface.fills.is_empty());

    // growing out of the empty state spawns the full set
    assert!(f.resize(Bounds::new(100.0, 100.0)));
    assert_eq!(f.len(), 50);
}
