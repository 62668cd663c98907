use crate::constants::*;
use crate::core::config::ParticleParams;
use crate::core::surface::{Bounds, DrawSurface, Rgb};
use glam::{Vec2, Vec3};
use rand::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// x/y in px, z is depth in [0, Z_MAX].
    pub position: Vec3,
    /// Spawn position; kept as a reference point, not used by the physics.
    pub origin: Vec2,
    pub velocity: Vec3,
    pub color: Rgb,
    pub radius: f32,
}

/// The backdrop particle set and its physics.
pub struct ParticleField {
    pub params: ParticleParams,
    particles: Vec<Particle>,
    bounds: Bounds,
    rng: StdRng,
}

impl ParticleField {
    /// Empty field; call [`ParticleField::resize`] once the viewport is known.
    pub fn new(params: ParticleParams, seed: u64) -> Self {
        Self {
            params,
            particles: Vec::new(),
            bounds: Bounds::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded from OS entropy (crypto.getRandomValues on the web).
    pub fn from_entropy(params: ParticleParams) -> Self {
        Self {
            params,
            particles: Vec::new(),
            bounds: Bounds::default(),
            rng: StdRng::from_entropy(),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Discard the current set and spawn `params.count` particles in `bounds`.
    /// A zero-area viewport leaves the field empty.
    pub fn initialize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.particles.clear();
        if bounds.is_empty() {
            log::debug!("[particles] empty viewport, no particles");
            return;
        }
        let palette: &[Rgb] = &self.params.palette;
        let speed = self.params.speed;
        let size = self.params.base_size;
        self.particles.reserve(self.params.count);
        for _ in 0..self.params.count {
            let x = self.rng.gen::<f32>() * bounds.width;
            let y = self.rng.gen::<f32>() * bounds.height;
            let z = self.rng.gen::<f32>() * Z_MAX;
            let color = palette.choose(&mut self.rng).copied().unwrap_or(Rgb::WHITE);
            // z drift is one-directional; boundary reflection brings it back
            let velocity = Vec3::new(
                (self.rng.gen::<f32>() - 0.5) * speed,
                (self.rng.gen::<f32>() - 0.5) * speed,
                self.rng.gen::<f32>() * speed * Z_SPEED_FACTOR,
            );
            let radius = size
                * (PARTICLE_RADIUS_MIN_FRACTION
                    + self.rng.gen::<f32>() * (1.0 - PARTICLE_RADIUS_MIN_FRACTION));
            self.particles.push(Particle {
                position: Vec3::new(x, y, z),
                origin: Vec2::new(x, y),
                velocity,
                color,
                radius,
            });
        }
    }

    /// Rebuild the whole set for new viewport bounds. Same-size resizes are
    /// ignored so a burst of identical resize events does not reshuffle.
    pub fn resize(&mut self, bounds: Bounds) -> bool {
        if bounds == self.bounds && self.particles.len() == self.expected_len() {
            return false;
        }
        self.initialize(bounds);
        log::info!(
            "[particles] rebuilt {} particles for {}x{}",
            self.particles.len(),
            bounds.width,
            bounds.height
        );
        true
    }

    fn expected_len(&self) -> usize {
        if self.bounds.is_empty() {
            0
        } else {
            self.params.count
        }
    }

    /// Advance every particle by one frame.
    ///
    /// `pointer` is only used while `pointer_active`; repulsion is also
    /// disabled when the field is not interactive.
    pub fn step(&mut self, pointer: Option<Vec2>, pointer_active: bool) {
        let repel_from = pointer.filter(|_| pointer_active && self.params.interactive);
        let Bounds { width, height } = self.bounds;
        for p in &mut self.particles {
            p.position += p.velocity;

            reflect(p.position.x, &mut p.velocity.x, width);
            reflect(p.position.y, &mut p.velocity.y, height);
            reflect(p.position.z, &mut p.velocity.z, Z_MAX);

            if let Some(target) = repel_from {
                let impulse = repulsion_impulse(target - p.position.truncate());
                p.velocity.x += impulse.x;
                p.velocity.y += impulse.y;
            }
        }
    }

    /// Clear `surface` and paint every particle with depth scaling.
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.bounds.width, self.bounds.height);
        for p in &self.particles {
            let scale = perspective_scale(p.position.z);
            surface.fill_circle(
                p.position.truncate(),
                p.radius * scale,
                p.color,
                scale * DEPTH_ALPHA,
            );
        }
    }

    /// One frame: physics, then paint if a surface is available.
    pub fn advance<S: DrawSurface + ?Sized>(
        &mut self,
        pointer: Option<Vec2>,
        pointer_active: bool,
        surface: Option<&mut S>,
    ) {
        self.step(pointer, pointer_active);
        if let Some(s) = surface {
            self.draw(s);
        }
    }
}

/// Turn the particle back toward `[0, max]` once it has stepped outside.
///
/// Sets the velocity's sign toward the interior instead of negating it. The
/// two agree for a particle that just crossed an edge; they differ when
/// repulsion has pushed it further out, where plain negation would flip it
/// outward again on the next step.
#[inline]
fn reflect(pos: f32, vel: &mut f32, max: f32) {
    if pos < 0.0 {
        *vel = vel.abs();
    } else if pos > max {
        *vel = -vel.abs();
    }
}

/// Velocity change for a particle whose offset to the pointer is `to_pointer`
/// (pointer minus particle). Zero outside [`REPULSION_RADIUS`]; inside it
/// points away from the pointer with magnitude `(R - d) * REPULSION_STRENGTH`.
#[inline]
pub fn repulsion_impulse(to_pointer: Vec2) -> Vec2 {
    let distance = to_pointer.length();
    if distance >= REPULSION_RADIUS {
        return Vec2::ZERO;
    }
    let force = (REPULSION_RADIUS - distance) * REPULSION_STRENGTH;
    let angle = to_pointer.y.atan2(to_pointer.x);
    -Vec2::new(angle.cos(), angle.sin()) * force
}

/// Size/alpha multiplier for depth `z`: 1 at the front, 0.5 at `Z_MAX`.
#[inline]
pub fn perspective_scale(z: f32) -> f32 {
    PERSPECTIVE_DEPTH / (PERSPECTIVE_DEPTH + z)
}
