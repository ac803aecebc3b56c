// Per-frame update: wall bounce, proximity bounce, then move.
// Particles are handled one at a time in population order, so later particles
// see the already-moved positions of earlier ones.

use crate::particle::Particle;
use crate::viewport::Viewport;
use rand::Rng;
use vecmath::{vec2_len, vec2_sub};

pub fn step<R: Rng + ?Sized>(particles: &mut [Particle], viewport: Viewport, rng: &mut R) {
    for i in 0..particles.len() {
        wall_bounce(&mut particles[i], viewport);
        proximity_scan(particles, i, rng);
        particles[i].integrate();
    }
}

// Flips the direction on each axis where the particle touches an edge.
// Position is not clamped.
pub fn wall_bounce(particle: &mut Particle, viewport: Viewport) {
    if viewport.outside_x(particle.position[0], particle.size) {
        particle.direction_x *= -1.0;
    }
    if viewport.outside_y(particle.position[1], particle.size) {
        particle.direction_y *= -1.0;
    }
}

// Compares particle `i` with every other particle and re-rolls both
// directions for each one closer than a single diameter. Every pair is seen
// twice per frame, once from each side.
pub fn proximity_scan<R: Rng + ?Sized>(particles: &mut [Particle], i: usize, rng: &mut R) {
    for j in 0..particles.len() {
        if particles[j].index == particles[i].index {
            continue;
        }
        let dist = vec2_len(vec2_sub(particles[j].position, particles[i].position));
        if dist < particles[i].size {
            particles[i].randomise_direction(rng);
            particles[j].randomise_direction(rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn at(index: usize, x: f64, y: f64, dx: f64, dy: f64) -> Particle {
        Particle::new(index, [x, y], 10.0, [dx, dy], 2.0, "#ff0000".to_owned())
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(9)
    }

    #[test]
    fn wall_bounce_flips_sign_only() {
        let mut particles = vec![at(0, 5.0, 300.0, 1.25, 0.0)];
        step(&mut particles, Viewport::new(800.0, 600.0), &mut rng());
        assert_eq!(particles[0].direction_x, -1.25);
        assert_eq!(particles[0].direction_y, 0.0);
    }

    #[test]
    fn wall_bounce_checks_axes_independently() {
        let mut p = at(0, 400.0, 596.0, 1.0, 1.0);
        wall_bounce(&mut p, Viewport::new(800.0, 600.0));
        assert_eq!(p.direction_x, 1.0);
        assert_eq!(p.direction_y, -1.0);

        let mut corner = at(0, 795.0, 5.0, 1.0, -1.0);
        wall_bounce(&mut corner, Viewport::new(800.0, 600.0));
        assert_eq!(corner.direction_x, -1.0);
        assert_eq!(corner.direction_y, 1.0);
    }

    #[test]
    fn position_is_not_clamped_after_bounce() {
        let mut particles = vec![at(0, 5.0, 300.0, -2.0, 0.0)];
        step(&mut particles, Viewport::new(800.0, 600.0), &mut rng());
        assert_eq!(particles[0].direction_x, 2.0);
        assert_eq!(particles[0].position, [3.0, 300.0]);
        assert_eq!(particles[0].previous_position, [5.0, 300.0]);
    }

    #[test]
    fn close_pair_both_rerolled() {
        let before = [(0.123, 0.456), (-0.321, -0.654)];
        let mut particles = vec![
            at(0, 400.0, 300.0, before[0].0, before[0].1),
            at(1, 405.0, 300.0, before[1].0, before[1].1),
        ];
        step(&mut particles, Viewport::new(800.0, 600.0), &mut rng());
        for (p, (dx, dy)) in particles.iter().zip(before.iter()) {
            assert_ne!(p.direction_x, *dx);
            assert_ne!(p.direction_y, *dy);
            let magnitude = (p.direction_x.powi(2) + p.direction_y.powi(2)).sqrt();
            assert!((magnitude - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn distant_pair_untouched() {
        let mut particles = vec![
            at(0, 400.0, 300.0, 0.5, 0.25),
            at(1, 420.0, 300.0, -0.5, 0.75),
        ];
        step(&mut particles, Viewport::new(800.0, 600.0), &mut rng());
        assert_eq!((particles[0].direction_x, particles[0].direction_y), (0.5, 0.25));
        assert_eq!((particles[1].direction_x, particles[1].direction_y), (-0.5, 0.75));
        assert_eq!(particles[0].position, [399.5, 299.75]);
        assert_eq!(particles[1].position, [420.5, 299.25]);
    }

    #[test]
    fn exactly_one_diameter_apart_does_not_trigger() {
        let mut particles = vec![at(0, 400.0, 300.0, 0.0, 0.0), at(1, 410.0, 300.0, 0.0, 0.0)];
        proximity_scan(&mut particles, 0, &mut rng());
        assert_eq!(particles[0].direction_x, 0.0);
        assert_eq!(particles[1].direction_x, 0.0);
    }

    #[test]
    fn scan_skips_self() {
        let mut particles = vec![at(0, 400.0, 300.0, 0.5, 0.5)];
        proximity_scan(&mut particles, 0, &mut rng());
        assert_eq!(particles[0].direction_x, 0.5);
    }

    #[test]
    fn later_particles_see_moved_positions() {
        // 11 apart when particle 0 is scanned, 9 apart once it has moved
        let mut particles = vec![at(0, 400.0, 300.0, -2.0, 0.0), at(1, 411.0, 300.0, 0.0, 0.0)];
        step(&mut particles, Viewport::new(800.0, 600.0), &mut rng());
        assert_eq!(particles[0].position, [402.0, 300.0]);
        assert_ne!(particles[1].direction_x, 0.0);
        assert_ne!(particles[0].direction_x, -2.0);
    }
}
