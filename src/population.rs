// Builds the starting set of particles: random position inside the viewport,
// random direction, warm random color

use crate::color::Color;
use crate::config::SPEED;
use crate::particle::Particle;
use crate::viewport::Viewport;
use rand::Rng;

pub fn create_population<R: Rng + ?Sized>(
    quantity: usize,
    particle_size: f64,
    viewport: Viewport,
    rng: &mut R,
) -> Vec<Particle> {
    let mut particles = Vec::with_capacity(quantity);
    let half = particle_size / 2.0;
    for index in 0..quantity {
        let pos_x = half + rng.gen::<f64>() * (viewport.width - particle_size);
        let pos_y = half + rng.gen::<f64>() * (viewport.height - particle_size);
        let dir_x = -SPEED + rng.gen::<f64>() * SPEED * 2.0;
        let dir_y = -SPEED + rng.gen::<f64>() * SPEED * 2.0;
        let color = Color::random_warm(rng);
        particles.push(Particle::new(
            index,
            [pos_x, pos_y],
            particle_size,
            [dir_x, dir_y],
            SPEED,
            color.to_hex(),
        ));
    }
    particles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PARTICLE_SIZE, QUANTITY};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn population(width: f64, height: f64) -> Vec<Particle> {
        let mut rng = StdRng::seed_from_u64(42);
        create_population(QUANTITY, PARTICLE_SIZE, Viewport::new(width, height), &mut rng)
    }

    #[test]
    fn creates_requested_quantity_with_unique_indices() {
        let particles = population(800.0, 600.0);
        assert_eq!(particles.len(), QUANTITY);
        for (i, p) in particles.iter().enumerate() {
            assert_eq!(p.index, i);
        }
    }

    #[test]
    fn spawns_inside_the_viewport() {
        let (width, height) = (320.0, 240.0);
        let half = PARTICLE_SIZE / 2.0;
        for p in population(width, height) {
            assert!(p.position[0] >= half && p.position[0] <= width - half);
            assert!(p.position[1] >= half && p.position[1] <= height - half);
        }
    }

    #[test]
    fn fills_fixed_fields() {
        for p in population(800.0, 600.0) {
            assert_eq!(p.size, PARTICLE_SIZE);
            assert_eq!(p.speed, SPEED);
            assert_eq!(p.depth, 0);
            assert_eq!([p.target_x, p.target_y], p.position);
            assert!(p.direction_x >= -SPEED && p.direction_x < SPEED);
            assert!(p.direction_y >= -SPEED && p.direction_y < SPEED);
            assert!(p.fill_color.starts_with("#ff"));
        }
    }

    #[test]
    fn zero_quantity_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let particles = create_population(0, PARTICLE_SIZE, Viewport::new(10.0, 10.0), &mut rng);
        assert!(particles.is_empty());
    }
}
