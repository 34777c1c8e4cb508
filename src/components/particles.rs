//! Particle field - slow drifting dots behind every panel
//!
//! Positions are normalised to the unit square and scaled to the drawing
//! area, so resizing never needs a reset.

use crate::component::Component;
use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{
    layout::{Position, Rect},
    style::Color,
    Frame,
};
use std::time::Duration;

const MIN_DRIFT_SECS: f32 = 10.0;
const MAX_DRIFT_SECS: f32 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Particle {
    from: (f32, f32),
    to: (f32, f32),
    duration: f32,
    elapsed: f32,
}

impl Particle {
    fn position(&self) -> (f32, f32) {
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        (
            self.from.0 + (self.to.0 - self.from.0) * t,
            self.from.1 + (self.to.1 - self.from.1) * t,
        )
    }
}

pub struct ParticleField {
    particles: Vec<Particle>,
    rng: StdRng,
    pub color: Color,
}

impl ParticleField {
    pub fn new(count: usize) -> Self {
        Self::with_rng(count, StdRng::seed_from_u64(rand::random()))
    }

    pub fn with_rng(count: usize, mut rng: StdRng) -> Self {
        let particles = (0..count)
            .map(|_| {
                let from = random_point(&mut rng);
                Particle {
                    from,
                    to: random_point(&mut rng),
                    duration: rng.random_range(MIN_DRIFT_SECS..MAX_DRIFT_SECS),
                    elapsed: 0.0,
                }
            })
            .collect();
        Self {
            particles,
            rng,
            color: Color::DarkGray,
        }
    }

    /// Move every particle along its path; finished paths pick a new target
    pub fn advance(&mut self, elapsed: Duration) {
        let dt = elapsed.as_secs_f32();
        for particle in &mut self.particles {
            particle.elapsed += dt;
            if particle.elapsed >= particle.duration {
                particle.elapsed = (particle.elapsed - particle.duration) % MIN_DRIFT_SECS;
                particle.from = particle.to;
                particle.to = random_point(&mut self.rng);
                particle.duration = self.rng.random_range(MIN_DRIFT_SECS..MAX_DRIFT_SECS);
            }
        }
    }

    pub fn positions(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.particles.iter().map(Particle::position)
    }

    /// Terminal cell of a normalised point inside `area`
    pub fn cell_for(point: (f32, f32), area: Rect) -> Option<Position> {
        if area.width == 0 || area.height == 0 {
            return None;
        }
        let x = (point.0 * f32::from(area.width - 1)).round() as u16;
        let y = (point.1 * f32::from(area.height - 1)).round() as u16;
        Some(Position::new(area.x + x, area.y + y))
    }
}

fn random_point(rng: &mut StdRng) -> (f32, f32) {
    (rng.random_range(0.0..1.0), rng.random_range(0.0..1.0))
}

impl Component for ParticleField {
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let buf = frame.buffer_mut();
        for point in self.positions() {
            let Some(position) = Self::cell_for(point, area) else {
                continue;
            };
            if let Some(cell) = buf.cell_mut(position) {
                cell.set_symbol("·").set_fg(self.color);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(count: usize) -> ParticleField {
        ParticleField::with_rng(count, StdRng::seed_from_u64(7))
    }

    #[test]
    fn test_particles_stay_in_unit_square() {
        let mut field = field(100);
        assert_eq!(field.positions().count(), 100);

        for _ in 0..200 {
            field.advance(Duration::from_millis(500));
            for (x, y) in field.positions() {
                assert!((0.0..=1.0).contains(&x));
                assert!((0.0..=1.0).contains(&y));
            }
        }
    }

    #[test]
    fn test_particles_move() {
        let mut field = field(5);
        let before: Vec<_> = field.positions().collect();
        field.advance(Duration::from_secs(5));
        let after: Vec<_> = field.positions().collect();
        assert_ne!(before, after);
    }

    #[test]
    fn test_cell_for_maps_corners() {
        let area = Rect::new(2, 3, 10, 5);
        assert_eq!(
            ParticleField::cell_for((0.0, 0.0), area),
            Some(Position::new(2, 3))
        );
        assert_eq!(
            ParticleField::cell_for((1.0, 1.0), area),
            Some(Position::new(11, 7))
        );
        assert_eq!(ParticleField::cell_for((0.5, 0.5), Rect::new(0, 0, 0, 4)), None);
    }
}
