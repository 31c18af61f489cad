use crate::audio::FrequencyAnalyzer;
use rand::Rng;

/// Particles in the field, per the studio's house look.
pub const PARTICLE_COUNT: usize = 50;

/// Particles closer than this (logical units) get a connecting line.
pub const LINK_RADIUS: f32 = 100.0;

/// Amplitude bars drawn while a demo is playing.
pub const BAR_COUNT: usize = 64;

/// Frequency-bucket ranges feeding the three bar colors.
pub const BASS_BUCKETS: (usize, usize) = (0, 20);
pub const MID_BUCKETS: (usize, usize) = (20, 40);
pub const TREBLE_BUCKETS: (usize, usize) = (40, 64);

#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    pub alpha: f32,
}

/// Which fixed color a bar takes, by bucket index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarBand {
    Bass,   // amber
    Mid,    // blue
    Treble, // cyan
}

pub fn band_for(bucket: usize) -> BarBand {
    if bucket < BASS_BUCKETS.1 {
        BarBand::Bass
    } else if bucket < MID_BUCKETS.1 {
        BarBand::Mid
    } else {
        BarBand::Treble
    }
}

/// Bass/mid/treble averages through the analyzer adapter, normalized 0-1.
/// Shown as level meters in the player card.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BandLevels {
    pub bass: f32,
    pub mid: f32,
    pub treble: f32,
}

pub fn band_levels(analyzer: &FrequencyAnalyzer) -> BandLevels {
    BandLevels {
        bass: analyzer.average_frequency(BASS_BUCKETS.0, BASS_BUCKETS.1) / 255.0,
        mid: analyzer.average_frequency(MID_BUCKETS.0, MID_BUCKETS.1) / 255.0,
        treble: analyzer.average_frequency(TREBLE_BUCKETS.0, TREBLE_BUCKETS.1) / 255.0,
    }
}

/// Free-running particle canvas 🌌
///
/// Lives on a logical-unit canvas (the terminal renderer maps cells to
/// units); velocities are in units per 60 Hz frame, so `step` scales by
/// elapsed time to stay framerate-independent. The field itself never
/// stops; only the audio-reactive bars come and go with playback.
pub struct ParticleField {
    width: f32,
    height: f32,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(width: f32, height: f32) -> Self {
        let mut rng = rand::thread_rng();
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                x: rng.gen_range(0.0..width.max(1.0)),
                y: rng.gen_range(0.0..height.max(1.0)),
                vx: rng.gen_range(-1.0..1.0),
                vy: rng.gen_range(-1.0..1.0),
                size: rng.gen_range(2.0..6.0),
                alpha: rng.gen_range(0.3..0.8),
            })
            .collect();
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
            particles,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Match the drawing surface to its container. Particles keep their
    /// positions; the toroidal wrap pulls strays back in on the next step.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
    }

    /// Advance every particle and wrap at the edges.
    pub fn step(&mut self, dt: f32) {
        // dt is seconds; velocities are per-frame at 60fps
        let scale = dt * 60.0;
        for p in &mut self.particles {
            p.x += p.vx * scale;
            p.y += p.vy * scale;

            if p.x < 0.0 {
                p.x += self.width;
            }
            if p.x > self.width {
                p.x -= self.width;
            }
            if p.y < 0.0 {
                p.y += self.height;
            }
            if p.y > self.height {
                p.y -= self.height;
            }
        }
    }

    /// Pairs closer than `LINK_RADIUS`, with line alpha fading toward the
    /// radius (alpha = 1 - d/radius).
    pub fn links(&self) -> Vec<(usize, usize, f32)> {
        let mut out = Vec::new();
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let dx = self.particles[i].x - self.particles[j].x;
                let dy = self.particles[i].y - self.particles[j].y;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist < LINK_RADIUS {
                    out.push((i, j, 1.0 - dist / LINK_RADIUS));
                }
            }
        }
        out
    }

    /// Bar heights in logical units (amplitude scaled to half the canvas
    /// height), read straight from the current snapshot.
    pub fn bar_heights(&self, analyzer: &FrequencyAnalyzer) -> Vec<f32> {
        (0..BAR_COUNT)
            .map(|i| {
                let amplitude = analyzer.bucket(i) as f32 / 255.0;
                amplitude * self.height * 0.5
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_spawns_full_population_in_bounds() {
        let field = ParticleField::new(400.0, 200.0);
        assert_eq!(field.particles().len(), PARTICLE_COUNT);
        for p in field.particles() {
            assert!(p.x >= 0.0 && p.x <= 400.0);
            assert!(p.y >= 0.0 && p.y <= 200.0);
        }
    }

    #[test]
    fn step_wraps_toroidally() {
        let mut field = ParticleField::new(100.0, 100.0);
        // Force a known runaway particle
        field.particles[0] = Particle {
            x: 99.5,
            y: 0.2,
            vx: 1.0,
            vy: -1.0,
            size: 3.0,
            alpha: 0.5,
        };
        field.step(1.0 / 60.0);
        let p = field.particles()[0];
        assert!(p.x >= 0.0 && p.x <= 100.0);
        assert!(p.y >= 0.0 && p.y <= 100.0);
    }

    #[test]
    fn links_respect_radius_and_fade() {
        let mut field = ParticleField::new(1000.0, 1000.0);
        for (i, p) in field.particles.iter_mut().enumerate() {
            p.x = (i as f32) * 300.0 % 900.0;
            p.y = 500.0;
            p.vx = 0.0;
            p.vy = 0.0;
        }
        field.particles[0].x = 100.0;
        field.particles[1].x = 150.0; // 50 apart -> linked, alpha 0.5
        let links = field.links();
        let link = links
            .iter()
            .find(|(a, b, _)| (*a, *b) == (0, 1) || (*a, *b) == (1, 0));
        let (_, _, alpha) = link.expect("adjacent particles should link");
        assert!((alpha - 0.5).abs() < 1e-3);
    }

    #[test]
    fn band_boundaries_match_fixed_ranges() {
        assert_eq!(band_for(0), BarBand::Bass);
        assert_eq!(band_for(19), BarBand::Bass);
        assert_eq!(band_for(20), BarBand::Mid);
        assert_eq!(band_for(39), BarBand::Mid);
        assert_eq!(band_for(40), BarBand::Treble);
        assert_eq!(band_for(63), BarBand::Treble);
    }

    #[test]
    fn bars_scale_to_half_height() {
        let field = ParticleField::new(100.0, 80.0);
        let mut analyzer = FrequencyAnalyzer::new();
        analyzer.set_snapshot_for_test(vec![255; 64]);
        let bars = field.bar_heights(&analyzer);
        assert_eq!(bars.len(), BAR_COUNT);
        assert!((bars[0] - 40.0).abs() < 1e-3);
    }
}
