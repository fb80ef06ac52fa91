use rand::Rng;

use super::frame::Viewport;
use crate::config;

/// Moving centre of one radial gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlobPoint {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub r: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlobConfig {
    pub count: usize,
    /// Each velocity component is drawn from `[-max_speed / 2, max_speed / 2)`.
    pub max_speed: f64,
    pub radius_min: f64,
    pub radius_max: f64,
}

impl Default for BlobConfig {
    fn default() -> Self {
        Self {
            count: config::BLOB_COUNT,
            max_speed: config::BLOB_MAX_SPEED,
            radius_min: config::BLOB_RADIUS_MIN,
            radius_max: config::BLOB_RADIUS_MAX,
        }
    }
}

impl BlobConfig {
    pub fn seed<R: Rng + ?Sized>(&self, viewport: Viewport, rng: &mut R) -> Vec<BlobPoint> {
        let width = viewport.width as f64;
        let height = viewport.height as f64;
        let radius_span = (self.radius_max - self.radius_min).max(0.0);
        (0..self.count)
            .map(|_| BlobPoint {
                x: rng.gen::<f64>() * width,
                y: rng.gen::<f64>() * height,
                vx: (rng.gen::<f64>() - 0.5) * self.max_speed,
                vy: (rng.gen::<f64>() - 0.5) * self.max_speed,
                r: self.radius_min + rng.gen::<f64>() * radius_span,
            })
            .collect()
    }
}

impl BlobPoint {
    /// Move by one frame of velocity, then wrap to the opposite edge once the
    /// point is more than its radius outside the viewport.
    pub fn advance(&mut self, viewport: Viewport) {
        self.x += self.vx;
        self.y += self.vy;
        self.x = wrap_axis(self.x, self.r, viewport.width as f64);
        self.y = wrap_axis(self.y, self.r, viewport.height as f64);
    }

    #[cfg(test)]
    pub fn within_bounds(&self, viewport: Viewport) -> bool {
        let (w, h) = (viewport.width as f64, viewport.height as f64);
        (-self.r..=w + self.r).contains(&self.x) && (-self.r..=h + self.r).contains(&self.y)
    }
}

fn wrap_axis(pos: f64, r: f64, extent: f64) -> f64 {
    let mut pos = pos;
    if pos < -r {
        pos = extent + r;
    }
    if pos > extent + r {
        pos = -r;
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const HD: Viewport = Viewport::new(1920, 1080);

    #[test]
    fn seeds_inside_viewport_with_configured_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let blobs = BlobConfig::default().seed(HD, &mut rng);
        assert_eq!(blobs.len(), 6);
        for b in &blobs {
            assert!((0.0..1920.0).contains(&b.x));
            assert!((0.0..1080.0).contains(&b.y));
            assert!(b.vx.abs() <= 0.04 && b.vy.abs() <= 0.04);
            assert!((200.0..500.0).contains(&b.r));
        }
    }

    #[test]
    fn no_wrap_while_inside_extended_bounds() {
        let mut p = BlobPoint { x: 1915.0, y: 540.0, vx: 0.08, vy: 0.0, r: 300.0 };
        p.advance(HD);
        assert!((p.x - 1915.08).abs() < 1e-9);
        assert_eq!(p.y, 540.0);
    }

    #[test]
    fn wraps_to_negative_radius_after_leaving_right_edge() {
        let mut p = BlobPoint { x: 1915.0, y: 540.0, vx: 0.08, vy: 0.0, r: 300.0 };
        let mut frames = 0;
        while p.x >= 0.0 {
            p.advance(HD);
            frames += 1;
            assert!(p.within_bounds(HD));
            assert!(frames < 10_000, "point never wrapped");
        }
        assert_eq!(p.x, -300.0);
        // (2220 - 1915) / 0.08 = 3812.5 frames to pass width + r
        assert_eq!(frames, 3813);
    }

    #[test]
    fn wraps_left_and_top_edges_to_far_side() {
        let mut p = BlobPoint { x: -250.0, y: -250.0, vx: -60.0, vy: -60.0, r: 250.0 };
        p.advance(HD);
        assert_eq!(p.x, 1920.0 + 250.0);
        assert_eq!(p.y, 1080.0 + 250.0);
    }

    #[test]
    fn wraps_bottom_edge_to_top() {
        let mut p = BlobPoint { x: 10.0, y: 1080.0 + 200.0, vx: 0.0, vy: 0.5, r: 200.0 };
        p.advance(HD);
        assert_eq!(p.y, -200.0);
    }

    #[test]
    fn random_walk_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = BlobConfig { max_speed: 400.0, ..BlobConfig::default() };
        let mut blobs = config.seed(HD, &mut rng);
        for _ in 0..5_000 {
            for b in blobs.iter_mut() {
                b.advance(HD);
                assert!(b.within_bounds(HD), "{:?} escaped", b);
            }
        }
    }
}
