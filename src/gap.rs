//! The scrolling obstacle: a pipe pair with a vertical opening.

use crate::game::Surface;
use rand::Rng;

/// Center-based axis-aligned bounding box.
#[derive(Clone, Copy, Debug)]
pub struct Hitbox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Hitbox {
    pub fn left(&self) -> f64 {
        self.x - self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn top(&self) -> f64 {
        self.y - self.height / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height / 2.0
    }
}

#[derive(Clone, Debug)]
pub struct Gap {
    /// Center of the pipe pair, in logical units.
    pub x_pos: f64,
    /// Center of the opening, in logical units.
    pub y_pos: f64,
}

impl Gap {
    pub const WIDTH: f64 = 50.0;
    /// Vertical size of the opening between the two pipes.
    pub const HEIGHT: f64 = 70.0;
    pub const X_SPEED: f64 = 1.5;

    /// Place a pipe pair at `x_pos` with the opening drawn uniformly at
    /// random, never clipping the top or bottom of the surface.
    pub fn new(x_pos: f64, surface: Surface, rng: &mut impl Rng) -> Self {
        let span = (surface.height - Self::HEIGHT) as u32;
        let y_pos = f64::from(rng.gen_range(0..=span)) + Self::HEIGHT / 2.0;
        Self { x_pos, y_pos }
    }

    /// (top, bottom) edges of the opening.
    pub fn opening(&self) -> (f64, f64) {
        (
            self.y_pos - Self::HEIGHT / 2.0,
            self.y_pos + Self::HEIGHT / 2.0,
        )
    }

    /// One scroll step leftwards.
    pub fn advance(&mut self) {
        self.x_pos -= Self::X_SPEED;
    }

    /// True once the trailing edge has crossed the left surface edge.
    pub fn is_off_screen(&self) -> bool {
        self.x_pos + Self::WIDTH / 2.0 <= 0.0
    }

    /// True once `body` is fully to the right of this pipe pair.
    pub fn is_passed_by(&self, body: &Hitbox) -> bool {
        self.x_pos + Self::WIDTH / 2.0 < body.left()
    }

    pub fn collision_with(&self, body: &Hitbox) -> bool {
        if body.left() > self.x_pos + Self::WIDTH / 2.0
            || body.right() < self.x_pos - Self::WIDTH / 2.0
        {
            return false;
        }
        let (top, bottom) = self.opening();
        !clears_opening(body, top, bottom)
    }
}

/// Strict containment on both edges: a body touching either lip of the
/// opening does not clear it.
fn clears_opening(body: &Hitbox, top: f64, bottom: f64) -> bool {
    body.top() > top && body.bottom() < bottom
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SURFACE;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn bird_box(x: f64, y: f64) -> Hitbox {
        Hitbox {
            x,
            y,
            width: 30.0,
            height: 21.0,
        }
    }

    #[test]
    fn opening_stays_inside_surface() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let gap = Gap::new(250.0, SURFACE, &mut rng);
            assert!(gap.y_pos >= 35.0, "y_pos {} below floor", gap.y_pos);
            assert!(gap.y_pos <= 565.0, "y_pos {} above ceiling", gap.y_pos);
            let (top, bottom) = gap.opening();
            assert!(top >= 0.0);
            assert!(bottom <= SURFACE.height);
        }
    }

    #[test]
    fn no_collision_when_fully_left_or_right() {
        let gap = Gap {
            x_pos: 400.0,
            y_pos: 300.0,
        };
        // body entirely left of the pipes: right edge 370 < left edge 375
        assert!(!gap.collision_with(&bird_box(355.0, 300.0)));
        // body entirely right of the pipes: left edge 430 > right edge 425
        assert!(!gap.collision_with(&bird_box(445.0, 300.0)));
    }

    #[test]
    fn no_collision_when_strictly_inside_opening() {
        let gap = Gap {
            x_pos: 400.0,
            y_pos: 300.0,
        };
        // opening spans (265, 335); body spans (289.5, 310.5)
        assert!(!gap.collision_with(&bird_box(400.0, 300.0)));
    }

    #[test]
    fn collision_when_overlapping_a_pipe() {
        let gap = Gap {
            x_pos: 400.0,
            y_pos: 300.0,
        };
        assert!(gap.collision_with(&bird_box(400.0, 100.0)));
        assert!(gap.collision_with(&bird_box(400.0, 500.0)));
    }

    #[test]
    fn touching_an_opening_lip_collides() {
        // The edge policy is strict containment: crossing the top lip by
        // half a unit is already a hit.
        let body = bird_box(100.0, 50.0); // spans 39.5..60.5
        assert!(!clears_opening(&body, 40.0, 90.0));
        assert!(clears_opening(&body, 39.0, 90.0));
        // exact contact on a lip does not clear either
        assert!(!clears_opening(&body, 39.5, 90.0));
        assert!(!clears_opening(&body, 30.0, 60.5));
    }

    #[test]
    fn lip_contact_through_collision_with() {
        let gap = Gap {
            x_pos: 100.0,
            y_pos: 75.0,
        };
        // opening spans (40, 110); body top 39.5 crosses the lip
        assert!(gap.collision_with(&bird_box(100.0, 50.0)));
        // one unit lower the body spans 40.5..61.5, strictly inside
        assert!(!gap.collision_with(&bird_box(100.0, 51.0)));
    }

    #[test]
    fn off_screen_at_exact_threshold() {
        let gap = Gap {
            x_pos: -25.0,
            y_pos: 300.0,
        };
        assert!(gap.is_off_screen());
        let gap = Gap {
            x_pos: -24.9,
            y_pos: 300.0,
        };
        assert!(!gap.is_off_screen());
    }

    #[test]
    fn passed_only_when_fully_behind() {
        let body = bird_box(385.0, 300.0); // left edge 370
        let gap = Gap {
            x_pos: 344.9,
            y_pos: 100.0,
        }; // right edge 369.9
        assert!(gap.is_passed_by(&body));
        let gap = Gap {
            x_pos: 345.0,
            y_pos: 100.0,
        }; // right edge 370, not strictly behind
        assert!(!gap.is_passed_by(&body));
    }

    #[test]
    fn advance_moves_left_by_speed() {
        let mut gap = Gap {
            x_pos: 250.0,
            y_pos: 300.0,
        };
        gap.advance();
        assert!((gap.x_pos - 248.5).abs() < f64::EPSILON);
    }
}
