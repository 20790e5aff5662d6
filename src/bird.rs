//! The player entity: gravity, flap impulse, and the mid-screen clamp
//! that hands horizontal motion over to the scrolling world.

use crate::game::Surface;
use crate::gap::Hitbox;

#[derive(Clone, Debug)]
pub struct Bird {
    /// Center position in logical units.
    pub x: f64,
    pub y: f64,
    pub x_speed: f64,
    /// Positive = upward.
    pub y_speed: f64,
    reached_center: bool,
}

impl Bird {
    pub const WIDTH: f64 = 30.0;
    pub const HEIGHT: f64 = 21.0;
    const X_SPEED: f64 = 1.5;
    const GRAVITY: f64 = 0.5;
    const FLAP_IMPULSE: f64 = 5.0;

    pub fn new(surface: Surface) -> Self {
        Self {
            x: Self::WIDTH / 2.0,
            y: surface.height / 2.0,
            x_speed: Self::X_SPEED,
            y_speed: 0.0,
            reached_center: false,
        }
    }

    /// One physics step. Returns true when the bird hit the ground.
    pub fn fly(&mut self, surface: Surface) -> bool {
        self.x += self.x_speed;
        self.y -= self.y_speed;

        // The bird stops advancing at mid-screen; from then on the
        // world scrolls instead.
        if self.x + Self::WIDTH / 2.0 > surface.width / 2.0 {
            self.x = surface.width / 2.0 - Self::WIDTH / 2.0;
            self.x_speed = 0.0;
            self.reached_center = true;
        }

        if self.y - Self::HEIGHT / 2.0 <= 0.0 {
            self.y = Self::HEIGHT / 2.0;
            self.y_speed = 0.0;
        }

        let mut grounded = false;
        if self.y + Self::HEIGHT / 2.0 >= surface.height {
            self.y = surface.height - Self::HEIGHT / 2.0;
            grounded = true;
        }

        self.y_speed -= Self::GRAVITY;
        grounded
    }

    pub fn flap(&mut self) {
        self.y_speed = Self::FLAP_IMPULSE;
    }

    /// True from the tick the mid-screen clamp first fired until the
    /// session is reset.
    pub fn is_at_screen_center(&self) -> bool {
        self.reached_center
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox {
            x: self.x,
            y: self.y,
            width: Self::WIDTH,
            height: Self::HEIGHT,
        }
    }
}
