//! Session orchestration: the screen state machine, the obstacle ring,
//! and the fixed-cadence simulation step.

use std::collections::VecDeque;

use rand::Rng;

use crate::bird::Bird;
use crate::gap::Gap;
use crate::sound::Sounds;

/// Logical surface the simulation runs in. Rendering scales this to
/// whatever the terminal provides; physics never sees the terminal.
#[derive(Clone, Copy, Debug)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
}

pub const SURFACE: Surface = Surface {
    width: 800.0,
    height: 600.0,
};

/// Simulation step interval in milliseconds. This clock drives all
/// physics, so changing it changes game speed.
pub const TICK_MS: u64 = 20;

/// Columns of the obstacle ring at session start.
pub const INITIAL_GAP_COLUMNS: [f64; 5] = [250.0, 400.0, 550.0, 700.0, 850.0];

/// Horizontal distance between a recycled pipe pair and the rightmost one.
pub const GAP_SPACING: f64 = 150.0;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Screen {
    Welcome,
    Playing,
    GameOver,
}

pub struct Game {
    pub surface: Surface,
    pub screen: Screen,
    pub score: u32,
    pub bird: Bird,
    /// Upcoming obstacles, insertion order = left-to-right.
    pub gaps: VecDeque<Gap>,
    /// How far the world has scrolled this session, in logical units.
    pub scroll: f64,
    /// Simulation steps taken this session.
    pub ticks: u64,
    recycled: u32,
    sounds: Sounds,
}

impl Game {
    pub fn new(surface: Surface, sounds: Sounds) -> Self {
        Self {
            surface,
            screen: Screen::Welcome,
            score: 0,
            bird: Bird::new(surface),
            gaps: VecDeque::new(),
            scroll: 0.0,
            ticks: 0,
            recycled: 0,
            sounds,
        }
    }

    /// Reset the session and enter play.
    pub fn start(&mut self, rng: &mut impl Rng) {
        self.score = 0;
        self.recycled = 0;
        self.scroll = 0.0;
        self.ticks = 0;
        let surface = self.surface;
        self.bird = Bird::new(surface);
        self.gaps = INITIAL_GAP_COLUMNS
            .iter()
            .map(|&x| Gap::new(x, surface, rng))
            .collect();
        self.screen = Screen::Playing;
    }

    /// The one confirm input, dispatched by screen state: it starts,
    /// restarts, and flaps.
    pub fn confirm(&mut self, rng: &mut impl Rng) {
        match self.screen {
            Screen::Welcome | Screen::GameOver => self.start(rng),
            Screen::Playing => {
                self.bird.flap();
                self.sounds.flap();
            }
        }
    }

    /// One simulation step. Does nothing outside of play, which is what
    /// stops all mutation after a game over.
    pub fn tick(&mut self, rng: &mut impl Rng) {
        if self.screen != Screen::Playing {
            return;
        }
        self.ticks += 1;

        let grounded = self.bird.fly(self.surface);

        // The world only scrolls once the bird has stopped advancing.
        if self.bird.is_at_screen_center() {
            for gap in &mut self.gaps {
                gap.advance();
            }
            self.scroll += Gap::X_SPEED;
        }

        // Recycle pipe pairs that scrolled off the left edge: pop the
        // front, append behind the rightmost. The ring count is constant.
        while self.gaps.front().is_some_and(Gap::is_off_screen) {
            self.gaps.pop_front();
            self.recycled += 1;
            let next_x = self.gaps.back().map_or(GAP_SPACING, |g| g.x_pos + GAP_SPACING);
            let gap = Gap::new(next_x, self.surface, rng);
            self.gaps.push_back(gap);
        }

        let body = self.bird.hitbox();
        let passed = self.gaps.iter().filter(|g| g.is_passed_by(&body)).count() as u32;
        let collided = self.gaps.iter().any(|g| g.collision_with(&body));

        let total = passed + self.recycled;
        if total > self.score {
            self.score = total;
            self.sounds.score();
        }

        // The step runs to completion before the transition, so the
        // final tick still scores and renders like any other.
        if grounded || collided {
            self.sounds.death();
            self.screen = Screen::GameOver;
        }
    }
}
