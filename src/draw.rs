//! Frame painting. The simulation lives in logical 800x600 units;
//! everything here scales to the current pixel buffer, back to front.

use crate::bird::Bird;
use crate::game::{Game, Screen};
use crate::gap::Gap;
use crate::pixel::{PixelBuf, Rgb};
use crate::text;

pub const SKY_TOP: Rgb = Rgb(70, 180, 200);
const SKY_BOT: Rgb = Rgb(190, 232, 245);
const GRASS: Rgb = Rgb(84, 168, 55);
const GRASS_LIGHT: Rgb = Rgb(110, 200, 70);
const PIPE_L: Rgb = Rgb(74, 122, 26);
const PIPE_M: Rgb = Rgb(100, 170, 40);
const PIPE_R: Rgb = Rgb(115, 191, 46);
const PIPE_HI: Rgb = Rgb(145, 215, 62);
const CAP_DARK: Rgb = Rgb(60, 100, 20);
const BIRD_Y: Rgb = Rgb(245, 200, 66);
const BIRD_HI: Rgb = Rgb(255, 225, 100);
const BIRD_WING: Rgb = Rgb(215, 165, 35);
const BIRD_PUPIL: Rgb = Rgb(20, 20, 20);
const BIRD_BEAK: Rgb = Rgb(225, 75, 35);
const HILL_FAR: Rgb = Rgb(120, 195, 75);
const HILL_NEAR: Rgb = Rgb(95, 175, 55);
const WHITE: Rgb = Rgb(255, 255, 255);
const SHADOW: Rgb = Rgb(30, 30, 30);
const PANEL: Rgb = Rgb(210, 185, 110);
const PANEL_LIGHT: Rgb = Rgb(220, 195, 120);
const PANEL_TEXT: Rgb = Rgb(200, 60, 40);

pub fn frame(game: &Game, buf: &mut PixelBuf) {
    match game.screen {
        Screen::Welcome => welcome(buf),
        Screen::Playing => scene(game, buf),
        Screen::GameOver => {
            // the last frame stays up, pushed back behind the panel
            scene(game, buf);
            buf.dim();
            game_over_panel(game, buf);
        }
    }
}

fn welcome(buf: &mut PixelBuf) {
    draw_sky(buf);
    draw_hills(buf, 0.0);
    draw_ground(buf, 0.0);

    let cx = buf.w as i32 / 2;
    text::draw_text_centered(buf, cx, buf.h as i32 / 4, "SKYGAP", BIRD_Y, 2);
    text::draw_text_centered(buf, cx, buf.h as i32 / 2, "PRESS ENTER TO START", WHITE, 1);
}

fn scene(game: &Game, buf: &mut PixelBuf) {
    let sx = buf.w as f64 / game.surface.width;
    let sy = buf.h as f64 / game.surface.height;
    let scroll_px = game.scroll * sx;

    draw_sky(buf);
    draw_hills(buf, scroll_px);
    draw_pipes(game, buf, sx, sy);
    draw_ground(buf, scroll_px);
    draw_bird(game, buf, sx, sy);

    text::draw_text(buf, 3, 2, &format!("SCORE {}", game.score), WHITE, 1);
}

fn draw_sky(buf: &mut PixelBuf) {
    let h = buf.h;
    for y in 0..h {
        let t = ((y as u32 * 256) / h.max(1) as u32) as u16;
        let c = Rgb::lerp(SKY_TOP, SKY_BOT, t);
        for x in 0..buf.w {
            buf.set(x as i32, y as i32, c);
        }
    }
}

fn draw_hills(buf: &mut PixelBuf, scroll_px: f64) {
    let s = buf.h as f64 / 48.0;
    let base = buf.h as i32 - 2;
    // Far hills
    for x in 0..buf.w as i32 {
        let fx = (x as f64 + scroll_px * 0.2) * 0.04;
        let h = (fx.sin() * 6.0 + (fx * 1.7).sin() * 3.0) * s;
        let top = base - h as i32 - (4.0 * s) as i32;
        for y in top..base {
            buf.set(x, y, HILL_FAR);
        }
    }
    // Near hills
    for x in 0..buf.w as i32 {
        let fx = (x as f64 + scroll_px * 0.4) * 0.06;
        let h = (fx.sin() * 4.0 + (fx * 2.3).sin() * 2.0) * s;
        let top = base - h as i32 - (2.0 * s) as i32;
        for y in top..base {
            buf.set(x, y, HILL_NEAR);
        }
    }
}

fn draw_ground(buf: &mut PixelBuf, scroll_px: f64) {
    let gy = buf.h as i32 - 2;
    for x in 0..buf.w as i32 {
        let alt = ((x as f64 + scroll_px) as i32 / 3) % 2 == 0;
        buf.set(x, gy, if alt { GRASS } else { GRASS_LIGHT });
        buf.set(x, gy + 1, GRASS);
    }
}

fn draw_pipes(game: &Game, buf: &mut PixelBuf, sx: f64, sy: f64) {
    let s = buf.h as f64 / 48.0;
    let cap_extra = (1.0 * s).max(1.0) as i32;
    let cap_h = (2.0 * s).max(1.0) as i32;

    for gap in &game.gaps {
        let left = ((gap.x_pos - Gap::WIDTH / 2.0) * sx).round() as i32;
        let right = ((gap.x_pos + Gap::WIDTH / 2.0) * sx).round() as i32;
        let w = (right - left).max(1);
        let (top, bottom) = gap.opening();
        let top_px = (top * sy).round() as i32;
        let bot_px = (bottom * sy).round() as i32;

        // Pipe bodies
        for x in 0..w {
            let c = pipe_shade(x, w);
            for y in 0..(top_px - cap_h) {
                buf.set(left + x, y, c);
            }
            for y in (bot_px + cap_h)..buf.h as i32 {
                buf.set(left + x, y, c);
            }
        }
        // Caps flare out a little on both sides of the opening
        for x in -cap_extra..(w + cap_extra) {
            let c = pipe_shade(x + cap_extra, w + cap_extra * 2);
            for y in (top_px - cap_h)..top_px {
                buf.set(left + x, y, c);
            }
            for y in bot_px..(bot_px + cap_h) {
                buf.set(left + x, y, c);
            }
            buf.set(left + x, top_px - cap_h, CAP_DARK);
            buf.set(left + x, top_px - 1, CAP_DARK);
            buf.set(left + x, bot_px, CAP_DARK);
            buf.set(left + x, bot_px + cap_h - 1, CAP_DARK);
        }
    }
}

fn draw_bird(game: &Game, buf: &mut PixelBuf, sx: f64, sy: f64) {
    let bird = &game.bird;
    let cx = (bird.x * sx).round() as i32;
    let cy = (bird.y * sy).round() as i32;
    let bw = ((Bird::WIDTH * sx) / 2.0).max(1.0) as i32;
    let bh = ((Bird::HEIGHT * sy) / 2.0).max(1.0) as i32;

    // Nose up right after a flap, down while falling
    let tilt = (-bird.y_speed / 5.0).clamp(-1.0, 1.0) as i32;

    // Body
    buf.fill_rect(cx - bw, cy - bh, bw * 2 + 1, bh * 2, BIRD_Y);
    buf.fill_rect(cx - bw + 1, cy - bh, bw * 2 - 2, 1, BIRD_HI);

    // Wing
    let wing_y_off = if game.ticks % 8 < 4 { -1 } else { 0 };
    buf.fill_rect(cx - bw + 1, cy + wing_y_off + tilt, bw, bh, BIRD_WING);

    // Eye and beak
    buf.set(cx + bw - 1, cy - bh + 1, WHITE);
    buf.set(cx + bw, cy - bh + 1, BIRD_PUPIL);
    buf.fill_rect(cx + bw + 1, cy + tilt, (bw / 2).max(1), (bh / 2).max(1), BIRD_BEAK);

    // Tail
    buf.fill_rect(cx - bw - 1, cy - 1 + tilt, 1, 2, BIRD_WING);
}

fn game_over_panel(game: &Game, buf: &mut PixelBuf) {
    let cx = buf.w as i32 / 2;
    let cy = buf.h as i32 / 2;
    let prompt = "ENTER TO PLAY AGAIN";
    let panel_w = (text::text_width(prompt, 1) + 8).max(text::text_width("GAME OVER", 2) + 8);
    let panel_h = 27;

    let px = cx - panel_w / 2;
    let py = cy - panel_h / 2;
    buf.fill_rect(px - 1, py - 1, panel_w + 2, panel_h + 2, SHADOW);
    buf.fill_rect(px, py, panel_w, panel_h, PANEL);
    buf.fill_rect(px + 1, py + 1, panel_w - 2, panel_h - 2, PANEL_LIGHT);

    text::draw_text_centered(buf, cx, py + 3, "GAME OVER", PANEL_TEXT, 2);
    text::draw_number(buf, cx, py + 15, game.score, WHITE);
    text::draw_text_centered(buf, cx, py + 21, prompt, SHADOW, 1);
}

fn pipe_shade(x: i32, total_w: i32) -> Rgb {
    if total_w <= 1 {
        return PIPE_M;
    }
    let t = (x as f64 / (total_w - 1) as f64 * 256.0) as u16;
    if t < 64 {
        Rgb::lerp(PIPE_L, PIPE_M, (t * 4).min(256))
    } else if t < 100 {
        Rgb::lerp(PIPE_M, PIPE_HI, ((t - 64) * 7).min(256))
    } else if t < 160 {
        Rgb::lerp(PIPE_HI, PIPE_R, ((t - 100) * 4).min(256))
    } else {
        Rgb::lerp(PIPE_R, PIPE_L, ((t - 160) * 3).min(256))
    }
}
