//! RGB pixel buffer flushed to the terminal as U+2580 half-blocks:
//! each cell carries two vertically stacked pixels (foreground = top,
//! background = bottom), so a W x H terminal gives a W x 2H canvas.

use crossterm::{
    cursor, queue,
    style::{self, Color as CColor},
};
use std::io::{self, Write};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Linear blend from `a` to `b`, with `t_256` in 0..=256.
    pub const fn lerp(a: Rgb, b: Rgb, t_256: u16) -> Rgb {
        let t = t_256 as i32;
        Rgb(
            (a.0 as i32 + (b.0 as i32 - a.0 as i32) * t / 256) as u8,
            (a.1 as i32 + (b.1 as i32 - a.1 as i32) * t / 256) as u8,
            (a.2 as i32 + (b.2 as i32 - a.2 as i32) * t / 256) as u8,
        )
    }

    const fn halved(self) -> Rgb {
        Rgb(self.0 / 2, self.1 / 2, self.2 / 2)
    }
}

pub struct PixelBuf {
    pub w: usize,
    pub h: usize, // pixel height = terminal rows * 2
    fill: Rgb,
    px: Vec<Rgb>,
}

impl PixelBuf {
    pub fn new(w: usize, h: usize, fill: Rgb) -> Self {
        Self {
            w,
            h,
            fill,
            px: vec![fill; w * h],
        }
    }

    pub fn resize(&mut self, w: usize, h: usize) {
        self.w = w;
        self.h = h;
        self.px.clear();
        self.px.resize(w * h, self.fill);
    }

    pub fn set(&mut self, x: i32, y: i32, c: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h {
            self.px[y as usize * self.w + x as usize] = c;
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.px[y * self.w + x]
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, c: Rgb) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, c);
            }
        }
    }

    /// Darken every pixel in place. Used to push a finished frame into
    /// the background before drawing an overlay on top of it.
    pub fn dim(&mut self) {
        for p in &mut self.px {
            *p = p.halved();
        }
    }

    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(out, cursor::MoveTo(0, 0))?;
        let rows = self.h / 2;
        let mut prev_fg = Rgb(0, 0, 0);
        let mut prev_bg = Rgb(0, 0, 0);
        let mut need_fg = true;
        let mut need_bg = true;

        for row in 0..rows {
            for col in 0..self.w {
                let top = self.get(col, row * 2);
                let bot = self.get(col, row * 2 + 1);

                if top == bot {
                    if need_bg || prev_bg != top {
                        queue!(
                            out,
                            style::SetBackgroundColor(CColor::Rgb {
                                r: top.0,
                                g: top.1,
                                b: top.2
                            })
                        )?;
                        prev_bg = top;
                        need_bg = false;
                    }
                    queue!(out, style::Print(' '))?;
                } else {
                    if need_fg || prev_fg != top {
                        queue!(
                            out,
                            style::SetForegroundColor(CColor::Rgb {
                                r: top.0,
                                g: top.1,
                                b: top.2
                            })
                        )?;
                        prev_fg = top;
                        need_fg = false;
                    }
                    if need_bg || prev_bg != bot {
                        queue!(
                            out,
                            style::SetBackgroundColor(CColor::Rgb {
                                r: bot.0,
                                g: bot.1,
                                b: bot.2
                            })
                        )?;
                        prev_bg = bot;
                        need_bg = false;
                    }
                    queue!(out, style::Print('\u{2580}'))?; // ▀
                }
            }
            if row < rows - 1 {
                queue!(out, style::ResetColor, style::Print("\r\n"))?;
                need_fg = true;
                need_bg = true;
            }
        }
        queue!(out, style::ResetColor)?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_roundtrip() {
        let mut buf = PixelBuf::new(8, 8, Rgb(0, 0, 0));
        buf.set(3, 5, Rgb(10, 20, 30));
        assert_eq!(buf.get(3, 5), Rgb(10, 20, 30));
        assert_eq!(buf.get(0, 0), Rgb(0, 0, 0));
    }

    #[test]
    fn out_of_bounds_set_is_ignored() {
        let mut buf = PixelBuf::new(4, 4, Rgb(1, 1, 1));
        buf.set(-1, 0, Rgb(9, 9, 9));
        buf.set(0, -1, Rgb(9, 9, 9));
        buf.set(4, 0, Rgb(9, 9, 9));
        buf.set(0, 4, Rgb(9, 9, 9));
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(buf.get(x, y), Rgb(1, 1, 1));
            }
        }
    }

    #[test]
    fn dim_halves_channels() {
        let mut buf = PixelBuf::new(2, 2, Rgb(200, 100, 50));
        buf.dim();
        assert_eq!(buf.get(0, 0), Rgb(100, 50, 25));
        assert_eq!(buf.get(1, 1), Rgb(100, 50, 25));
    }

    #[test]
    fn resize_refills_with_background() {
        let mut buf = PixelBuf::new(2, 2, Rgb(7, 7, 7));
        buf.set(0, 0, Rgb(0, 0, 0));
        buf.resize(3, 6);
        assert_eq!(buf.w, 3);
        assert_eq!(buf.h, 6);
        assert_eq!(buf.get(0, 0), Rgb(7, 7, 7));
        assert_eq!(buf.get(2, 5), Rgb(7, 7, 7));
    }

    #[test]
    fn lerp_endpoints() {
        let a = Rgb(0, 100, 200);
        let b = Rgb(200, 100, 0);
        assert_eq!(Rgb::lerp(a, b, 0), a);
        assert_eq!(Rgb::lerp(a, b, 256), b);
    }
}
