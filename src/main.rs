mod bird;
mod draw;
mod game;
mod gap;
mod pixel;
mod sound;
mod text;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode},
    execute, terminal,
};
use std::io::{self, stdout};
use std::time::{Duration, Instant};

use game::{Game, SURFACE, TICK_MS};
use pixel::PixelBuf;
use sound::Sounds;

fn main() -> io::Result<()> {
    terminal::enable_raw_mode()?;
    let mut out = stdout();
    execute!(
        out,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        terminal::DisableLineWrap,
    )?;

    let cleanup = |out: &mut io::Stdout| -> io::Result<()> {
        execute!(
            out,
            terminal::LeaveAlternateScreen,
            cursor::Show,
            terminal::EnableLineWrap,
        )?;
        terminal::disable_raw_mode()
    };

    let (cols, rows) = terminal::size()?;
    let mut buf = PixelBuf::new(cols as usize, rows as usize * 2, draw::SKY_TOP);
    let mut rng = rand::thread_rng();
    let mut game = Game::new(SURFACE, Sounds::open());

    let frame_dur = Duration::from_millis(TICK_MS);

    loop {
        let frame_start = Instant::now();

        // Input
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        cleanup(&mut out)?;
                        return Ok(());
                    }
                    KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Up => {
                        game.confirm(&mut rng);
                    }
                    _ => {}
                },
                Event::Resize(c, r) => {
                    buf.resize(c as usize, r as usize * 2);
                }
                _ => {}
            }
        }

        // Simulate and render
        game.tick(&mut rng);
        draw::frame(&game, &mut buf);
        buf.render(&mut out)?;

        // Frame pacing
        let elapsed = frame_start.elapsed();
        if elapsed < frame_dur {
            std::thread::sleep(frame_dur - elapsed);
        }
    }
}
