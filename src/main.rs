//! Terminal platformer runner (default binary).
//!
//! Fixed-tick game loop: input is polled until the next tick is due, then the
//! world advances one frame with the keys held at that moment and the frame
//! is drawn through the diffing framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_platformer::config::GameConfig;
use tui_platformer::core::{Level, World};
use tui_platformer::input::{should_quit, InputHandler};
use tui_platformer::logging;
use tui_platformer::term::{FrameBuffer, TerminalRenderer, Viewport, WorldView};

fn main() -> Result<()> {
    let (config, config_errors) = GameConfig::from_env();
    if let Some(path) = &config.log_path {
        logging::init_file(path)?;
    }
    for e in &config_errors {
        log::warn!("{e}; using the default");
    }
    log::info!("starting with {config:?}");

    let level = match &config.level_path {
        Some(path) => Level::load(path)
            .with_context(|| format!("failed to load level {}", path.display()))?,
        None => Level::default(),
    };

    // A panic must not leave the terminal in raw mode.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = TerminalRenderer::new().exit();
        default_hook(info);
    }));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, World::new(level));

    // Always try to restore terminal state.
    let _ = term.exit();
    log::info!("quit");
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig, mut world: World) -> Result<()> {
    let view = WorldView::new(config.cell_px.0, config.cell_px.1);
    let mut input = InputHandler::new()
        .with_release_events(term.release_events())
        .with_key_release_timeout_ms(config.key_release_timeout_ms);

    let tick_ms = config.tick_ms();
    let tick_duration = Duration::from_millis(u64::from(tick_ms));
    let mut last_tick = Instant::now();

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    let mut fb = FrameBuffer::new(w, h);

    loop {
        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        input.handle_key_press(key);
                    }
                    KeyEventKind::Repeat => input.handle_key_repeat(key),
                    KeyEventKind::Release => input.handle_key_release(key),
                },
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    term.invalidate();
                }
                Event::FocusLost => input.reset(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            for action in input.take_actions() {
                world.apply_action(action);
            }

            let held = input.update(tick_ms);
            world.update(held);

            if config.respawn && world.player_fell_out() {
                log::info!("player fell out at frame {}", world.frame());
                world.restart();
            }

            view.render_into(&world, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }
    }
}
