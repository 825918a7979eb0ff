//! Timed typewriter playback.
//!
//! Every frame is rendered from scratch and drawn over the previous one. Any key press skips
//! straight to the full text.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use codeview_core::{FoldState, Typewriter};
use codeview_highlight::{CodeSnapshot, CodeView};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, execute, queue};

use crate::render::Renderer;

/// Raw mode plus hidden cursor, restored on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = execute!(io::stdout(), cursor::Show) {
            tracing::warn!(%err, "failed to show cursor");
        }
        if let Err(err) = terminal::disable_raw_mode() {
            tracing::warn!(%err, "failed to leave raw mode");
        }
    }
}

/// Play `code` frame by frame, waiting `delay` between frames.
pub fn play<W: Write>(
    out: &mut W,
    view: &CodeView,
    code: &str,
    folds: &FoldState,
    renderer: &Renderer,
    delay: Duration,
) -> io::Result<()> {
    let _guard = TerminalGuard::enable()?;
    let renderer = renderer.clone().raw_mode(true);
    let mut drawn = 0;

    let mut frames = Typewriter::new(code).peekable();
    while let Some(frame) = frames.next() {
        drawn = redraw(out, &renderer, &view.render(frame, folds), drawn)?;
        if frames.peek().is_some() && interrupted(delay)? {
            tracing::debug!("typewriter skipped to the end");
            redraw(out, &renderer, &view.render(code, folds), drawn)?;
            break;
        }
    }
    Ok(())
}

fn redraw<W: Write>(
    out: &mut W,
    renderer: &Renderer,
    snapshot: &CodeSnapshot,
    previous_lines: usize,
) -> io::Result<usize> {
    if previous_lines > 0 {
        let up = u16::try_from(previous_lines).unwrap_or(u16::MAX);
        queue!(
            out,
            cursor::MoveToPreviousLine(up),
            terminal::Clear(ClearType::FromCursorDown)
        )?;
    }
    renderer.write_snapshot(out, snapshot)
}

/// Sleep for `delay`, returning early with `true` on a key press.
fn interrupted(delay: Duration) -> io::Result<bool> {
    let deadline = Instant::now() + delay;
    loop {
        let left = deadline.saturating_duration_since(Instant::now());
        if !event::poll(left)? {
            return Ok(false);
        }
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            return Ok(true);
        }
    }
}
