//! Terminal rendering for the live countdown screen.
//!
//! The screen is fully redrawn once per tick - at 1 Hz there is nothing to
//! gain from damage tracking. While the screen is active the process owns
//! the terminal: raw mode, alternate screen, hidden cursor. `TerminalGuard`
//! restores everything on drop so a panic or early return never leaves the
//! shell in a broken state.

use std::io::{Write, stdout};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};

use crate::config::Theme;
use crate::constants::PROGRESS_BAR_WIDTH;
use crate::phase::{CountdownState, Phase};

/// RAII ownership of the terminal for the countdown screen.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn acquire() -> Result<Self> {
        terminal::enable_raw_mode()?;
        crossterm::execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide,
            Clear(ClearType::All)
        )?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = crossterm::execute!(
            stdout(),
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Everything one frame needs, borrowed from the running session.
pub struct FrameView<'a> {
    pub location_label: &'a str,
    pub hijri_date: &'a str,
    pub gregorian_date: &'a str,
    pub phase: Phase,
    pub countdown: CountdownState,
    pub progress: Option<f64>,
    pub fajr_display: &'a str,
    pub maghrib_display: &'a str,
    pub show_banner: bool,
    pub theme: Theme,
}

fn accent(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::Yellow,
        Theme::Light => Color::DarkYellow,
    }
}

/// Build the textual progress bar, e.g. `[████░░░░] 50%`.
pub fn progress_bar(ratio: f64, width: usize) -> String {
    let filled = (ratio * width as f64).round() as usize;
    let filled = filled.min(width);
    format!(
        "[{}{}] {:3.0}%",
        "█".repeat(filled),
        "░".repeat(width - filled),
        ratio * 100.0
    )
}

/// Zero-padded `HH : MM : SS` countdown text.
pub fn countdown_text(countdown: &CountdownState) -> String {
    format!(
        "{:02} : {:02} : {:02}",
        countdown.hours, countdown.minutes, countdown.seconds
    )
}

fn write_line(out: &mut std::io::Stdout, row: &mut u16, text: &str) -> Result<()> {
    crossterm::queue!(out, cursor::MoveTo(2, *row), Print(text))?;
    *row += 1;
    Ok(())
}

/// Redraw the whole countdown screen.
pub fn draw_frame(view: &FrameView) -> Result<()> {
    let mut out = stdout();
    let accent = accent(view.theme);

    crossterm::queue!(out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;

    let mut row = 1u16;
    write_line(&mut out, &mut row, view.location_label)?;
    write_line(
        &mut out,
        &mut row,
        &format!("{} \u{b7} {}", view.hijri_date, view.gregorian_date),
    )?;
    row += 1;

    if view.show_banner {
        crossterm::queue!(out, SetForegroundColor(accent))?;
        write_line(&mut out, &mut row, "\u{2726} Iftar Mubarak! \u{2726}")?;
        crossterm::queue!(out, ResetColor)?;
        write_line(&mut out, &mut row, "The fast is broken. Enjoy your meal!")?;
    } else {
        crossterm::queue!(out, SetForegroundColor(accent))?;
        write_line(&mut out, &mut row, &countdown_text(&view.countdown))?;
        crossterm::queue!(out, ResetColor)?;
        write_line(&mut out, &mut row, view.phase.countdown_label())?;
        row += 1;
        if let Some(ratio) = view.progress {
            write_line(&mut out, &mut row, &progress_bar(ratio, PROGRESS_BAR_WIDTH))?;
        }
    }

    row += 1;
    let boundaries = if view.phase.is_fasting() {
        format!(
            "Maghrib: {} \u{b7} Fajr: {}",
            view.maghrib_display, view.fajr_display
        )
    } else {
        format!(
            "Fajr: {} \u{b7} Maghrib: {}",
            view.fajr_display, view.maghrib_display
        )
    };
    write_line(&mut out, &mut row, &boundaries)?;
    write_line(&mut out, &mut row, "press q to quit")?;

    out.flush()?;
    Ok(())
}
