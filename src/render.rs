//! Text rendering of the guess grid.
//!
//! The core hands renderers a [`Grid`](crate::session::Grid) in memory;
//! anything visual happens on this side of the boundary. The plain
//! renderer is always available, and an ANSI renderer with the familiar
//! green/yellow/gray palette lives behind the `fancy` feature.

use crate::{feedback::Grade, session::Grid};

/// Renders the grid as plain text, one row per line.
///
/// Correct letters appear as `[A]`, letters in the wrong position as
/// `(a)`, absent letters as ` a `, and unplayed cells as ` . `.
///
/// # Examples
///
/// ```rust
/// use wordle_chat::{render::render_plain, GameSession};
///
/// let mut session = GameSession::new("ROBOT");
/// session.submit_guess("BOOKS")?;
///
/// let rendered = render_plain(&session.grid());
/// assert_eq!(rendered.lines().next(), Some("(b)[O](o) k  s "));
/// #
/// # Ok::<_, wordle_chat::WordleError>(())
/// ```
pub fn render_plain(grid: &Grid) -> String {
    let mut out = String::new();
    for row in grid {
        for cell in row {
            match cell {
                Some((c, Grade::Correct)) => {
                    out.push('[');
                    out.push(c.to_ascii_uppercase());
                    out.push(']');
                }
                Some((c, Grade::Almost)) => {
                    out.push('(');
                    out.push(c.to_ascii_lowercase());
                    out.push(')');
                }
                Some((c, Grade::Incorrect)) => {
                    out.push(' ');
                    out.push(c.to_ascii_lowercase());
                    out.push(' ');
                }
                None => out.push_str(" . "),
            }
        }
        out.push('\n');
    }
    out
}

/// Renders the grid with ANSI background colors: green for correct,
/// yellow for almost, gray for incorrect, and a light gray for unplayed
/// cells.
#[cfg(feature = "fancy")]
#[cfg_attr(docsrs, doc(cfg(feature = "fancy")))]
pub fn render_ansi(grid: &Grid) -> String {
    use owo_colors::OwoColorize;

    let mut out = String::new();
    for row in grid {
        for cell in row {
            let rendered = match cell {
                Some((c, Grade::Correct)) => {
                    format!("{}", format!(" {} ", c).white().on_green())
                }
                Some((c, Grade::Almost)) => {
                    format!("{}", format!(" {} ", c).white().on_yellow())
                }
                Some((c, Grade::Incorrect)) => {
                    format!("{}", format!(" {} ", c).white().on_bright_black())
                }
                None => format!("{}", "   ".on_bright_white()),
            };
            out.push_str(&rendered);
        }
        out.push('\n');
    }
    out
}
