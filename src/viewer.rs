// ABOUTME: Terminal front end for the poseur application
// ABOUTME: Decodes display markup into ANSI output and drives the navigator

use crate::errors::{PoseurError, Result};
use crate::navigator::{Navigator, Step};
use crate::slides::Presentation;
use log::debug;
use std::io::{BufRead, Write};

const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_ITALIC: &str = "\x1b[3m";
const ANSI_UNDERLINE: &str = "\x1b[4m";
const ANSI_RESET: &str = "\x1b[0m";
const ANSI_CLEAR: &str = "\x1b[2J\x1b[1;1H";

/// Configuration for the terminal front end.
pub struct ViewerConfig {
    /// Display width in columns, used to pad centered lines.
    pub width: usize,

    /// Clear the terminal before every redraw.
    pub fullscreen: bool,

    /// Text shown once the show has ended.
    pub end_text: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: 80,
            fullscreen: false,
            end_text: "(end of slideshow)".to_string(),
        }
    }
}

/// Drive the navigator interactively, reading one command per input line:
/// an empty line, `n` or `f` advances, `b` or `p` retreats, `q` quits.
/// Returns once the show ends or the input is exhausted.
pub fn run<R: BufRead, W: Write>(
    navigator: &mut Navigator,
    config: &ViewerConfig,
    input: R,
    output: &mut W,
) -> Result<()> {
    draw(navigator, config, output)?;
    if navigator.is_finished() {
        // Degenerate empty deck: nothing to page through.
        return finish(config, output);
    }

    for command in input.lines() {
        let command = command.map_err(PoseurError::InputReadError)?;
        let step = match command.trim() {
            "" | "n" | "f" => navigator.advance(),
            "b" | "p" => navigator.retreat(),
            "q" => break,
            _ => {
                writeln!(output, "? (enter advances, b goes back, q quits)")
                    .map_err(PoseurError::DisplayError)?;
                continue;
            }
        };
        debug!(
            "Command {:?} -> {:?}, position {:?}",
            command.trim(),
            step,
            navigator.position()
        );

        if step == Step::End {
            return finish(config, output);
        }
        draw(navigator, config, output)?;
    }

    Ok(())
}

/// Print every slide in full, in order. Used when the slide source was
/// standard input and no interactive channel is left.
pub fn print_all<W: Write>(
    presentation: &Presentation,
    config: &ViewerConfig,
    output: &mut W,
) -> Result<()> {
    for (index, slide) in presentation.slides().iter().enumerate() {
        if index > 0 {
            writeln!(output).map_err(PoseurError::DisplayError)?;
        }
        for item in slide.items() {
            writeln!(output, "{}", render_item(item.text(), config))
                .map_err(PoseurError::DisplayError)?;
        }
    }
    output.flush().map_err(PoseurError::DisplayError)
}

fn draw<W: Write>(navigator: &Navigator, config: &ViewerConfig, output: &mut W) -> Result<()> {
    if config.fullscreen {
        write!(output, "{}", ANSI_CLEAR).map_err(PoseurError::DisplayError)?;
    }
    for item in navigator.current_items() {
        writeln!(output, "{}", render_item(item.text(), config))
            .map_err(PoseurError::DisplayError)?;
    }
    output.flush().map_err(PoseurError::DisplayError)
}

fn finish<W: Write>(config: &ViewerConfig, output: &mut W) -> Result<()> {
    if !config.end_text.is_empty() {
        writeln!(output, "{}", config.end_text).map_err(PoseurError::DisplayError)?;
    }
    output.flush().map_err(PoseurError::DisplayError)
}

/// Decode one item's display markup into a terminal-ready string.
fn render_item(text: &str, config: &ViewerConfig) -> String {
    // A soft break appended by the segmenter sits outside any structural
    // tag, so split it off before matching on the wrapper.
    let (body, soft_break) = match text.strip_suffix("<br />") {
        Some(stripped) => (stripped, true),
        None => (text, false),
    };

    let mut line = if let Some(pre) = strip_wrapped(body, "<pre>", "</pre>") {
        // Preformatted content is verbatim; only character references are
        // decoded. Indent it to keep it visually distinct.
        format!("  {}", decode_char_refs(pre))
    } else if let Some(inner) = strip_wrapped(body, "<center>", "</center>") {
        let decoded = decode_inline(inner);
        let pad = config.width.saturating_sub(visible_width(&decoded)) / 2;
        format!("{}{}", " ".repeat(pad), decoded)
    } else if let Some(inner) = strip_wrapped(body, "<ul><li>", "</li></ul>") {
        format!("  \u{2022} {}", decode_inline(inner))
    } else {
        decode_inline(body)
    };

    if soft_break {
        line.push('\n');
    }
    line
}

fn strip_wrapped<'a>(text: &'a str, open: &str, close: &str) -> Option<&'a str> {
    text.strip_prefix(open)?.strip_suffix(close)
}

/// Decode inline emphasis tags and entities into ANSI escapes and text.
fn decode_inline(text: &str) -> String {
    let replaced = text
        .replace("<i>", ANSI_ITALIC)
        .replace("</i>", ANSI_RESET)
        .replace("<b>", ANSI_BOLD)
        .replace("</b>", ANSI_RESET)
        .replace("<u>", ANSI_UNDERLINE)
        .replace("</u>", ANSI_RESET)
        .replace("&mdash;", "\u{2014}");
    decode_char_refs(&replaced)
}

/// Decode decimal `&#N;` character references; anything malformed is left
/// verbatim.
fn decode_char_refs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("&#") {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 2..];
        match tail.find(';') {
            Some(end) => {
                let digits = &tail[..end];
                match digits.parse::<u32>().ok().and_then(char::from_u32) {
                    Some(ch) => out.push(ch),
                    None => {
                        out.push_str("&#");
                        out.push_str(digits);
                        out.push(';');
                    }
                }
                rest = &tail[end + 1..];
            }
            None => {
                out.push_str("&#");
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Count the printed columns of a string, skipping ANSI escape sequences.
fn visible_width(text: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for ch in text.chars() {
        if in_escape {
            if ch == 'm' {
                in_escape = false;
            }
        } else if ch == '\u{1b}' {
            in_escape = true;
        } else {
            width += 1;
        }
    }
    width
}
