// SPDX-License-Identifier: MPL-2.0
//! Line-oriented parser turning description text into [`Block`]s.
//!
//! The parser walks trimmed lines with a single line of lookahead:
//!
//! - a bullet line opens a [`Block::List`] that runs over consecutive bullet lines
//! - a plain line directly followed by a bullet line becomes a [`Block::Section`] heading
//! - any other plain line opens a [`Block::Paragraph`] that runs until a blank
//!   line, a bullet line, or the end of input
//!
//! Blank lines only separate blocks. A blank line always ends the current
//! run, so sections and lists never span an empty line.

use super::block::{is_bullet, strip_bullet, Block};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parses a project description into an ordered sequence of blocks.
///
/// Never fails: any input, including empty or whitespace-only text,
/// produces a (possibly empty) block sequence.
#[must_use]
pub fn parse(description: &str) -> Vec<Block> {
    let lines: Vec<&str> = description.split('\n').map(trim_line).collect();
    let mut blocks = Vec::new();
    let mut cursor = 0;

    while cursor < lines.len() {
        let line = lines[cursor];
        if line.is_empty() {
            cursor += 1;
            continue;
        }

        if is_bullet(line) {
            let items = take_bullets(&lines, &mut cursor);
            blocks.push(Block::List { items });
            continue;
        }

        let next_is_bullet = lines.get(cursor + 1).is_some_and(|next| is_bullet(next));
        if next_is_bullet {
            cursor += 1;
            let items = take_bullets(&lines, &mut cursor);
            blocks.push(Block::Section {
                heading: line.to_string(),
                items,
            });
        } else {
            let text = take_paragraph(&lines, &mut cursor);
            blocks.push(Block::Paragraph { text });
        }
    }

    blocks
}

/// Trims whitespace and byte order marks from both ends of a line.
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

/// Consumes consecutive bullet lines starting at `cursor`.
fn take_bullets(lines: &[&str], cursor: &mut usize) -> Vec<String> {
    let mut items = Vec::new();
    while let Some(line) = lines.get(*cursor).filter(|line| is_bullet(line)) {
        items.push(strip_bullet(line).to_string());
        *cursor += 1;
    }
    items
}

/// Consumes the plain line at `cursor` and every following non-blank,
/// non-bullet line, joining them with a single space.
fn take_paragraph(lines: &[&str], cursor: &mut usize) -> String {
    let mut text = String::from(lines[*cursor]);
    *cursor += 1;
    while let Some(line) = lines
        .get(*cursor)
        .filter(|line| !line.is_empty() && !is_bullet(line))
    {
        text.push(' ');
        text.push_str(line);
        *cursor += 1;
    }
    text
}
