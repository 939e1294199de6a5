// SPDX-License-Identifier: MPL-2.0
use iced_folio::domain::description::block::{is_bullet, strip_bullet};
use iced_folio::domain::description::{parse, Block};

/// One non-blank input line after trimming, with its bullet stripped.
#[derive(Debug)]
struct Line {
    bullet: bool,
    content: String,
}

fn input_lines(description: &str) -> Vec<Line> {
    description
        .split('\n')
        .map(|line| line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}'))
        .filter(|line| !line.is_empty())
        .map(|line| Line {
            bullet: is_bullet(line),
            content: strip_bullet(line).to_string(),
        })
        .collect()
}

/// Walks the blocks against the input lines: every line must be consumed
/// exactly once, in order, and bullet lines may only feed list items while
/// plain lines may only feed paragraphs and headings.
fn assert_covers(description: &str) {
    let blocks = parse(description);
    let mut lines = input_lines(description).into_iter();

    let mut take = |bullet: bool| -> String {
        let line = lines
            .next()
            .unwrap_or_else(|| panic!("output has more content than {description:?}"));
        assert_eq!(
            line.bullet, bullet,
            "line {line:?} landed in the wrong kind of block for {description:?}"
        );
        line.content
    };

    for block in &blocks {
        match block {
            Block::Paragraph { text } => {
                let mut joined = take(false);
                while joined.len() < text.len() {
                    joined.push(' ');
                    joined.push_str(&take(false));
                }
                assert_eq!(&joined, text, "paragraph mismatch for {description:?}");
            }
            Block::Section { heading, items } => {
                assert_eq!(&take(false), heading, "heading mismatch for {description:?}");
                assert!(!items.is_empty());
                for item in items {
                    assert_eq!(&take(true), item, "item mismatch for {description:?}");
                }
            }
            Block::List { items } => {
                assert!(!items.is_empty());
                for item in items {
                    assert_eq!(&take(true), item, "item mismatch for {description:?}");
                }
            }
        }
    }

    drop(take);
    assert!(
        lines.next().is_none(),
        "input lines left uncovered for {description:?}"
    );
}

/// Small deterministic generator so the corpus is reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }

    fn pick<'a>(&mut self, options: &[&'a str]) -> &'a str {
        options[(self.next() as usize) % options.len()]
    }
}

const FRAGMENTS: &[&str] = &[
    "",
    "   ",
    "Features",
    "  Built with Rust  ",
    "• fast",
    "•   padded item",
    "  • indented bullet",
    "•no space",
    "•",
    "a • b",
    "Tech stack:",
    "\t• tabbed",
    "\u{feff}• marked",
];

#[test]
fn every_line_is_covered_in_order() {
    let mut rng = Lcg(0x5eed);
    for _ in 0..500 {
        let len = (rng.next() % 12) as usize;
        let lines: Vec<&str> = (0..len).map(|_| rng.pick(FRAGMENTS)).collect();
        assert_covers(&lines.join("\n"));
    }
}

#[test]
fn coverage_holds_for_handwritten_documents() {
    for description in [
        "Intro line\nsecond line\n\nFeatures\n• a\n• b\n\n• loose",
        "• only\n• bullets",
        "Heading\n\n• separated list",
        "\n\n\ntrailing\n\n\n",
        "x\ny\n• z\nw",
        "\u{feff}• bom first\n• second",
    ] {
        assert_covers(description);
    }
}

#[test]
fn coverage_detects_block_boundaries() {
    // A heading with one item must not be confused with a two-line paragraph.
    assert_eq!(
        parse("x\n• y"),
        vec![Block::Section {
            heading: "x".to_string(),
            items: vec!["y".to_string()],
        }]
    );
    assert_eq!(
        parse("x\ny"),
        vec![Block::Paragraph {
            text: "x y".to_string()
        }]
    );
}

#[test]
fn blank_input_yields_nothing() {
    assert!(parse("").is_empty());
    assert!(parse("   \n\n").is_empty());
    assert!(parse("\t\n \n").is_empty());
}

#[test]
fn heading_followed_by_bullets_becomes_section() {
    assert_eq!(
        parse("Features\n• fast\n• cheap"),
        vec![Block::Section {
            heading: "Features".to_string(),
            items: vec!["fast".to_string(), "cheap".to_string()],
        }]
    );
}

#[test]
fn bullets_without_heading_become_list() {
    assert_eq!(
        parse("• one\n• two"),
        vec![Block::List {
            items: vec!["one".to_string(), "two".to_string()],
        }]
    );
}

#[test]
fn blank_line_separates_paragraphs() {
    assert_eq!(
        parse("line one\nline two\n\nline three"),
        vec![
            Block::Paragraph {
                text: "line one line two".to_string()
            },
            Block::Paragraph {
                text: "line three".to_string()
            },
        ]
    );
}

#[test]
fn realistic_project_description() {
    let description = "\
A small roguelike written for a weekend jam.
Runs in the browser.

Highlights
• procedural dungeons
• 8-bit soundtrack

Made with
• Rust
• WebAssembly

• no installer needed";

    let blocks = parse(description);

    assert_eq!(blocks.len(), 4);
    assert_eq!(
        blocks[0],
        Block::Paragraph {
            text: "A small roguelike written for a weekend jam. Runs in the browser.".to_string()
        }
    );
    assert!(matches!(&blocks[1], Block::Section { heading, .. } if heading == "Highlights"));
    assert!(matches!(&blocks[2], Block::Section { items, .. } if items == &["Rust", "WebAssembly"]));
    assert_eq!(
        blocks[3],
        Block::List {
            items: vec!["no installer needed".to_string()]
        }
    );
}
