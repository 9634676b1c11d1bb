//! outline::leader
//!
//! Leader alignment.
//!
//! Entries that cross-reference another lexeme get a dotted leader ending
//! in a common column:
//!
//! ```text
//! 1.2 charlie ...... echo
//!             ...... hotel
//! 1.3.1 fox trot
//! 1.3.2.1 hotel .... charlie
//! ```
//!
//! The column is the widest label plus [`LeaderStyle::margin`].
//! Continuation lines repeat the leader of the entry they belong to, so
//! their dots sit directly under the entry's dots.

use super::render::OutlineLine;

/// Leader layout parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaderStyle {
    /// Columns added after the widest label.
    pub margin: usize,
    /// Dots used when the computed padding is not positive.
    pub min_dots: usize,
}

impl Default for LeaderStyle {
    fn default() -> Self {
        Self {
            margin: 3,
            min_dots: 3,
        }
    }
}

/// Lays out [`OutlineLine`]s as text.
#[derive(Debug, Clone, Default)]
pub struct LeaderFormatter {
    style: LeaderStyle,
}

impl LeaderFormatter {
    pub fn new(style: LeaderStyle) -> Self {
        Self { style }
    }

    /// Column at which every leader ends.
    pub fn target_column(&self, labels: &[String]) -> usize {
        labels
            .iter()
            .map(|label| label.chars().count())
            .max()
            .unwrap_or(0)
            + self.style.margin
    }

    /// Render the lines, each terminated by a newline.
    pub fn format(&self, lines: &[OutlineLine]) -> String {
        let labels: Vec<String> = lines.iter().map(OutlineLine::label).collect();
        let target = self.target_column(&labels);

        let mut out = String::new();
        let mut indent = String::new();
        for (line, label) in lines.iter().zip(labels) {
            if line.is_numbered() {
                indent.clear();
            }
            match line {
                OutlineLine::Entry {
                    leader: Some(to), ..
                } => {
                    let width = label.chars().count();
                    let leader = self.leader(target.saturating_sub(width));
                    out.push_str(&label);
                    out.push_str(&leader);
                    out.push_str(to.as_str());

                    indent = " ".repeat(width);
                    indent.push_str(&leader);
                }
                OutlineLine::Continuation { target: to } => {
                    out.push_str(&indent);
                    out.push_str(to.as_str());
                }
                _ => out.push_str(&label),
            }
            out.push('\n');
        }
        out
    }

    fn leader(&self, padding: usize) -> String {
        let dots = if padding > 0 {
            padding
        } else {
            self.style.min_dots
        };
        format!(" {} ", ".".repeat(dots))
    }
}
