use std::fmt;

use owo_colors::OwoColorize;

use super::table::{render_key_value, render_table};
use crate::presentation::view_models::{Block, Report};

// --------------------------------------------------------
// Block View
// --------------------------------------------------------

pub struct BlockView<'a> {
    block: &'a Block,
    color: bool,
}

impl<'a> BlockView<'a> {
    pub fn new(block: &'a Block, color: bool) -> Self {
        Self { block, color }
    }

    fn write_dimmed(&self, f: &mut fmt::Formatter, text: &str) -> fmt::Result {
        if self.color {
            writeln!(f, "{}", text.dimmed())
        } else {
            writeln!(f, "{}", text)
        }
    }
}

impl<'a> fmt::Display for BlockView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.block {
            Block::Raw { bytes } => writeln!(f, "{}", String::from_utf8_lossy(bytes)),
            Block::Notice { text } | Block::Footnote { text } => self.write_dimmed(f, text),
            Block::Heading { text } => writeln!(f, "{}", text),
            Block::KeyValue { pairs } => {
                if pairs.is_empty() {
                    return Ok(());
                }
                writeln!(f, "{}", render_key_value(pairs))
            }
            Block::Table { headers, rows } => writeln!(f, "{}", render_table(headers, rows)),
            Block::Blank => writeln!(f),
        }
    }
}

// --------------------------------------------------------
// Report View
// --------------------------------------------------------

pub struct ReportView<'a> {
    data: &'a Report,
    color: bool,
}

impl<'a> ReportView<'a> {
    pub fn new(data: &'a Report, color: bool) -> Self {
        Self { data, color }
    }
}

impl<'a> fmt::Display for ReportView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for block in &self.data.blocks {
            write!(f, "{}", BlockView::new(block, self.color))?;
        }
        Ok(())
    }
}
