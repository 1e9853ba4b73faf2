use std::io::{self, Write};

use tracing::debug;
use tradier_core::json;

use crate::presentation::presenters;
use crate::presentation::view_models::{Block, Report};
use crate::presentation::views::ReportView;
use crate::types::{OutputFormat, ResourceKind};

/// Writes a response to an output sink as tables or as pretty JSON.
pub struct ConsoleRenderer {
    format: OutputFormat,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }

    pub fn render<W: Write>(&self, kind: ResourceKind, bytes: &[u8], out: &mut W) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => self.render_json(bytes, out),
            OutputFormat::Table => {
                let report = presenters::present(kind, bytes);
                debug!(%kind, blocks = report.blocks.len(), "presented response");
                self.render_report(&report, out)
            }
        }
    }

    /// Raw mode: re-serialise the document, or echo bytes that are not JSON.
    pub fn render_json<W: Write>(&self, bytes: &[u8], out: &mut W) -> io::Result<()> {
        match json::parse_any(bytes) {
            Some(value) => writeln!(out, "{}", json::to_pretty(&value)),
            None => write_verbatim(bytes, out),
        }
    }

    /// A raw-only report is written byte for byte; text views would
    /// replace invalid UTF-8.
    pub fn render_report<W: Write>(&self, report: &Report, out: &mut W) -> io::Result<()> {
        match report.blocks.as_slice() {
            [Block::Raw { bytes }] => write_verbatim(bytes, out)?,
            _ => write!(out, "{}", ReportView::new(report, self.color))?,
        }
        out.flush()
    }
}

fn write_verbatim<W: Write>(bytes: &[u8], out: &mut W) -> io::Result<()> {
    out.write_all(bytes)?;
    out.write_all(b"\n")
}
