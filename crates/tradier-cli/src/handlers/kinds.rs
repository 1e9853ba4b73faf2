use crate::presentation::{ConsoleRenderer, Report};
use crate::types::ResourceKind;
use anyhow::Result;
use std::io;

pub fn kinds_report() -> Report {
    let rows = ResourceKind::ALL
        .iter()
        .map(|kind| vec![kind.to_string(), kind.description().to_string()])
        .collect();
    Report::new().with_table(&["KIND", "DESCRIPTION"], rows)
}

pub fn handle(renderer: &ConsoleRenderer) -> Result<()> {
    let stdout = io::stdout();
    renderer.render_report(&kinds_report(), &mut stdout.lock())?;
    Ok(())
}
