//! Terminal presentation sink
//!
//! Writes each block as soon as it is rendered. Banners carry their kind as a
//! prefix so info, warning, and error lines stay distinguishable without color.

use crate::page::{Block, BlockKind, PresentationSink};
use std::io::Write;
use tracing::warn;

/// Streams blocks to a writer, one per line
pub struct TerminalSink<W> {
    out: W,
}

impl<W: Write + Send> TerminalSink<W> {
    /// Wrap a writer
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Unwrap the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Terminal form of one block
pub fn format_block(block: &Block) -> String {
    match block.kind {
        BlockKind::Info | BlockKind::Warning | BlockKind::Error => {
            format!("[{}] {}", block.kind.as_str(), block.line())
        }
        BlockKind::Title => format!("# {}", block.line()),
        BlockKind::Heading => format!("\n{}", block.line()),
        BlockKind::Caption | BlockKind::Text => block.line(),
    }
}

impl<W: Write + Send> PresentationSink for TerminalSink<W> {
    fn render(&mut self, block: Block) {
        if let Err(e) = writeln!(self.out, "{}", format_block(&block)).and_then(|()| self.out.flush()) {
            warn!("Failed to write to terminal: {}", e);
        }
    }
}
