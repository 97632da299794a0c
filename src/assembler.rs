//! Two-pass driver. Pass 1 must complete before pass 2 starts so forward
//! branch references resolve; each run builds its own label table and word
//! sequence.

use tracing::debug;

use crate::encoder;
use crate::error::AsmError;
use crate::labels::{collect_labels, LabelTable};

/// Assembles a whole source unit into 16-bit words, all-or-nothing.
pub fn assemble(source: &str) -> Result<Vec<u16>, AsmError> {
    assemble_with_labels(source).map(|(words, _)| words)
}

/// Like [`assemble`], also returning the resolved label table.
pub fn assemble_with_labels(source: &str) -> Result<(Vec<u16>, LabelTable), AsmError> {
    let lines: Vec<&str> = source.lines().collect();
    let labels = collect_labels(lines.iter().copied())?;

    let mut words = Vec::new();
    let mut addr: u16 = 0;
    for (idx, raw) in lines.iter().enumerate() {
        match encoder::encode_line(raw, addr, &labels) {
            Ok(Some(word)) => {
                words.push(word);
                addr = addr.wrapping_add(1);
            }
            Ok(None) => {}
            Err(kind) => return Err(AsmError::new(idx + 1, raw.trim(), kind)),
        }
    }
    debug!(words = words.len(), labels = labels.len(), "pass 2 complete");
    Ok((words, labels))
}
