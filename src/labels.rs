//! Pass 1: source-line classification and label collection.
//!
//! This pass never decodes instructions; a malformed instruction line only
//! fails later, in the encoder. Labels bind to the current word address and
//! do not advance it.

use std::collections::HashMap;

use tracing::debug;

use crate::catalog;
use crate::error::{AsmError, ErrorKind};

/// Drops a trailing `;` comment.
pub fn strip_comment(line: &str) -> &str {
    match line.find(';') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Returns the label name if the (comment-stripped) line is a standalone
/// label definition: ends with `:`, name non-empty, name not a register.
/// A register name before the colon makes the line an instruction line in
/// both passes, so the encoder rejects it instead of the two passes drifting
/// apart on addresses.
pub fn label_def(line: &str) -> Option<&str> {
    let name = line.trim().strip_suffix(':')?.trim();
    if name.is_empty() || catalog::register_index(name).is_some() {
        return None;
    }
    Some(name)
}

/// Label name -> word address, built by pass 1 and read-only afterwards.
/// Names are case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTable {
    map: HashMap<String, u16>,
}

impl LabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<u16> {
        self.map.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u16)> {
        self.map.iter().map(|(name, addr)| (name.as_str(), *addr))
    }

    fn bind(&mut self, name: &str, addr: u16) -> bool {
        if self.map.contains_key(name) {
            return false;
        }
        self.map.insert(name.to_string(), addr);
        true
    }
}

/// Scans the whole unit and binds every label to its word address. The
/// program counter starts at 0 and advances once per instruction line, not
/// per source line. Fails fast on a duplicate label.
pub fn collect_labels<'a, I>(lines: I) -> Result<LabelTable, AsmError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut table = LabelTable::new();
    let mut addr: u16 = 0;
    for (idx, raw) in lines.into_iter().enumerate() {
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }
        match label_def(line) {
            Some(name) => {
                if !table.bind(name, addr) {
                    return Err(AsmError::new(
                        idx + 1,
                        raw.trim(),
                        ErrorKind::DuplicateLabel {
                            name: name.to_string(),
                        },
                    ));
                }
            }
            None => addr = addr.wrapping_add(1),
        }
    }
    debug!(labels = table.len(), "pass 1 complete");
    Ok(table)
}
