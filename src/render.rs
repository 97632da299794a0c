//! Text rendering of assembled words. Pure and deterministic.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 4 uppercase hex digits per word.
    #[default]
    Hex,
    /// 16 zero-padded binary digits per word.
    Bin,
    /// Plain decimal.
    Dec,
}

pub fn render_word(word: u16, format: OutputFormat) -> String {
    match format {
        OutputFormat::Hex => format!("{word:04X}"),
        OutputFormat::Bin => format!("{word:016b}"),
        OutputFormat::Dec => format!("{word}"),
    }
}

/// One fixed-width token per word, in program-counter order.
pub fn render(words: &[u16], format: OutputFormat) -> Vec<String> {
    words.iter().map(|w| render_word(*w, format)).collect()
}
