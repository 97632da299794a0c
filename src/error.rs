use thiserror::Error;

/// What went wrong, without source-position context.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("Duplicate label '{name}'")]
    DuplicateLabel { name: String },
    #[error("Unknown instruction: {mnemonic}")]
    UnknownInstruction { mnemonic: String },
    #[error("Invalid operands for {mnemonic}: expected {expected}")]
    OperandCount {
        mnemonic: String,
        expected: &'static str,
    },
    #[error("Invalid register: {name}")]
    InvalidRegister { name: String },
    #[error("Invalid immediate value: {text}")]
    InvalidImmediate { text: String },
    #[error("Undefined label: {name}")]
    UndefinedLabel { name: String },
    #[error("Immediate value {value} out of range [-128, 255]")]
    ImmediateRange { value: i32 },
    #[error("Displacement {value} out of range [-128, 127]")]
    DisplacementRange { value: i32 },
    #[error("Shift amount {value} out of range [-15, 15]")]
    ShiftRange { value: i32 },
}

/// An assembly failure pinned to its source line. Fatal to the whole run;
/// the first one encountered aborts with no partial output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {kind} ({text})")]
pub struct AsmError {
    /// 1-based source line number.
    pub line: usize,
    /// The offending line, comment and surrounding whitespace included.
    pub text: String,
    pub kind: ErrorKind,
}

impl AsmError {
    pub(crate) fn new(line: usize, text: &str, kind: ErrorKind) -> Self {
        Self {
            line,
            text: text.to_string(),
            kind,
        }
    }
}
