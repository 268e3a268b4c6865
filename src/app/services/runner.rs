//! Run/Clear output text.
//!
//! Nothing is executed. "Run" only produces an acknowledgement for the
//! output panel, either a fixed string or the raw editor text.

use serde::{Deserialize, Serialize};

pub const RUN_ACKNOWLEDGEMENT: &str = "Code Execution Successful!";
pub const CLEARED_OUTPUT: &str = "Output cleared!";

/// What the output panel shows after Run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunOutput {
    /// Always [`RUN_ACKNOWLEDGEMENT`].
    #[default]
    Static,
    /// The editor buffer as typed.
    Echo,
}

/// Output text for a Run click. Never empty: blank buffers in echo mode fall
/// back to the acknowledgement.
pub fn run_output(mode: RunOutput, buffer_text: &str) -> String {
    match mode {
        RunOutput::Echo if !buffer_text.trim().is_empty() => buffer_text.to_string(),
        _ => RUN_ACKNOWLEDGEMENT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_ignores_buffer() {
        assert_eq!(run_output(RunOutput::Static, "print(1)"), RUN_ACKNOWLEDGEMENT);
        assert_eq!(run_output(RunOutput::Static, ""), RUN_ACKNOWLEDGEMENT);
    }

    #[test]
    fn test_echo_returns_raw_text() {
        let code = "fn main() {\n    println!(\"hi\");\n}\n";
        assert_eq!(run_output(RunOutput::Echo, code), code);
    }

    #[test]
    fn test_echo_blank_falls_back() {
        assert_eq!(run_output(RunOutput::Echo, ""), RUN_ACKNOWLEDGEMENT);
        assert_eq!(run_output(RunOutput::Echo, "  \n\t"), RUN_ACKNOWLEDGEMENT);
    }
}
