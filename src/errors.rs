//! Error types with rich diagnostics using miette
//!
//! Chart building is pure and deterministic, so none of these are
//! retryable: retrying with unchanged input cannot succeed. No partial
//! layout is returned on failure.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::ChartKind;

/// Errors that abort a chart build.
#[derive(Error, Diagnostic, Debug)]
pub enum ChartError {
    #[error("second subject required for {kind} charts")]
    #[diagnostic(
        code(volvelle::layout::missing_second_subject),
        help("transit and synastry wheels overlay two point sets; provide both subjects")
    )]
    MissingSecondSubject { kind: ChartKind },

    #[error("unknown degree format selector: {selector}")]
    #[diagnostic(
        code(volvelle::format::invalid_selector),
        help("valid selectors are 1 (degrees), 2 (degrees + minutes), 3 (degrees + minutes + seconds)")
    )]
    InvalidFormatSelector { selector: u8 },

    #[error("{context}: value {value} falls outside every expected bracket")]
    #[diagnostic(
        code(volvelle::layout::unreachable_bracket),
        help("the value should be a normalized angle in [0, 360); check the upstream ephemeris data")
    )]
    UnreachableBracket { context: &'static str, value: f64 },
}
