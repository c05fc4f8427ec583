use thiserror::Error;

/// Fatal configuration-shape errors raised before any drawing happens.
///
/// A mis-joined map is worse than no map, so directory and solution problems
/// halt the pipeline outright. Per-region geometry anomalies are *not* part
/// of this taxonomy: a degenerate boundary only costs that region its text
/// annotation (logged as a warning) and never aborts a render.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    /// Region directory lists the same code twice.
    #[error("region directory: duplicate region code {0:?}")]
    DuplicateRegionCode(String),

    /// Two codes map to the same canonical name, so the name → code join
    /// would be ambiguous.
    #[error("region directory: codes {first:?} and {second:?} both map to canonical name {name:?}")]
    DuplicateCanonicalName {
        name: String,
        first: String,
        second: String,
    },

    /// Label registry lists the same symbolic label twice.
    #[error("label registry: duplicate symbolic label {0:?}")]
    DuplicateLabel(String),

    /// Two labels (or a label and the reserved unassigned entry) share one
    /// colour, which would make the legend unreadable.
    #[error("label registry: colour {0} is assigned more than once")]
    DuplicateColor(String),

    /// Solution references a code the directory does not know. Indicates a
    /// solver/directory version mismatch; silently ignoring it would risk a
    /// mis-coloured map.
    #[error("solution references region code {0:?} absent from the region directory")]
    UnknownRegionCode(String),

    /// Solution assigns a label outside the configured alphabet.
    #[error("solution assigns label {label:?} to {code:?}, which is not in the label registry")]
    UnknownLabel { code: String, label: String },

    /// Malformed colour literal in configuration.
    #[error("invalid colour literal {0:?}, expected #RRGGBB")]
    InvalidColor(String),
}
