use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Structural errors: things wrong with a locale table or a conversion
/// request, as opposed to anomalies in the text being parsed. These abort
/// the call instead of being folded into a `ParsedResult`.
pub enum ConfigError {
    /// A connector also appears in the segmentors set (or vice versa).
    ConnectorSegmentorOverlap,
    /// A decimal delimiter also appears in the thousand delimiters set.
    DecimalThousandOverlap,
    /// Attempted to convert a total into a scale that is disabled
    /// (`seconds_per_unit == 0`).
    DisabledScale,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ConnectorSegmentorOverlap => {
                write!(f, "connectors and segmentors may not overlap")
            }
            ConfigError::DecimalThousandOverlap => {
                write!(f, "decimal separators and thousand separators may not overlap")
            }
            ConfigError::DisabledScale => write!(f, "cannot convert into a disabled scale"),
        }
    }
}

impl std::error::Error for ConfigError {}
