//! Errors reported when a board shape is rejected.

/// Error returned when a board cannot be set up.
///
/// Off-board moves are not errors; they are reported as
/// [`Neighbor::OffBoard`](crate::Neighbor::OffBoard).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The board shape describes no usable board.
    #[display("invalid board configuration: {issue}")]
    InvalidConfiguration {
        /// What is wrong with the shape.
        issue: ConfigurationIssue,
    },
}

impl From<ConfigurationIssue> for BoardError {
    fn from(issue: ConfigurationIssue) -> Self {
        Self::InvalidConfiguration { issue }
    }
}

/// The reason a board shape was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ConfigurationIssue {
    /// `row_width` was zero.
    #[display("row width must be positive")]
    ZeroRowWidth,
    /// `rows` was zero.
    #[display("board must have at least one row")]
    ZeroRows,
    /// The cell count does not fit the signed offset range.
    #[display("{row_width}x{rows} board is too large to address")]
    TooLarge {
        /// Requested row width.
        row_width: usize,
        /// Requested number of rows.
        rows: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = BoardError::from(ConfigurationIssue::ZeroRowWidth);
        assert_eq!(
            err.to_string(),
            "invalid board configuration: row width must be positive"
        );
        let err = BoardError::from(ConfigurationIssue::TooLarge {
            row_width: 3,
            rows: usize::MAX,
        });
        assert!(err.to_string().ends_with("board is too large to address"));
    }
}
