//! Search limits and input validation

/// Number of paths returned when the caller does not choose (100)
pub const DEFAULT_MAX_PATHS: usize = 100;

/// Intermediate nodes used by the two-word convenience form (3)
pub const DEFAULT_INTERMEDIATE_NODES: usize = 3;

/// Upper bound for a requested path cap (100000)
pub const MAX_PATHS_CEILING: usize = 100_000;

/// Validation error type
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    ZeroMaxPaths,
    MaxPathsTooLarge { count: usize, max: usize },
    ZeroVisitBudget,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroMaxPaths => write!(f, "Maximum path count must be at least 1"),
            Self::MaxPathsTooLarge { count, max } => {
                write!(f, "Maximum path count too large: {} (max {})", count, max)
            }
            Self::ZeroVisitBudget => write!(f, "Visit budget must be at least 1"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate the maximum number of paths to collect
pub fn validate_max_paths(count: usize) -> Result<(), ValidationError> {
    if count == 0 {
        return Err(ValidationError::ZeroMaxPaths);
    }
    if count > MAX_PATHS_CEILING {
        return Err(ValidationError::MaxPathsTooLarge {
            count,
            max: MAX_PATHS_CEILING,
        });
    }
    Ok(())
}

/// Validate an optional node-visit budget
pub fn validate_visit_budget(budget: Option<usize>) -> Result<(), ValidationError> {
    match budget {
        Some(0) => Err(ValidationError::ZeroVisitBudget),
        _ => Ok(()),
    }
}
