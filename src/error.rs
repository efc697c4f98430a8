/// Error types that can occur during model operations
///
/// # Variants
///
/// - `NotInitialized` - Indicates that the model has not been initialized, or has been shut down
/// - `InputValidationError` - indicates the input provided does not meet the expected format or validation rules
/// - `ProcessingError` - indicates that there is something wrong while processing (allocation, arithmetic overflow, or file I/O)
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    NotInitialized,
    InputValidationError(String),
    ProcessingError(String),
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::NotInitialized => {
                write!(
                    f,
                    "Model has not been initialized. Certain methods require the model to be initialized before use."
                )
            }
            ModelError::InputValidationError(msg) => write!(f, "Input validation error: {}", msg),
            ModelError::ProcessingError(msg) => write!(f, "Processing error: {}", msg),
        }
    }
}

/// Implements the standard error trait for ModelError
impl std::error::Error for ModelError {}
