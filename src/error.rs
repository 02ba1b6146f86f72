use thiserror::Error;

/// Error types for `Vector` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum VectorError {
    /// A requested length or capacity exceeds what the allocator can represent
    #[error("Length out of range: requested {requested} elements, but the maximum is {max}")]
    LengthOutOfRange {
        /// Number of elements requested
        requested: usize,
        /// Maximum number of elements the allocator can represent
        max: usize,
    },
    /// Index is beyond the current vector length
    #[error("Index out of range: index {index} is beyond vector length {length}")]
    IndexOutOfRange {
        /// Index that was accessed
        index: usize,
        /// Current length of the vector
        length: usize,
    },
}
