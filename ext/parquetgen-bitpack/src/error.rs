use thiserror::Error;

/// Errors from building or using a [`crate::BitPacker`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BitPackError {
    /// The requested width has no precomputed table
    #[error("unsupported bit width {width}: packer supports 1..={max_width}")]
    UnsupportedWidth { width: u8, max_width: u8 },

    /// Packed input does not have the byte count its width implies
    #[error("expected {expected} packed bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A packer cannot be built for this maximum width
    #[error("max width {0} is outside 1..=64")]
    InvalidMaxWidth(u8),
}

/// Result type alias for bit packing operations
pub type Result<T> = std::result::Result<T, BitPackError>;
