/// Errors reported by the codecs.
///
/// Malformed escapes and undecodable byte sequences are not errors: both
/// codecs recover from them locally and always produce text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Input is not text (raw bytes that are not valid UTF-8)
    InvalidInputType,
}

impl core::fmt::Display for CodecError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidInputType => "Argument should be text",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CodecError {}

/// Result type for codec operations
pub type Result<T> = core::result::Result<T, CodecError>;
