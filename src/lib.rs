#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod decoder;
mod encoder;
mod error;
mod helpers;
mod unicode;

pub mod presets;

// Public API
pub use character_sets::{
    ALLOWED, GEN_DELIMS, QS_SUB_DELIMS, RESERVED, SUB_DELIMS, SUB_DELIMS_WITHOUT_QS, UNRESERVED,
};
pub use decoder::{DecoderOptions, PercentDecoder};
pub use encoder::{EncoderOptions, PercentEncoder};
pub use error::CodecError;

pub type Result<T> = core::result::Result<T, CodecError>;
