//! Identity token encoding, decoding, and claims.

pub mod claims;
pub mod codec;
pub mod error;

pub use claims::Claims;
pub use codec::TokenCodec;
pub use error::{EncodingError, VerificationError};
