//! Checksum manifest generation and verification.

mod generation;
mod verification;

pub use generation::{encode_manifest, generate_manifest};
pub use verification::{stored_digest, verify_manifest};
