#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod assets;
pub mod config;
pub mod digest;
pub mod error;
pub mod manifest;
pub mod models;
pub mod project;
pub mod updater;

pub use config::ChecksumConfig;
pub use error::{DigestError, GenerateError, VerifyError};
pub use models::{AssetStatus, GenerationReport, VerificationReport};
pub use project::ChecksumLayout;
pub use updater::ChecksumUpdater;
