//! High-level entry point tying configuration to generation and verification.

use crate::error::{GenerateError, VerifyError};
use crate::manifest::{generate_manifest, verify_manifest};
use crate::models::{GenerationReport, VerificationReport};
use crate::project::ChecksumLayout;

/// Generates and verifies the boot asset manifest for one layout.
#[derive(Debug, Clone)]
pub struct ChecksumUpdater {
  layout: ChecksumLayout,
}

impl ChecksumUpdater {
  /// Create an updater for the provided layout.
  pub fn new(layout: ChecksumLayout) -> Self {
    Self { layout }
  }

  /// Layout used by this updater.
  pub fn layout(&self) -> &ChecksumLayout {
    &self.layout
  }

  /// Regenerate the manifest from the current assets.
  pub fn generate(&self) -> Result<GenerationReport, GenerateError> {
    generate_manifest(&self.layout)
  }

  /// Verify the current assets against the stored manifest.
  pub fn verify(&self) -> Result<VerificationReport, VerifyError> {
    verify_manifest(&self.layout)
  }
}
