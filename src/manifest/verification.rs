//! Compare current asset digests against a stored manifest.

use std::fs;
use std::io::ErrorKind;

use crate::asset_paths::resolve_asset_path;
use crate::assets::{BOOT_ASSETS, DIGEST_LEN, MANIFEST_LEN};
use crate::digest::compute_file_digest;
use crate::error::VerifyError;
use crate::models::{AssetStatus, AssetVerification, VerificationReport};
use crate::project::ChecksumLayout;

/// Slice of `manifest` holding the digest for asset `index`, if the manifest is long enough.
pub fn stored_digest(manifest: &[u8], index: usize) -> Option<&[u8]> {
  let start = index.checked_mul(DIGEST_LEN)?;
  manifest.get(start..start.checked_add(DIGEST_LEN)?)
}

/// Check every tracked asset against the manifest.
///
/// Asset failures are recorded and the run continues; only a manifest that cannot be loaded
/// is an error. Use [`VerificationReport::is_valid`] for the overall verdict.
pub fn verify_manifest(layout: &ChecksumLayout) -> Result<VerificationReport, VerifyError> {
  let manifest_path = layout.manifest_path();
  let manifest = match fs::read(&manifest_path) {
    Ok(bytes) => bytes,
    Err(err) if err.kind() == ErrorKind::NotFound => {
      return Err(VerifyError::ManifestMissing {
        path: manifest_path,
      });
    }
    Err(source) => {
      return Err(VerifyError::ManifestRead {
        path: manifest_path,
        source,
      });
    }
  };

  if manifest.len() != MANIFEST_LEN {
    log::warn!(
      "{} is {} bytes, expected {MANIFEST_LEN}",
      manifest_path.display(),
      manifest.len()
    );
  }

  let mut assets = Vec::with_capacity(BOOT_ASSETS.len());
  for (index, descriptor) in BOOT_ASSETS.iter().enumerate() {
    let resolved = resolve_asset_path(layout, descriptor.file_name);

    let status = match compute_file_digest(&resolved.path) {
      Err(err) if err.is_not_found() => AssetStatus::Missing {
        reason: err.to_string(),
      },
      Err(err) => AssetStatus::Unreadable {
        reason: err.to_string(),
      },
      Ok(current) => match stored_digest(&manifest, index) {
        Some(stored) if stored == current.as_slice() => AssetStatus::Valid,
        _ => AssetStatus::Mismatch,
      },
    };

    if !status.is_valid() {
      log::warn!("{} failed verification: {status:?}", descriptor.file_name);
    }

    assets.push(AssetVerification {
      file_name: descriptor.file_name,
      description: descriptor.description,
      path: resolved.path,
      origin: resolved.origin,
      status,
    });
  }

  Ok(VerificationReport {
    manifest_path,
    manifest_len: manifest.len(),
    assets,
  })
}
