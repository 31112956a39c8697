//! Build and persist a fresh checksum manifest.

use std::fs;

use crate::asset_paths::resolve_asset_path;
use crate::assets::{BOOT_ASSETS, MANIFEST_LEN};
use crate::digest::{AssetDigest, compute_file_digest, to_hex};
use crate::error::GenerateError;
use crate::models::{GeneratedAsset, GenerationReport};
use crate::project::ChecksumLayout;

/// Concatenate digests in manifest order.
pub fn encode_manifest(digests: &[AssetDigest]) -> Vec<u8> {
  digests.concat()
}

/// Hash every tracked asset and write the manifest.
///
/// Any asset failure aborts the run before the manifest path is touched, so an existing
/// manifest survives a failed regeneration.
pub fn generate_manifest(layout: &ChecksumLayout) -> Result<GenerationReport, GenerateError> {
  let mut digests = Vec::with_capacity(BOOT_ASSETS.len());
  let mut assets = Vec::with_capacity(BOOT_ASSETS.len());

  for descriptor in &BOOT_ASSETS {
    let resolved = resolve_asset_path(layout, descriptor.file_name);
    let digest = compute_file_digest(&resolved.path).map_err(|source| GenerateError::Asset {
      file_name: descriptor.file_name,
      description: descriptor.description,
      source,
    })?;

    digests.push(digest);
    assets.push(GeneratedAsset {
      file_name: descriptor.file_name,
      description: descriptor.description,
      path: resolved.path,
      origin: resolved.origin,
      sha256: to_hex(&digest),
    });
  }

  let manifest = encode_manifest(&digests);
  debug_assert_eq!(manifest.len(), MANIFEST_LEN);

  let manifest_path = layout.manifest_path();
  if let Some(parent) = manifest_path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
    fs::create_dir_all(parent).map_err(|source| GenerateError::ManifestDir {
      path: parent.to_path_buf(),
      source,
    })?;
  }

  fs::write(&manifest_path, &manifest).map_err(|source| GenerateError::ManifestWrite {
    path: manifest_path.clone(),
    source,
  })?;
  log::info!("wrote {} bytes to {}", manifest.len(), manifest_path.display());

  Ok(GenerationReport {
    manifest_path,
    assets,
  })
}
