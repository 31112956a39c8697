//! The fixed set of boot assets covered by the checksum manifest.

/// Size of a single SHA-256 digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// Default file name of the checksum manifest inside the install root.
pub const MANIFEST_FILE_NAME: &str = "checksums.dat";

/// Logical boot asset tracked by the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetDescriptor {
  /// File name looked up in the source and install roots.
  pub file_name: &'static str,
  /// Human readable description used in diagnostics.
  pub description: &'static str,
}

/// Assets in manifest order. The digest for `BOOT_ASSETS[i]` lives at
/// `i * DIGEST_LEN..(i + 1) * DIGEST_LEN`; reordering breaks every existing manifest.
pub const BOOT_ASSETS: [AssetDescriptor; 3] = [
  AssetDescriptor {
    file_name: "boot1.png",
    description: "Kernel boot logo",
  },
  AssetDescriptor {
    file_name: "boot2.png",
    description: "Setup mode logo",
  },
  AssetDescriptor {
    file_name: "config.cfg",
    description: "Configuration file",
  },
];

/// Exact byte length of a well-formed manifest.
pub const MANIFEST_LEN: usize = DIGEST_LEN * BOOT_ASSETS.len();
