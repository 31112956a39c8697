//! Streaming SHA-256 over asset files.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::assets::DIGEST_LEN;
use crate::error::DigestError;

/// Raw SHA-256 output for one asset.
pub type AssetDigest = [u8; DIGEST_LEN];

const READ_CHUNK: usize = 4096;

/// Hash every byte produced by `reader`.
pub fn hash_reader<R: Read>(mut reader: R) -> io::Result<AssetDigest> {
  let mut hasher = Sha256::new();
  let mut buf = [0u8; READ_CHUNK];
  loop {
    let n = match reader.read(&mut buf) {
      Ok(0) => break,
      Ok(n) => n,
      Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
      Err(err) => return Err(err),
    };
    hasher.update(&buf[..n]);
  }
  Ok(hasher.finalize().into())
}

/// Compute the digest of the file at `path`.
///
/// Failing to open the file is reported as [`DigestError::AssetNotFound`]; a failure after the
/// file was opened is [`DigestError::IoRead`]. The handle is dropped before returning.
pub fn compute_file_digest(path: &Path) -> Result<AssetDigest, DigestError> {
  let file = File::open(path).map_err(|source| DigestError::AssetNotFound {
    path: path.to_path_buf(),
    source,
  })?;

  let digest = hash_reader(file).map_err(|source| DigestError::IoRead {
    path: path.to_path_buf(),
    source,
  })?;

  log::debug!("sha256 {} = {}", path.display(), to_hex(&digest));
  Ok(digest)
}

/// Lowercase hex rendering of a digest or digest slice.
pub fn to_hex(bytes: &[u8]) -> String {
  hex::encode(bytes)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::tempdir;

  #[test]
  fn matches_known_sha256() -> Result<(), DigestError> {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.cfg");
    fs::write(&path, b"abc").unwrap();

    let digest = compute_file_digest(&path)?;
    assert_eq!(
      to_hex(&digest),
      "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    Ok(())
  }

  #[test]
  fn streams_files_larger_than_one_chunk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("boot1.png");
    let content: Vec<u8> = (0..READ_CHUNK * 3 + 17).map(|i| (i % 251) as u8).collect();
    fs::write(&path, &content).unwrap();

    let expected: AssetDigest = Sha256::digest(&content).into();
    assert_eq!(compute_file_digest(&path).unwrap(), expected);
  }

  #[test]
  fn empty_file_hashes_to_empty_digest() {
    let expected: AssetDigest = Sha256::digest(b"").into();
    assert_eq!(hash_reader(io::empty()).unwrap(), expected);
  }

  #[test]
  fn missing_file_is_reported_as_not_found() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("boot2.png");

    let err = compute_file_digest(&path).unwrap_err();
    assert!(matches!(err, DigestError::AssetNotFound { .. }));
    assert!(err.is_not_found());
    assert_eq!(err.path(), path.as_path());
  }

  #[test]
  fn read_failure_is_reported_as_io_error() {
    struct Broken;
    impl Read for Broken {
      fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("device error"))
      }
    }

    let err = hash_reader(Broken).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::Other);
  }
}
