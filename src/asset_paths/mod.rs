//! Resolution of logical asset names to the file that should be hashed.
//!
//! Development copies under the source root shadow installed copies under the install root.
//! Resolution never fails: when no candidate exists the install-root path is returned and the
//! digest step reports the missing file.

mod candidates;

pub use candidates::{AssetOrigin, ResolvedAsset, candidate_paths, resolve_asset_path};
