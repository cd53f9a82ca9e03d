//! Destination collision resolution.

use std::path::{Path, PathBuf};

use super::walker::{join_file_name, split_file_name};

/// Return `dest` if it is free, otherwise the first free `stem_<n>.ext`.
///
/// Probing starts at `_1` and checks the filesystem at call time, so
/// files renamed earlier in the same run are taken into account.
pub fn unique_path(dest: &Path) -> PathBuf {
    unique_path_with(dest, |candidate| candidate.exists())
}

/// Like [`unique_path`], with `is_taken` deciding whether a candidate is in use.
///
/// The name is split the same way the scan splits it, so a trailing dot
/// stays with the stem: `trailing.` probes `trailing._1`.
pub fn unique_path_with(dest: &Path, is_taken: impl Fn(&Path) -> bool) -> PathBuf {
    if !is_taken(dest) {
        return dest.to_path_buf();
    }

    let (stem, extension) = split_file_name(dest);

    (1u64..)
        .map(|n| {
            let mut numbered = stem.clone();
            numbered.push(format!("_{n}"));
            dest.with_file_name(join_file_name(&numbered, &extension))
        })
        .find(|candidate| !is_taken(candidate))
        .unwrap_or_else(|| dest.to_path_buf())
}
