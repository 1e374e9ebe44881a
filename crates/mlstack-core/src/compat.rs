//! Static compatibility tables.
//!
//! Tables are ordered; the first row doubles as the fallback for every
//! lookup, see [`first_match_or_first`].

use tracing::debug;

use crate::domain::Framework;

/// Detection library resolved by the detector-family resolver.
pub const DETECTOR_PACKAGE: &str = "ultralytics";

/// Framework package paired with the detection library.
pub const DETECTOR_FRAMEWORK_PACKAGE: &str = "torch";

/// Used when the feed yields no stable release.
pub const FALLBACK_DETECTOR_VERSION: &str = "8.2.48";

/// Family key used when the latest release has an unknown major.
pub const DEFAULT_FAMILY_KEY: &str = "8";

/// Companion framework builds per detector family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilyFrameworkRow {
    pub family_key: &'static str,
    pub cpu: &'static str,
    pub gpu: &'static str,
}

impl FamilyFrameworkRow {
    pub const fn build(&self, gpu: bool) -> &'static str {
        if gpu { self.gpu } else { self.cpu }
    }
}

pub static FAMILY_FRAMEWORK_TABLE: [FamilyFrameworkRow; 3] = [
    FamilyFrameworkRow {
        family_key: "8",
        cpu: "2.3.1",
        gpu: "2.3.1+cu121",
    },
    FamilyFrameworkRow {
        family_key: "10",
        cpu: "2.4.1",
        gpu: "2.4.1+cu124",
    },
    FamilyFrameworkRow {
        family_key: "11",
        cpu: "2.5.1",
        gpu: "2.5.1+cu124",
    },
];

/// Minimum CUDA runtime a framework build was compiled against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeRequirement {
    pub framework_version: &'static str,
    pub cuda: &'static str,
}

pub static TENSORFLOW_CUDA_TABLE: [RuntimeRequirement; 3] = [
    RuntimeRequirement {
        framework_version: "2.15.0",
        cuda: "12.2",
    },
    RuntimeRequirement {
        framework_version: "2.17.0",
        cuda: "12.3",
    },
    RuntimeRequirement {
        framework_version: "2.18.0",
        cuda: "12.4",
    },
];

pub static TORCH_CUDA_TABLE: [RuntimeRequirement; 3] = [
    RuntimeRequirement {
        framework_version: "2.1.0+cu121",
        cuda: "12.1",
    },
    RuntimeRequirement {
        framework_version: "2.2.0+cu122",
        cuda: "12.2",
    },
    RuntimeRequirement {
        framework_version: "2.3.0+cu124",
        cuda: "12.4",
    },
];

/// Runtime table for a framework.
pub const fn runtime_table(framework: Framework) -> &'static [RuntimeRequirement; 3] {
    match framework {
        Framework::TensorFlow => &TENSORFLOW_CUDA_TABLE,
        Framework::PyTorch => &TORCH_CUDA_TABLE,
    }
}

/// Row matching `predicate` as `Ok`, or the first row as `Err` when none
/// matches.
pub fn match_or_first<T, const N: usize>(
    table: &[T; N],
    predicate: impl FnMut(&&T) -> bool,
) -> Result<&T, &T> {
    const { assert!(N > 0, "compatibility tables must not be empty") };
    table.iter().find(predicate).ok_or(&table[0])
}

/// First row matching `predicate`, or the first row when none matches.
pub fn first_match_or_first<T, const N: usize>(
    table: &[T; N],
    predicate: impl FnMut(&&T) -> bool,
) -> &T {
    match_or_first(table, predicate).unwrap_or_else(|first| first)
}

/// Strip a `+local` build suffix (`2.1.0+cu121` -> `2.1.0`).
pub fn strip_build_suffix(version: &str) -> &str {
    version.split_once('+').map_or(version, |(base, _)| base)
}

/// Companion framework build for a detector family key.
///
/// Unknown keys fall back to the first row (family `8`).
pub fn companion_framework_version(family_key: &str, gpu: bool) -> &'static str {
    first_match_or_first(&FAMILY_FRAMEWORK_TABLE, |row| row.family_key == family_key).build(gpu)
}

/// Pick a framework build for the detected CUDA version.
///
/// Without CUDA the first row's version is returned with its build suffix
/// stripped. With CUDA, the first row whose requirement's first three
/// characters prefix the detected version wins; otherwise the first row is
/// returned unmodified.
pub fn best_framework_build<const N: usize>(
    cuda_version: Option<&str>,
    table: &[RuntimeRequirement; N],
) -> String {
    let Some(cuda) = cuda_version else {
        let first = first_match_or_first(table, |_| true);
        return strip_build_suffix(first.framework_version).to_string();
    };

    let found = match_or_first(table, |row| {
        let prefix: String = row.cuda.chars().take(3).collect();
        cuda.starts_with(&prefix)
    });
    match found {
        Ok(row) => row.framework_version.to_string(),
        Err(first) => {
            debug!(
                cuda,
                fallback = first.framework_version,
                "No framework build for the detected CUDA runtime, using the first row"
            );
            first.framework_version.to_string()
        }
    }
}
