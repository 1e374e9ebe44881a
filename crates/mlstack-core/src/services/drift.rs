//! Drift between a resolved stack and the installed environment.

use std::cmp::Ordering;

use semver::Version;
use serde::Serialize;

use crate::domain::{COMPARISON_OPERATORS, Stack, has_comparison_operator, requirement_token, version_key};
use crate::ports::SystemProbePort;

/// Why a package needs reinstalling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DriftReason {
    /// Not installed at all.
    Missing,
    /// Installed version differs from an exact pin.
    VersionMismatch { installed: String },
    /// Installed version falls outside a constraint.
    Unsatisfied { installed: String },
}

/// One drifted stack entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriftEntry {
    pub package: String,
    pub spec: String,
    pub reason: DriftReason,
}

impl DriftEntry {
    /// Token passed to the installer to repair this entry.
    pub fn token(&self) -> String {
        requirement_token(&self.package, &self.spec)
    }
}

/// Entries of `stack` whose installed state does not match, in stack order.
pub fn find_drift(stack: &Stack, probe: &dyn SystemProbePort) -> Vec<DriftEntry> {
    stack
        .iter()
        .filter_map(|(package, spec)| {
            let reason = match probe.installed_version(package) {
                None => DriftReason::Missing,
                Some(installed) if satisfies(&installed, spec) => return None,
                Some(installed) if has_comparison_operator(spec) => {
                    DriftReason::Unsatisfied { installed }
                }
                Some(installed) => DriftReason::VersionMismatch { installed },
            };
            Some(DriftEntry {
                package: package.to_string(),
                spec: spec.to_string(),
                reason,
            })
        })
        .collect()
}

/// Whether `installed` meets `spec`.
///
/// Bare specifiers must match exactly. Constraint specifiers may carry the
/// package name and several comma-separated clauses; every clause must hold.
/// Versions are compared on their leading numeric components.
pub fn satisfies(installed: &str, spec: &str) -> bool {
    let spec = spec.trim();
    if !has_comparison_operator(spec) {
        return installed.trim() == spec;
    }

    let constraints = spec
        .find(COMPARISON_OPERATORS)
        .map_or(spec, |start| &spec[start..]);
    constraints
        .split(',')
        .map(str::trim)
        .filter(|clause| !clause.is_empty())
        .all(|clause| clause_holds(installed.trim(), clause))
}

fn clause_holds(installed: &str, clause: &str) -> bool {
    const OPERATORS: [&str; 8] = ["===", "~=", "==", "!=", ">=", "<=", ">", "<"];

    let Some(op) = OPERATORS.iter().find(|op| clause.starts_with(**op)) else {
        return false;
    };
    let bound = clause[op.len()..].trim();

    if *op == "===" {
        return installed == bound;
    }
    if let Some(prefix) = bound.strip_suffix(".*") {
        let matches = installed == prefix || installed.starts_with(&format!("{prefix}."));
        return match *op {
            "==" => matches,
            "!=" => !matches,
            _ => false,
        };
    }

    let (Some(have), Some(want)) = (version_key(installed), version_key(bound)) else {
        return false;
    };
    let ordering = have.cmp(&want);
    match *op {
        "==" => ordering == Ordering::Equal,
        "!=" => ordering != Ordering::Equal,
        ">=" => ordering != Ordering::Less,
        "<=" => ordering != Ordering::Greater,
        ">" => ordering == Ordering::Greater,
        "<" => ordering == Ordering::Less,
        "~=" => ordering != Ordering::Less && have < compatible_upper_bound(bound, &want),
        _ => false,
    }
}

/// Exclusive upper bound of a `~=` clause: `1.26` allows `<2`, `1.26.3`
/// allows `<1.27`.
fn compatible_upper_bound(bound: &str, want: &Version) -> Version {
    let components = bound.split('.').count();
    if components <= 2 {
        Version::new(want.major + 1, 0, 0)
    } else {
        Version::new(want.major, want.minor + 1, 0)
    }
}
