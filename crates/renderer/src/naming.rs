//! Candidate selection and output-name derivation.

use std::ffi::{OsStr, OsString};

use serde::{Deserialize, Serialize};

/// How the input suffix is swapped for the output suffix.
///
/// Only matters for names where the suffix text also appears earlier, e.g.
/// `a.dot.dot` or `a.dotfile.dot`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ReplacePolicy {
    /// Replace only the trailing suffix: `a.dot.dot` → `a.dot.svg`.
    #[default]
    Trailing,
    /// Replace the first occurrence: `a.dot.dot` → `a.svg.dot`.
    First,
    /// Replace every occurrence: `a.dot.dot` → `a.svg.svg`.
    All,
}

/// `true` if `name` ends with the literal `suffix` (case-sensitive).
pub fn is_candidate(name: &str, suffix: &str) -> bool {
    !suffix.is_empty() && name.ends_with(suffix)
}

/// Derive the output file name for `name`, or `None` if it is not a candidate.
pub fn output_name(
    name: &str,
    suffix: &str,
    replacement: &str,
    policy: ReplacePolicy,
) -> Option<String> {
    let bytes = replace_suffix(name.as_bytes(), suffix.as_bytes(), replacement.as_bytes(), policy)?;
    // Splicing UTF-8 text into UTF-8 text at match boundaries stays UTF-8.
    String::from_utf8(bytes).ok()
}

/// [`output_name`] for raw directory entry names, which need not be UTF-8.
///
/// Matching is done on the bytes of the name, so `caf\xe9.dot` is still a
/// candidate and maps to `caf\xe9.svg`.
#[cfg(unix)]
pub fn output_os_name(
    name: &OsStr,
    suffix: &str,
    replacement: &str,
    policy: ReplacePolicy,
) -> Option<OsString> {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    replace_suffix(name.as_bytes(), suffix.as_bytes(), replacement.as_bytes(), policy)
        .map(OsString::from_vec)
}

/// [`output_name`] for raw directory entry names.
///
/// Off unix only names that are valid Unicode can be matched.
#[cfg(not(unix))]
pub fn output_os_name(
    name: &OsStr,
    suffix: &str,
    replacement: &str,
    policy: ReplacePolicy,
) -> Option<OsString> {
    name.to_str()
        .and_then(|n| output_name(n, suffix, replacement, policy))
        .map(OsString::from)
}

fn replace_suffix(
    name: &[u8],
    suffix: &[u8],
    replacement: &[u8],
    policy: ReplacePolicy,
) -> Option<Vec<u8>> {
    if suffix.is_empty() || !name.ends_with(suffix) {
        return None;
    }

    let mut out = Vec::with_capacity(name.len() + replacement.len());
    match policy {
        ReplacePolicy::Trailing => {
            out.extend_from_slice(&name[..name.len() - suffix.len()]);
            out.extend_from_slice(replacement);
        }
        ReplacePolicy::First | ReplacePolicy::All => {
            let mut rest = name;
            let mut replaced = false;
            while let Some(at) = find(rest, suffix) {
                if replaced && policy == ReplacePolicy::First {
                    break;
                }
                out.extend_from_slice(&rest[..at]);
                out.extend_from_slice(replacement);
                rest = &rest[at + suffix.len()..];
                replaced = true;
            }
            out.extend_from_slice(rest);
        }
    }
    Some(out)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn svg(name: &str, policy: ReplacePolicy) -> Option<String> {
        output_name(name, ".dot", ".svg", policy)
    }

    #[test]
    fn suffix_match_is_literal_and_case_sensitive() {
        assert!(is_candidate("graph.dot", ".dot"));
        assert!(is_candidate(".dot", ".dot"));
        assert!(!is_candidate("graph.DOT", ".dot"));
        assert!(!is_candidate("graph.dotx", ".dot"));
        assert!(!is_candidate("graphdot", ".dot"));
        assert!(!is_candidate("a.dot.bak", ".dot"));
    }

    #[test]
    fn simple_names_agree_across_policies() {
        for policy in [ReplacePolicy::Trailing, ReplacePolicy::First, ReplacePolicy::All] {
            assert_eq!(svg("X.dot", policy).as_deref(), Some("X.svg"));
            assert_eq!(svg("main_jumps.dot", policy).as_deref(), Some("main_jumps.svg"));
        }
    }

    #[test]
    fn trailing_policy_only_touches_the_suffix() {
        assert_eq!(svg("a.dot.dot", ReplacePolicy::Trailing).as_deref(), Some("a.dot.svg"));
        assert_eq!(svg("a.dotfile.dot", ReplacePolicy::Trailing).as_deref(), Some("a.dotfile.svg"));
    }

    #[test]
    fn first_policy_replaces_earliest_occurrence() {
        assert_eq!(svg("a.dot.dot", ReplacePolicy::First).as_deref(), Some("a.svg.dot"));
        assert_eq!(svg("a.dotfile.dot", ReplacePolicy::First).as_deref(), Some("a.svgfile.dot"));
    }

    #[test]
    fn all_policy_replaces_every_occurrence() {
        assert_eq!(svg("a.dot.dot", ReplacePolicy::All).as_deref(), Some("a.svg.svg"));
        assert_eq!(svg("a.dotfile.dot", ReplacePolicy::All).as_deref(), Some("a.svgfile.svg"));
    }

    #[test]
    fn non_candidates_have_no_output_name() {
        assert_eq!(svg("notes.txt", ReplacePolicy::Trailing), None);
        assert_eq!(svg("a.dot.bak", ReplacePolicy::All), None);
    }

    #[test]
    fn policy_serialises_as_snake_case() {
        let json = serde_json::to_string(&ReplacePolicy::Trailing).unwrap();
        assert_eq!(json, "\"trailing\"");
        let back: ReplacePolicy = serde_json::from_str("\"first\"").unwrap();
        assert_eq!(back, ReplacePolicy::First);
    }

    #[cfg(unix)]
    #[test]
    fn raw_names_are_matched_on_bytes() {
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"caf\xe9.dot");
        let out = output_os_name(name, ".dot", ".svg", ReplacePolicy::Trailing).unwrap();
        assert_eq!(out.as_bytes(), b"caf\xe9.svg");

        let twice = OsStr::from_bytes(b"\xff.dot.dot");
        let out = output_os_name(twice, ".dot", ".svg", ReplacePolicy::First).unwrap();
        assert_eq!(out.as_bytes(), b"\xff.svg.dot");

        let other = OsStr::from_bytes(b"caf\xe9.txt");
        assert_eq!(output_os_name(other, ".dot", ".svg", ReplacePolicy::All), None);
    }
}
