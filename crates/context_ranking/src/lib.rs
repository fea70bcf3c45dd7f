// crates/context_ranking/src/lib.rs

//! Scores candidate files for supplemental context by how many of the focal
//! file's symbol names show up in the candidate's own symbol names.

use path_text_utils::get_file_distance;
use std::cmp::Ordering;

/// Counts the `(needle, haystack)` pairs where the haystack contains the
/// needle, ignoring case.
///
/// Every pair is checked, so a needle found in three haystacks counts three
/// times. Cost is `needles × haystacks × string length`.
pub fn count_substring_matches<N, H>(needles: &[N], haystacks: &[H]) -> usize
where
    N: AsRef<str>,
    H: AsRef<str>,
{
    let lowered: Vec<String> = haystacks.iter().map(|h| h.as_ref().to_lowercase()).collect();
    needles
        .iter()
        .map(|n| n.as_ref().to_lowercase())
        .map(|needle| lowered.iter().filter(|h| h.contains(needle.as_str())).count())
        .sum()
}

/// A file that might be worth including, with the names extracted from it.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub path: String,
    pub symbols: Vec<String>,
}

/// A scored candidate. Higher `score` is more relevant; `distance` is the
/// directory-hop distance from the focal file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedCandidate {
    pub path: String,
    pub score: usize,
    pub distance: usize,
}

/// Scores every candidate against `focal_symbols` and sorts the result:
/// score descending, then distance ascending, then path.
pub fn rank_candidates<S: AsRef<str>>(
    focal_path: &str,
    focal_symbols: &[S],
    candidates: &[Candidate],
) -> Vec<RankedCandidate> {
    let mut ranked: Vec<RankedCandidate> = candidates
        .iter()
        .map(|c| RankedCandidate {
            path: c.path.clone(),
            score: count_substring_matches(focal_symbols, c.symbols.as_slice()),
            distance: get_file_distance(focal_path, &c.path),
        })
        .collect();

    ranked.sort_by(|a, b| match b.score.cmp(&a.score) {
        Ordering::Equal => a.distance.cmp(&b.distance).then_with(|| a.path.cmp(&b.path)),
        other => other,
    });
    ranked
}
