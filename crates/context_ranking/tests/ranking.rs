// crates/context_ranking/tests/ranking.rs

use context_ranking::{rank_candidates, Candidate};

fn candidate(path: &str, symbols: &[&str]) -> Candidate {
    Candidate {
        path: path.to_string(),
        symbols: symbols.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn ties_break_on_distance_then_path() {
    let candidates = vec![
        candidate("lib/z/Beta.java", &["parse"]),
        candidate("src/Gamma.java", &["parse"]),
        candidate("src/Alpha.java", &["parse"]),
    ];

    let ranked = rank_candidates("src/Parser.java", &["PARSE"], &candidates);
    let paths: Vec<&str> = ranked.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, vec!["src/Alpha.java", "src/Gamma.java", "lib/z/Beta.java"]);
    assert!(ranked.iter().all(|r| r.score == 1));
    assert_eq!(ranked[2].distance, 3);
}

#[test]
fn no_candidates_ranks_nothing() {
    let ranked = rank_candidates("src/Parser.java", &["parse"], &[]);
    assert!(ranked.is_empty());
}
