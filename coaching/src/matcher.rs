//! Free-text drill-suggestion matching.
//!
//! AI reports name drills loosely ("work on a stride freeze"), so resolution
//! is heuristic: a direct title-containment pass over the catalog, then a
//! fixed keyword table. Pass ordering and first-match-wins are behavioral
//! contracts: reordering changes which drills users are shown.

use crate::catalog::catalog;
use crate::drill::Drill;
use std::collections::HashSet;

/// Keyword -> ordered candidate title fragments, tried in declaration order.
const KEYWORD_MAP: &[(&str, &[&str])] = &[
    ("stride", &["stride freeze", "walking happy gilmore"]),
    ("balance", &["balance beam", "closed eyes", "narrow stance"]),
    (
        "load",
        &["stride freeze", "walking happy gilmore", "variable timing"],
    ),
    ("timing", &["variable timing", "quick hands"]),
    (
        "path",
        &[
            "stop at contact",
            "knee down tee",
            "top hand",
            "bottom hand",
            "towel drill",
            "follow through",
        ],
    ),
    (
        "power",
        &["med ball toss", "weighted bat", "quick hands", "resistance band"],
    ),
    ("hand", &["top hand", "bottom hand", "quick hands"]),
    (
        "stance",
        &["narrow stance", "mirror work", "two-ball toss", "chair drill"],
    ),
    ("extension", &["follow through", "stop at contact"]),
    ("mechanics", &["mirror work", "stop at contact", "towel drill"]),
    ("rhythm", &["walking happy gilmore", "variable timing"]),
    ("speed", &["quick hands", "weighted bat"]),
    ("strength", &["med ball toss", "resistance band", "weighted bat"]),
    ("posture", &["balance beam", "mirror work", "narrow stance"]),
    ("sequence", &["stride freeze", "walking happy gilmore"]),
    ("recognition", &["two-ball toss"]),
    ("feel", &["closed eyes", "mirror work"]),
    ("connection", &["towel drill", "chair drill"]),
];

/// Resolve a single suggestion to a catalog drill.
///
/// The direct pass scans the catalog in declaration order and accepts an
/// entry when either lowercased string contains the other. The keyword table
/// is the fallback. Returns `None` when neither pass hits, leaving
/// placeholder synthesis to the caller.
pub fn match_drill(suggestion: &str) -> Option<&'static Drill> {
    let suggestion = suggestion.to_lowercase();

    for d in catalog() {
        let title = d.title.to_lowercase();
        if title.contains(&suggestion) || suggestion.contains(&title) {
            return Some(d);
        }
    }

    for (keyword, fragments) in KEYWORD_MAP {
        if !suggestion.contains(keyword) {
            continue;
        }
        for fragment in *fragments {
            if let Some(d) = catalog()
                .iter()
                .find(|d| d.title.to_lowercase().contains(fragment))
            {
                return Some(d);
            }
        }
    }

    None
}

/// Resolve a batch of suggestions, deduplicating by drill id.
///
/// Every selected id is excluded from later passes within the batch. The
/// keyword fallback for a suggestion runs only while the batch still holds
/// fewer matches than input suggestions, and each keyword contained in the
/// suggestion may contribute one drill.
pub fn match_all<S: AsRef<str>>(suggestions: &[S]) -> Vec<&'static Drill> {
    let mut matched: Vec<&'static Drill> = Vec::new();
    let mut selected: HashSet<&'static str> = HashSet::new();

    for suggestion in suggestions {
        let suggestion = suggestion.as_ref().to_lowercase();

        for d in catalog() {
            if selected.contains(d.id.as_str()) {
                continue;
            }
            let title = d.title.to_lowercase();
            if title.contains(&suggestion) || suggestion.contains(&title) {
                matched.push(d);
                selected.insert(d.id.as_str());
                break;
            }
        }

        if matched.len() < suggestions.len() {
            for (keyword, fragments) in KEYWORD_MAP {
                if !suggestion.contains(keyword) {
                    continue;
                }
                let hit = fragments.iter().find_map(|fragment| {
                    catalog().iter().find(|d| {
                        d.title.to_lowercase().contains(fragment)
                            && !selected.contains(d.id.as_str())
                    })
                });
                if let Some(d) = hit {
                    matched.push(d);
                    selected.insert(d.id.as_str());
                }
            }
        }
    }

    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_exact_title_matches_itself() {
        for d in catalog() {
            let hit = match_drill(&d.title);
            assert_eq!(hit.map(|m| m.id.as_str()), Some(d.id.as_str()), "{}", d.title);
        }
    }

    #[test]
    fn test_direct_match_is_case_insensitive() {
        let hit = match_drill("STRIDE FREEZE DRILL").unwrap();
        assert_eq!(hit.id, "stride-freeze");
    }

    #[test]
    fn test_suggestion_containing_title_matches() {
        let hit = match_drill("try the towel under arm drill daily").unwrap();
        assert_eq!(hit.id, "towel-drill");
    }

    #[test]
    fn test_keyword_fallback() {
        // "stride work" has no catalog title containment; the "stride"
        // keyword leads to "stride freeze" first.
        let hit = match_drill("stride work").unwrap();
        assert_eq!(hit.id, "stride-freeze");
    }

    #[test]
    fn test_direct_pass_wins_over_keyword_pass() {
        // Contains the "balance" keyword, but the direct pass hits
        // "Balance Beam Hitting" first by title containment.
        let hit = match_drill("balance beam hitting").unwrap();
        assert_eq!(hit.id, "balance-beam");
    }

    #[test]
    fn test_unmatched_suggestion_returns_none() {
        assert!(match_drill("juggling chainsaws").is_none());
        assert!(match_drill("xyzzy").is_none());
    }

    #[test]
    fn test_match_all_dedupes_by_id() {
        let suggestions = ["Stride Freeze Drill", "stride freeze", "stride work"];
        let matched = match_all(&suggestions);
        let mut ids: Vec<&str> = matched.iter().map(|d| d.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), matched.len());
    }

    #[test]
    fn test_match_all_keyword_pass_skips_selected() {
        // The first suggestion takes stride-freeze directly; its keyword
        // pass then supplies the next "stride" candidate, walking happy
        // gilmore, because the batch is still short.
        let matched = match_all(&["Stride Freeze Drill", "stride work"]);
        let ids: Vec<&str> = matched.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids[0], "stride-freeze");
        assert!(ids.contains(&"walking-start"));
    }

    #[test]
    fn test_match_all_empty_input() {
        let matched = match_all::<&str>(&[]);
        assert!(matched.is_empty());
    }

    #[test]
    fn test_keyword_candidates_all_resolve() {
        // Every fragment in the keyword table must point at a real catalog
        // title, otherwise the fallback silently dead-ends.
        for (keyword, fragments) in KEYWORD_MAP {
            for fragment in *fragments {
                assert!(
                    catalog()
                        .iter()
                        .any(|d| d.title.to_lowercase().contains(fragment)),
                    "keyword '{}' fragment '{}' matches no catalog title",
                    keyword,
                    fragment
                );
            }
        }
    }

    proptest! {
        #[test]
        fn prop_match_all_never_duplicates(suggestions in proptest::collection::vec(".{0,40}", 0..12)) {
            let matched = match_all(&suggestions);
            let ids: std::collections::HashSet<&str> =
                matched.iter().map(|d| d.id.as_str()).collect();
            prop_assert_eq!(ids.len(), matched.len());
        }

        #[test]
        fn prop_match_drill_is_deterministic(s in ".{0,40}") {
            let a = match_drill(&s).map(|d| d.id.as_str());
            let b = match_drill(&s).map(|d| d.id.as_str());
            prop_assert_eq!(a, b);
        }
    }
}
