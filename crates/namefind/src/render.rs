//! Text rendering of search outcomes

use namefind_core::{AliasedResult, MatchResult};

use crate::locale::Messages;

/// Render a result with its variations as plain text lines.
pub fn render_text(aliased: &AliasedResult, messages: &Messages) -> String {
    let mut out = match &aliased.result {
        MatchResult::ExactMatches(entries) => {
            let mut out = format!(
                "{} ({} {})\n",
                messages.exact_match,
                entries.len(),
                messages.results_found
            );
            for entry in entries {
                out.push_str(&format!("  - {} (ID: {})\n", entry.name, entry.id));
            }
            out
        }
        MatchResult::FuzzyMatches(candidates) => {
            let mut out = format!(
                "{} ({} {})\n",
                messages.not_found,
                candidates.len(),
                messages.similar_found
            );
            for candidate in candidates {
                out.push_str(&format!(
                    "  - {} (ID: {}) [{}]\n",
                    candidate.name, candidate.id, candidate.score
                ));
            }
            out
        }
        MatchResult::NoMatch => format!("{}\n", messages.does_not_exist),
    };

    let mut aliases = aliased.unique_aliases().peekable();
    if aliases.peek().is_some() {
        out.push_str(&format!("{}\n", messages.variations_found));
        for alias in aliases {
            out.push_str(&format!("  - {} (ID: {})\n", alias.alias, alias.id));
        }
    }

    out
}

/// Render a result as pretty JSON.
pub fn render_json(aliased: &AliasedResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(aliased)
}
