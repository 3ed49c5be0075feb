use thiserror::Error;

/// Coarse ranking tier for a qualifying candidate.
///
/// Declaration order is ranking order: prefix matches sort before interior
/// matches, which sort before suffix matches. A candidate equal to the query
/// counts as a prefix match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    StartsWith,
    Contains,
    EndsWith,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("max_results must be greater than zero")]
    InvalidLimit,
}

/// A candidate that survived filtering, ready to rank.
///
/// Invariant: `normalized` contains the normalized query as a substring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Trimmed source value, original casing preserved.
    pub original: String,
    /// Trimmed + lowercased form used for all comparisons.
    pub normalized: String,
    pub tier: MatchTier,
}

impl Match {
    /// Sort key defining the stable ranking order.
    pub fn rank_key(&self) -> (MatchTier, &str, &str) {
        (self.tier, &self.normalized, &self.original)
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

fn tier_for(normalized_item: &str, normalized_search: &str) -> MatchTier {
    if normalized_item.starts_with(normalized_search) {
        MatchTier::StartsWith
    } else if normalized_item.ends_with(normalized_search) {
        MatchTier::EndsWith
    } else {
        MatchTier::Contains
    }
}

fn find_matches(items: &[Option<&str>], normalized_search: &str) -> Vec<Match> {
    let mut matches = Vec::new();
    for item in items {
        let Some(item) = item else { continue };
        if item.trim().is_empty() {
            continue;
        }

        let normalized = normalize(item);
        if !normalized.contains(normalized_search) {
            continue;
        }

        let tier = tier_for(&normalized, normalized_search);
        matches.push(Match {
            original: item.trim().to_string(),
            normalized,
            tier,
        });
    }
    matches
}

/// Rank `items` against `search` and return the top `max_results` values.
///
/// Returns the trimmed, original-case values of the qualifying candidates,
/// truncated (never padded) to `max_results`. A blank `search` or empty
/// `items` yields an empty result; `max_results == 0` is the only error and
/// is checked before anything else. `None` and blank candidates never
/// qualify, and the input slice is left untouched.
pub fn autocomplete(
    search: &str,
    items: &[Option<&str>],
    max_results: usize,
) -> Result<Vec<String>, MatchError> {
    if max_results == 0 {
        return Err(MatchError::InvalidLimit);
    }

    if search.trim().is_empty() || items.is_empty() {
        return Ok(Vec::new());
    }

    let normalized_search = normalize(search);

    let mut matches = find_matches(items, &normalized_search);
    matches.sort_by(|a, b| a.rank_key().cmp(&b.rank_key()));

    Ok(matches
        .into_iter()
        .take(max_results)
        .map(|m| m.original)
        .collect())
}
