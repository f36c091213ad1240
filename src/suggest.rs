//! "Did you mean" hints for mistyped style and palette names

/// Largest edit distance still reported as a likely typo.
pub const MAX_DISTANCE: usize = 3;

/// Levenshtein edit distance between two strings, counted in chars.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            let substitution = diagonal + usize::from(ca != *cb);
            row[j + 1] = substitution.min(above + 1).min(row[j] + 1);
            diagonal = above;
        }
    }

    row[b.len()]
}

/// Up to three candidates within `max_distance` of `query`, closest first.
///
/// Comparison ignores ASCII case. Ties keep alphabetical order so the hint is
/// stable regardless of registry iteration order.
pub fn suggest<'a, I>(query: &str, candidates: I, max_distance: usize) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let query = query.to_ascii_lowercase();
    let mut scored: Vec<(usize, &'a str)> = candidates
        .into_iter()
        .map(|candidate| (levenshtein_distance(&query, &candidate.to_ascii_lowercase()), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();

    scored.sort();
    scored.into_iter().take(3).map(|(_, name)| name).collect()
}

/// Format suggestions as a sentence, or `None` when there are none.
pub fn format_suggestion(suggestions: &[&str]) -> Option<String> {
    match suggestions {
        [] => None,
        [only] => Some(format!("Did you mean '{}'?", only)),
        [first, second] => Some(format!("Did you mean '{}' or '{}'?", first, second)),
        [first, second, third, ..] => {
            Some(format!("Did you mean '{}', '{}', or '{}'?", first, second, third))
        }
    }
}

/// Shorthand for [`suggest`] followed by [`format_suggestion`].
pub fn did_you_mean<'a, I>(query: &str, candidates: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    format_suggestion(&suggest(query, candidates, MAX_DISTANCE))
}
