// Fuzzy matching utilities for "did you mean" suggestions on dimensions and codes

/// Calculate Levenshtein distance between two strings
/// Returns the minimum number of single-character edits (insertions, deletions, substitutions)
/// needed to transform one string into another
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    if s1_chars.is_empty() {
        return s2_chars.len();
    }
    if s2_chars.is_empty() {
        return s1_chars.len();
    }

    // Two rolling rows of the edit matrix
    let mut previous: Vec<usize> = (0..=s2_chars.len()).collect();
    let mut current = vec![0; s2_chars.len() + 1];

    for (i, c1) in s1_chars.iter().enumerate() {
        current[0] = i + 1;
        for (j, c2) in s2_chars.iter().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            current[j + 1] = (previous[j + 1] + 1)      // deletion
                .min(current[j] + 1)                    // insertion
                .min(previous[j] + cost);               // substitution
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[s2_chars.len()]
}

/// Find candidates within `max_distance` edits of `search` (case-insensitive,
/// `_` and `-` treated alike). Returns up to 3 matches, closest first.
pub fn find_near_matches<'a>(search: &str, candidates: &[&'a str], max_distance: usize) -> Vec<(&'a str, usize)> {
    let normalize = |s: &str| s.to_lowercase().replace('_', "-");
    let search_norm = normalize(search);

    let mut matches: Vec<(&'a str, usize)> = candidates
        .iter()
        .map(|candidate| (*candidate, levenshtein_distance(&search_norm, &normalize(candidate))))
        .filter(|(_, distance)| *distance <= max_distance)
        .collect();

    matches.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
    matches.into_iter().take(3).collect()
}

/// " Did you mean 'x'?" suffix for an error message, or empty when nothing is close
pub fn did_you_mean(search: &str, candidates: &[&str]) -> String {
    match find_near_matches(search, candidates, 3).first() {
        Some((candidate, _)) => format!(" Did you mean '{}'?", candidate),
        None => String::new(),
    }
}
