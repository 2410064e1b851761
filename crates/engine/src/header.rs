//! Header-line detection and column-name normalization.

use std::collections::HashMap;

use regex::Regex;

use crate::config::Separator;

/// Keywords typical of identifier/quantity header lines.
const HEADER_KEYWORDS: &str = r"(?i)\b(mark|qty|quantity|component|pcs|pieces|amount|count)\b";

/// Canonical header replacements, matched against the whole normalized name.
const CANONICAL_NAMES: &[(&str, &str)] = &[
    ("quantity", "Qty"),
    ("amount", "Qty"),
    ("pieces", "Pcs"),
];

/// Detect the most likely field separator by checking consistency across the
/// first few lines.
///
/// For each candidate (tab, multi-space), count fields per line and find the
/// most frequent multi-field count; score = frequency × field count. Title
/// and trailer lines tokenize to a single field and never vote. Tab is
/// preferred on equal scores.
pub(crate) fn sniff_separator(lines: &[&str]) -> Separator {
    let sample = &lines[..lines.len().min(10)];

    let mut best = Separator::MultiSpace;
    let mut best_score = 0u64;

    for candidate in [Separator::Tab, Separator::MultiSpace] {
        let mut freq: HashMap<usize, u64> = HashMap::new();
        for line in sample {
            let count = candidate.split(line).len();
            if count > 1 {
                *freq.entry(count).or_insert(0) += 1;
            }
        }

        let Some((&target, &votes)) = freq.iter().max_by_key(|&(&target, &votes)| (votes, target))
        else {
            continue;
        };
        let score = votes * target as u64;

        if score > best_score {
            best_score = score;
            best = candidate;
        }
    }

    best
}

/// Locate the header line among the first `scan` lines.
///
/// Score = field count, plus 3 when the line carries a known header keyword.
/// The highest score wins; ties resolve to the earliest line.
pub(crate) fn detect_header_line(lines: &[&str], separator: Separator, scan: usize) -> usize {
    let keyword_re = Regex::new(HEADER_KEYWORDS).unwrap();

    let mut best_idx = 0;
    let mut best_score = 0usize;

    for (idx, line) in lines.iter().take(scan).enumerate() {
        let mut score = separator.split(line).len();
        if keyword_re.is_match(line) {
            score += 3;
        }
        if score > best_score {
            best_score = score;
            best_idx = idx;
        }
    }

    best_idx
}

/// Normalize raw header fields into a unique, ordered column-name list.
///
/// Unusable fields get positional `ColN` names; duplicates get a numeric
/// suffix. When nothing usable survives, the whole header is synthesized
/// positionally.
pub(crate) fn normalize_headers(fields: &[&str]) -> Vec<String> {
    let names: Vec<String> = fields.iter().map(|f| normalize_name(f)).collect();

    if names.iter().all(|n| n.is_empty()) {
        return (1..=fields.len()).map(|i| format!("Col{i}")).collect();
    }

    let mut out: Vec<String> = Vec::with_capacity(names.len());
    for (i, name) in names.iter().enumerate() {
        let base = if name.is_empty() { format!("Col{}", i + 1) } else { name.clone() };
        let mut candidate = base.clone();
        let mut n = 1;
        while out.contains(&candidate) {
            n += 1;
            candidate = format!("{base} {n}");
        }
        out.push(candidate);
    }
    out
}

/// Strip to alphanumeric/space/period/hyphen, collapse whitespace, then
/// canonicalize well-known synonyms.
fn normalize_name(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '.' | '-'))
        .collect();
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");

    for (from, to) in CANONICAL_NAMES {
        if collapsed.eq_ignore_ascii_case(from) {
            return (*to).to_string();
        }
    }
    collapsed
}
