//! Heading level assignment.

use std::collections::HashMap;

use super::HeadingCandidate;
use crate::clean::TextCleaner;
use crate::model::{Heading, HeadingLevel};

/// Turn accepted candidates into leveled headings.
///
/// Candidates that already carry a level (pattern strategy) map
/// directly. Otherwise levels come from font-size clustering: distinct
/// sizes rounded to one decimal, sorted descending, the top three
/// mapped to H1/H2/H3. Candidates whose size falls outside the top
/// three are dropped from the outline entirely; documents with more
/// than three heading sizes lose the smallest tiers.
pub fn assign_levels(candidates: &[HeadingCandidate], cleaner: &TextCleaner) -> Vec<Heading> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let preassigned = candidates.iter().all(|c| c.level.is_some());
    if preassigned {
        return candidates
            .iter()
            .filter_map(|c| {
                let text = cleaner.normalize(&c.text);
                if text.is_empty() {
                    return None;
                }
                c.level.map(|level| Heading::new(level, text, c.page))
            })
            .collect();
    }

    let level_by_size = cluster_sizes(candidates);

    candidates
        .iter()
        .filter_map(|c| {
            let level = *level_by_size.get(&size_key(c.font_size))?;
            let text = cleaner.normalize(&c.text);
            if text.is_empty() {
                return None;
            }
            Some(Heading::new(level, text, c.page))
        })
        .collect()
}

/// Map the top three distinct candidate font sizes to H1/H2/H3.
fn cluster_sizes(candidates: &[HeadingCandidate]) -> HashMap<i32, HeadingLevel> {
    let mut keys: Vec<i32> = candidates.iter().map(|c| size_key(c.font_size)).collect();
    keys.sort_unstable();
    keys.dedup();
    keys.reverse();

    const LEVELS: [HeadingLevel; 3] = [HeadingLevel::H1, HeadingLevel::H2, HeadingLevel::H3];
    keys.into_iter().take(3).zip(LEVELS).collect()
}

/// Font size rounded to one decimal place, as an exact grouping key.
fn size_key(size: f32) -> i32 {
    (size * 10.0).round() as i32
}
