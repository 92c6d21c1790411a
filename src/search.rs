//! Skill search: substring filtering, match highlighting and input debounce.

use std::ops::Range;
use std::time::{Duration, Instant};

use crate::content::Skill;

/// Case fold one char.
///
/// Lower-cases char by char, so the result never depends on the
/// neighbouring letters, and folds final sigma onto `σ`.
fn fold(c: char) -> impl Iterator<Item = char> {
    c.to_lowercase().map(|lc| if lc == 'ς' { 'σ' } else { lc })
}

/// Normalize a raw query: trimmed and case-folded.
/// Returns None when nothing is left to match.
fn normalize(query: &str) -> Option<Vec<char>> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().flat_map(fold).collect())
    }
}

/// Whether a skill matches an already-normalized needle.
///
/// Uses the same fold as the highlighter, so a skill is kept exactly when
/// one of its texts has something to highlight.
fn skill_matches(skill: &Skill, needle: &[char]) -> bool {
    let contains = |text: &str| !find_ranges(text, needle).is_empty();
    contains(skill.title)
        || contains(skill.description)
        || skill.items.iter().any(|item| contains(item))
}

/// Filter skills by a case-insensitive substring query.
///
/// The query is matched against the title, the description and every item.
/// A blank query keeps every skill. Original order is preserved either way.
pub fn filter_skills<'a>(skills: &'a [Skill], query: &str) -> Vec<&'a Skill> {
    match normalize(query) {
        None => skills.iter().collect(),
        Some(needle) => skills.iter().filter(|s| skill_matches(s, &needle)).collect(),
    }
}

/// Byte ranges of every non-overlapping case-insensitive occurrence of
/// `query` in `text`.
///
/// Folding is done per char and each folded char remembers the byte span
/// of the char it came from, so ranges always land on char boundaries of
/// `text` even when lower-casing changes the byte length.
pub fn match_ranges(text: &str, query: &str) -> Vec<Range<usize>> {
    match normalize(query) {
        Some(needle) => find_ranges(text, &needle),
        None => Vec::new(),
    }
}

fn find_ranges(text: &str, needle: &[char]) -> Vec<Range<usize>> {
    if needle.is_empty() {
        return Vec::new();
    }

    // (folded char, byte span of its source char)
    let folded: Vec<(char, Range<usize>)> = text
        .char_indices()
        .flat_map(|(start, c)| {
            let span = start..start + c.len_utf8();
            fold(c).map(move |lc| (lc, span.clone()))
        })
        .collect();

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= folded.len() {
        let hit = folded[i..i + needle.len()]
            .iter()
            .zip(needle)
            .all(|((c, _), n)| c == n);

        if hit {
            let start = folded[i].1.start;
            let end = folded[i + needle.len() - 1].1.end;
            // A multi-char fold can put two hits inside one source char
            if ranges.last().map_or(true, |r: &Range<usize>| r.end <= start) {
                ranges.push(start..end);
            }
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

/// Holds the latest submitted value until input has been quiet for `delay`.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Replace any pending value and restart the quiet period
    pub fn submit(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// Take the pending value if its quiet period has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.pending {
            Some((_, deadline)) if now >= deadline => self.pending.take().map(|(v, _)| v),
            _ => None,
        }
    }

    /// Take the pending value immediately, regardless of the deadline
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(v, _)| v)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SKILLS;

    fn titles(skills: &[&Skill]) -> Vec<&'static str> {
        skills.iter().map(|s| s.title).collect()
    }

    #[test]
    fn test_blank_query_keeps_everything_in_order() {
        for q in ["", "   ", "\t\n"] {
            let result = filter_skills(SKILLS, q);
            assert_eq!(result.len(), SKILLS.len());
            assert!(result.iter().zip(SKILLS).all(|(a, b)| a.id == b.id));
        }
    }

    #[test]
    fn test_kubernetes_query() {
        let result = filter_skills(SKILLS, "kubernetes");
        let expected: Vec<_> = SKILLS
            .iter()
            .filter(|s| {
                s.title.to_lowercase().contains("kubernetes")
                    || s.description.to_lowercase().contains("kubernetes")
                    || s.items.iter().any(|i| i.to_lowercase().contains("kubernetes"))
            })
            .map(|s| s.title)
            .collect();

        assert!(titles(&result).contains(&"KUBERNETES"));
        assert!(!titles(&result).contains(&"FOUNDATIONS"));
        assert_eq!(titles(&result), expected);
    }

    #[test]
    fn test_query_is_trimmed_and_case_insensitive() {
        let a = filter_skills(SKILLS, "  DoCkEr ");
        let b = filter_skills(SKILLS, "docker");
        assert_eq!(titles(&a), titles(&b));
        assert!(titles(&a).contains(&"CONTAINERIZATION"));
    }

    #[test]
    fn test_item_match() {
        // Only appears in an item of FOUNDATIONS
        let result = filter_skills(SKILLS, "fail2ban");
        assert_eq!(titles(&result), vec!["FOUNDATIONS"]);
    }

    #[test]
    fn test_matches_and_exclusions_are_consistent() {
        for q in ["grafana", "aws", "helm", "x", "zzz-none"] {
            let included = filter_skills(SKILLS, q);
            let needle: Vec<char> = q.chars().collect();
            for skill in SKILLS {
                let has = skill_matches(skill, &needle);
                let shown = included.iter().any(|s| s.id == skill.id);
                assert_eq!(shown, has, "query {q:?} skill {}", skill.id);
            }
        }
    }

    fn has_highlight(skill: &Skill, query: &str) -> bool {
        !match_ranges(skill.title, query).is_empty()
            || !match_ranges(skill.description, query).is_empty()
            || skill.items.iter().any(|item| !match_ranges(item, query).is_empty())
    }

    #[test]
    fn test_every_shown_skill_has_a_highlight() {
        for q in ["kube", "AWS", " helm ", "İ", "é", "ΜΟΣ", "ci/cd", "x"] {
            for skill in SKILLS {
                let shown = filter_skills(SKILLS, q).iter().any(|s| s.id == skill.id);
                assert_eq!(shown, has_highlight(skill, q), "query {q:?} skill {}", skill.id);
            }
        }
    }

    #[test]
    fn test_final_sigma_matches_both_ways() {
        const GREEK: Skill = Skill {
            id: "greek",
            title: "ΚΟΣΜΟΣ",
            icon: "",
            description: "",
            color: "",
            items: &[],
        };
        let skills = std::slice::from_ref(&GREEK);

        for q in ["ΜΟΣ", "μος", "μοσ", "σμ"] {
            assert_eq!(filter_skills(skills, q).len(), 1, "query {q:?}");
            assert!(has_highlight(&GREEK, q), "query {q:?}");
        }
        assert_eq!(&GREEK.title[match_ranges(GREEK.title, "μος")[0].clone()], "ΜΟΣ");
    }

    #[test]
    fn test_no_match() {
        assert!(filter_skills(SKILLS, "cobol").is_empty());
    }

    #[test]
    fn test_match_ranges() {
        assert_eq!(match_ranges("Kubernetes Operators", "kube"), vec![0..4]);
        assert_eq!(match_ranges("aaaa", "aa"), vec![0..2, 2..4]);
        assert_eq!(match_ranges("AWS and aws", " AWS "), vec![0..3, 8..11]);
        assert!(match_ranges("anything", "  ").is_empty());
        assert!(match_ranges("short", "much longer").is_empty());
    }

    #[test]
    fn test_match_ranges_unicode() {
        // 'İ' lower-cases to two chars, ranges must stay on char boundaries
        let text = "İstanbul";
        let ranges = match_ranges(text, "stan");
        assert_eq!(ranges.len(), 1);
        assert_eq!(&text[ranges[0].clone()], "stan");

        let text = "Écran";
        assert_eq!(match_ranges(text, "é"), vec![0..2]);
    }

    #[test]
    fn test_debouncer_applies_last_value_after_quiet_period() {
        let start = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(300));

        d.submit("k".to_string(), start);
        d.submit("ku".to_string(), start + Duration::from_millis(100));
        d.submit("kub".to_string(), start + Duration::from_millis(200));

        // 300ms after the first key, but only 100ms after the last
        assert_eq!(d.poll(start + Duration::from_millis(300)), None);
        assert!(d.is_pending());

        assert_eq!(
            d.poll(start + Duration::from_millis(500)),
            Some("kub".to_string())
        );
        assert!(!d.is_pending());
        assert_eq!(d.poll(start + Duration::from_secs(5)), None);
    }

    #[test]
    fn test_debouncer_flush_and_cancel() {
        let now = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(300));

        d.submit(1, now);
        assert_eq!(d.flush(), Some(1));
        assert_eq!(d.flush(), None);

        d.submit(2, now);
        d.cancel();
        assert_eq!(d.poll(now + Duration::from_secs(1)), None);
    }
}
