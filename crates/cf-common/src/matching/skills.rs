use crate::tag_normalizer::{normalize_skill_set, normalize_tag_set};

pub const NEUTRAL_SCORE: f64 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SkillComplementResult {
    pub score: f64,
    pub overlap: usize,
    pub total_unique: usize,
    pub overlap_ratio: f64,
    pub reason: String,
    /// True when either side had no usable skill tags.
    pub neutral: bool,
}

/// Skill complement scoring.
///
/// Some overlap validates a shared domain, but heavy overlap means two
/// people who do the same job: the base score *drops* as the overlap ratio
/// rises, and a small per-shared-skill bonus rewards the validation without
/// letting redundancy win.
pub fn score_skills_complement(skills_a: &[String], skills_b: &[String]) -> SkillComplementResult {
    let set_a = normalize_skill_set(skills_a);
    let set_b = normalize_skill_set(skills_b);

    if set_a.is_empty() || set_b.is_empty() {
        return SkillComplementResult {
            score: NEUTRAL_SCORE,
            overlap: 0,
            total_unique: 0,
            overlap_ratio: 0.0,
            reason: "skill tags missing on one side, neutral score".into(),
            neutral: true,
        };
    }

    let overlap = set_a.intersection(&set_b).count();
    let total_unique = set_a.union(&set_b).count();
    let overlap_ratio = overlap as f64 / total_unique as f64;

    let base = if overlap_ratio > 0.5 {
        70.0
    } else if overlap_ratio > 0.2 {
        85.0
    } else {
        100.0
    };

    let bonus = (overlap as f64 * 3.0).min(20.0);
    let score = (base + bonus).min(100.0);

    let mut shared: Vec<_> = set_a.intersection(&set_b).cloned().collect();
    shared.sort();

    SkillComplementResult {
        score,
        overlap,
        total_unique,
        overlap_ratio,
        reason: format!(
            "{} of {} unique skills shared ({:.0}%), base {:.0} + bonus {:.0}{}",
            overlap,
            total_unique,
            overlap_ratio * 100.0,
            base,
            bonus,
            if shared.is_empty() {
                String::new()
            } else {
                format!(" (shared: {})", shared.join(", "))
            }
        ),
        neutral: false,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TagAlignmentResult {
    pub score: f64,
    pub common: usize,
    pub reason: String,
    pub neutral: bool,
}

/// Alignment of an open tag vocabulary: shared tags over the larger set.
/// Used for both value tags and industry tags.
pub fn score_tag_alignment(label: &str, tags_a: &[String], tags_b: &[String]) -> TagAlignmentResult {
    let set_a = normalize_tag_set(tags_a);
    let set_b = normalize_tag_set(tags_b);

    if set_a.is_empty() || set_b.is_empty() {
        return TagAlignmentResult {
            score: NEUTRAL_SCORE,
            common: 0,
            reason: format!("{label} tags missing on one side, neutral score"),
            neutral: true,
        };
    }

    let common = set_a.intersection(&set_b).count();
    let larger = set_a.len().max(set_b.len());
    let score = (common as f64 / larger as f64 * 100.0).round();

    TagAlignmentResult {
        score,
        common,
        reason: format!("{common} of {larger} {label} tags shared"),
        neutral: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_skills_are_neutral() {
        let result = score_skills_complement(&[], &tags(&["Rust"]));
        assert!(result.neutral);
        assert_eq!(result.score, 50.0);
    }

    #[test]
    fn full_overlap_scores_below_no_overlap() {
        let identical = score_skills_complement(&tags(&["X", "Y"]), &tags(&["X", "Y"]));
        let disjoint = score_skills_complement(&tags(&["X"]), &tags(&["Y"]));

        // ratio 1.0 → base 70 (+ bonus 6); ratio 0.0 → base 100.
        assert_eq!(identical.score, 76.0);
        assert_eq!(disjoint.score, 100.0);
        assert!(identical.score < disjoint.score);
    }

    #[test]
    fn moderate_overlap_takes_middle_base() {
        // 1 shared of 3 unique → ratio 0.33 → base 85 + bonus 3.
        let result = score_skills_complement(&tags(&["X", "Y"]), &tags(&["X", "Z"]));
        assert_eq!(result.overlap, 1);
        assert_eq!(result.total_unique, 3);
        assert_eq!(result.score, 88.0);
    }

    #[test]
    fn bonus_is_capped_and_total_clamped() {
        let many: Vec<String> = (0..10).map(|i| format!("shared-{i}")).collect();
        let mut b = many.clone();
        b.extend((0..11).map(|i| format!("extra-{i}")));

        // 10 shared of 21 unique → ratio ≈ 0.48 → base 85, bonus capped at 20.
        let result = score_skills_complement(&many, &b);
        assert_eq!(result.overlap, 10);
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn aliases_count_as_overlap() {
        let result = score_skills_complement(&tags(&["JS", "k8s"]), &tags(&["JavaScript", "Kubernetes"]));
        assert_eq!(result.overlap, 2);
        assert_eq!(result.total_unique, 2);
    }

    #[test]
    fn tag_alignment_divides_by_larger_set() {
        let result = score_tag_alignment(
            "value",
            &tags(&["Innovation", "Speed", "Craft"]),
            &tags(&["Innovation"]),
        );
        assert!(!result.neutral);
        assert_eq!(result.common, 1);
        assert_eq!(result.score, 33.0);
    }

    #[test]
    fn tag_alignment_neutral_when_either_empty() {
        let result = score_tag_alignment("industry", &[], &tags(&["SaaS"]));
        assert!(result.neutral);
        assert_eq!(result.score, 50.0);
    }

    #[test]
    fn identical_tag_sets_align_fully() {
        let result = score_tag_alignment("value", &tags(&["Innovation"]), &tags(&["innovation"]));
        assert_eq!(result.score, 100.0);
    }
}
