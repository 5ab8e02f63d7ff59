//! Level-1 Group Canonicalization
//!
//! The sheets spell the four top-level groups inconsistently (with and
//! without the 类 suffix). All spellings collapse to one canonical label
//! per group; anything outside the table passes through unchanged.

/// Spellings that introduce a level-1 heading in the wet-weight sheet.
///
/// Note the suffixed protozoan spelling (原生动物类) is not a trigger;
/// the curated sheet never uses it as a heading.
pub const LEVEL1_LABELS: [&str; 7] =
    ["原生动物", "轮虫", "轮虫类", "枝角", "枝角类", "桡足", "桡足类"];

/// Canonicalize a raw level-1 group label.
///
/// Absent input should be passed as `""`; the result is always trimmed.
pub fn normalize_lvl1(raw: &str) -> String {
    match raw.trim() {
        "轮虫" | "轮虫类" => "轮虫类",
        "枝角" | "枝角类" => "枝角类",
        "桡足" | "桡足类" => "桡足类",
        "原生动物类" | "原生动物" => "原生动物",
        other => other,
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_forms_gain_the_class_suffix() {
        assert_eq!(normalize_lvl1("轮虫"), "轮虫类");
        assert_eq!(normalize_lvl1("轮虫类"), "轮虫类");
        assert_eq!(normalize_lvl1("枝角"), "枝角类");
        assert_eq!(normalize_lvl1("桡足"), "桡足类");
    }

    #[test]
    fn protozoan_group_drops_the_suffix() {
        assert_eq!(normalize_lvl1("原生动物类"), "原生动物");
        assert_eq!(normalize_lvl1("原生动物"), "原生动物");
    }

    #[test]
    fn unrecognized_labels_pass_through() {
        assert_eq!(normalize_lvl1("挠足类"), "挠足类");
        assert_eq!(normalize_lvl1(""), "");
    }

    #[test]
    fn input_is_trimmed_before_lookup() {
        assert_eq!(normalize_lvl1(" 轮虫 "), "轮虫类");
        assert_eq!(normalize_lvl1("  未知组  "), "未知组");
    }

    #[test]
    fn every_heading_trigger_normalizes_to_a_canonical_group() {
        for label in LEVEL1_LABELS {
            let canonical = normalize_lvl1(label);
            assert!(
                ["轮虫类", "枝角类", "桡足类", "原生动物"].contains(&canonical.as_str()),
                "{label} normalized to {canonical}"
            );
        }
    }
}
