//! Structural validator for card content.
//!
//! Decides whether a markdown body satisfies the marketplace's
//! minimum-quality bar for publication: every mandatory section must appear
//! as a heading. Matching is deliberately a line-anchored pattern match, not
//! a markdown parse; a full AST would change the matching semantics around
//! inline markup inside headings.

use once_cell::sync::Lazy;
use regex::Regex;

/// Mandatory section headings, in the canonical order reported to sellers.
///
/// Changing this list is a deployment-time configuration change shared with
/// any UI hint text; it is not a runtime parameter.
pub const MANDATORY_SECTIONS: [&str; 5] = [
    "Problem Definition",
    "Target Audience",
    "Solution Overview",
    "Contents",
    "Usage Notes & Limitations",
];

/// One compiled pattern per mandatory section.
///
/// A section is satisfied when any line starts with heading markers followed
/// by the section name (case-insensitive, prefix-anchored on the heading
/// text). `## problem definition and scope` matches `Problem Definition`;
/// `## The Problem Definition` does not.
static SECTION_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    MANDATORY_SECTIONS
        .iter()
        .map(|section| {
            let pattern = format!(r"(?mi)^#+\s*{}", regex::escape(section));
            let regex = Regex::new(&pattern).expect("mandatory section pattern is valid");
            (*section, regex)
        })
        .collect()
});

/// Result of a structural check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureCheck {
    /// True iff zero sections are missing.
    pub valid: bool,
    /// Missing section names, in the canonical `MANDATORY_SECTIONS` order.
    pub missing_sections: Vec<&'static str>,
}

/// Checks a markdown body for the mandatory section headings.
///
/// Pure function of its input; never fails. The empty string reports all
/// five sections missing. A section name occurring only in body prose does
/// not satisfy the requirement.
pub fn validate_structure(content: &str) -> StructureCheck {
    let missing_sections: Vec<&'static str> = SECTION_PATTERNS
        .iter()
        .filter(|(_, regex)| !regex.is_match(content))
        .map(|(section, _)| *section)
        .collect();

    StructureCheck {
        valid: missing_sections.is_empty(),
        missing_sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const COMPLETE: &str = "# Problem Definition\nX\n# Target Audience\nY\n# Solution Overview\nZ\n# Contents\nW\n# Usage Notes & Limitations\nV";

    #[test]
    fn complete_content_is_valid() {
        let check = validate_structure(COMPLETE);
        assert!(check.valid);
        assert!(check.missing_sections.is_empty());
    }

    #[test]
    fn removing_one_section_reports_exactly_that_section() {
        let without_contents = COMPLETE
            .lines()
            .filter(|line| *line != "# Contents")
            .collect::<Vec<_>>()
            .join("\n");

        let check = validate_structure(&without_contents);
        assert!(!check.valid);
        assert_eq!(check.missing_sections, vec!["Contents"]);
    }

    #[test]
    fn empty_content_reports_all_sections_missing() {
        let check = validate_structure("");
        assert!(!check.valid);
        assert_eq!(check.missing_sections, MANDATORY_SECTIONS.to_vec());
    }

    #[test]
    fn missing_sections_keep_canonical_order_regardless_of_document_order() {
        // Document contains the sections in reverse order, minus two.
        let content = "## Usage Notes & Limitations\n## Solution Overview\n## Problem Definition";
        let check = validate_structure(content);
        assert_eq!(check.missing_sections, vec!["Target Audience", "Contents"]);
    }

    #[test]
    fn heading_match_is_case_insensitive() {
        let content = "# problem definition\n## TARGET AUDIENCE\n### Solution overview\n# contents\n# usage notes & limitations";
        assert!(validate_structure(content).valid);
    }

    #[test]
    fn any_heading_depth_satisfies_a_section() {
        let content = "###### Problem Definition\n# Target Audience\n## Solution Overview\n### Contents\n#### Usage Notes & Limitations";
        assert!(validate_structure(content).valid);
    }

    #[test]
    fn section_name_must_prefix_the_heading_text() {
        // Extra words after the name are fine, before it they are not.
        let check = validate_structure("## Problem Definition and scope");
        assert!(!check.missing_sections.contains(&"Problem Definition"));

        let check = validate_structure("## The Problem Definition");
        assert!(check.missing_sections.contains(&"Problem Definition"));
    }

    #[test]
    fn section_name_in_body_prose_does_not_count() {
        let check = validate_structure("Problem Definition is hard");
        assert!(check.missing_sections.contains(&"Problem Definition"));
    }

    #[test]
    fn heading_marker_mid_line_does_not_count() {
        let check = validate_structure("see # Problem Definition for details");
        assert!(check.missing_sections.contains(&"Problem Definition"));
    }

    #[test]
    fn optional_whitespace_after_markers_is_allowed() {
        assert!(!validate_structure("#Problem Definition")
            .missing_sections
            .contains(&"Problem Definition"));
        assert!(!validate_structure("##   Problem Definition")
            .missing_sections
            .contains(&"Problem Definition"));
    }

    #[test]
    fn duplicate_headings_count_once() {
        let content = format!("{}\n# Contents\n# Contents", COMPLETE);
        assert!(validate_structure(&content).valid);
    }

    proptest! {
        // Missing sections are always a subset of the canonical list, in
        // canonical order, and validity is equivalent to the list being empty.
        #[test]
        fn missing_sections_are_ordered_subset(content in ".*") {
            let check = validate_structure(&content);
            prop_assert_eq!(check.valid, check.missing_sections.is_empty());

            let mut canonical = MANDATORY_SECTIONS.iter();
            for missing in &check.missing_sections {
                prop_assert!(canonical.any(|s| s == missing));
            }
        }

        // Appending every mandatory heading makes any document valid.
        #[test]
        fn appending_all_headings_validates(prefix in "[^#]*") {
            let mut content = prefix;
            for section in MANDATORY_SECTIONS {
                content.push_str(&format!("\n# {}", section));
            }
            prop_assert!(validate_structure(&content).valid);
        }
    }
}
