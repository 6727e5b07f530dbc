//! Bulletin normalisation and the fixed fallback template.
//!
//! Generated text arrives as free-form lines. [`normalize_bulletins`] turns it
//! into exactly [`BULLETIN_COUNT`](crate::BULLETIN_COUNT) display strings:
//!
//! 1. Split on newlines, drop lines that are blank after trimming
//! 2. Strip one leading `-` marker and the whitespace around it
//! 3. Pad with [`FILLER_BULLETIN`] up to five, or keep only the first five

use crate::content::Bulletins;

/// Appended when generation yields fewer than five usable lines.
pub const FILLER_BULLETIN: &str =
    "Further updates will be provided as information becomes available.";

/// Normalise generated text into exactly five bulletins.
pub fn normalize_bulletins(text: &str) -> Bulletins {
    let mut lines = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(strip_marker);
    std::array::from_fn(|_| {
        lines
            .next()
            .map(str::to_string)
            .unwrap_or_else(|| FILLER_BULLETIN.to_string())
    })
}

fn strip_marker(line: &str) -> &str {
    match line.strip_prefix('-') {
        Some(rest) => rest.trim(),
        None => line,
    }
}

/// The deterministic bulletins used when generation fails for `department`.
pub fn fallback_bulletins(department: &str) -> Bulletins {
    [
        format!("The {department} is currently reviewing its communication protocols."),
        "Recent developments have prompted a thorough assessment of our operational guidelines."
            .to_string(),
        "Our department continues to monitor situations that may affect policy implementations."
            .to_string(),
        "Stakeholders are advised to consult the department website for the most up-to-date information."
            .to_string(),
        format!(
            "The {department} remains committed to transparency and accountability in all proceedings."
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BULLETIN_COUNT;

    #[test]
    fn strips_hyphen_marker() {
        let out = normalize_bulletins("- Example text\n-   Spaced out  \n-Tight");
        assert_eq!(out[0], "Example text");
        assert_eq!(out[1], "Spaced out");
        assert_eq!(out[2], "Tight");
    }

    #[test]
    fn unmarked_lines_kept_after_trim() {
        let out = normalize_bulletins("  Plain statement.  \n1. Numbered item");
        assert_eq!(out[0], "Plain statement.");
        assert_eq!(out[1], "1. Numbered item");
    }

    #[test]
    fn only_one_marker_is_stripped() {
        let out = normalize_bulletins("-- double dash");
        assert_eq!(out[0], "- double dash");
    }

    #[test]
    fn pads_short_output_with_filler() {
        let out = normalize_bulletins("- one\n\n   \n- two\n");
        assert_eq!(
            out,
            [
                "one".to_string(),
                "two".to_string(),
                FILLER_BULLETIN.to_string(),
                FILLER_BULLETIN.to_string(),
                FILLER_BULLETIN.to_string(),
            ]
        );
    }

    #[test]
    fn blank_output_is_all_filler() {
        let out = normalize_bulletins("\n  \n");
        assert!(out.iter().all(|b| b == FILLER_BULLETIN));
    }

    #[test]
    fn truncates_long_output_in_order() {
        let text = (1..=8)
            .map(|i| format!("- item {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let out = normalize_bulletins(&text);
        assert_eq!(out.len(), BULLETIN_COUNT);
        assert_eq!(out[0], "item 1");
        assert_eq!(out[4], "item 5");
    }

    #[test]
    fn handles_crlf_line_endings() {
        let out = normalize_bulletins("- a\r\n- b\r\n");
        assert_eq!(out[0], "a");
        assert_eq!(out[1], "b");
    }

    #[test]
    fn fallback_interpolates_department() {
        let out = fallback_bulletins("Department of Energy");
        assert_eq!(
            out[0],
            "The Department of Energy is currently reviewing its communication protocols."
        );
        assert_eq!(
            out[4],
            "The Department of Energy remains committed to transparency and accountability in all proceedings."
        );
        assert_eq!(fallback_bulletins("Department of Energy"), out);
    }
}
