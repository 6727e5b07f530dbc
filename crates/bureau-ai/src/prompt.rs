use bureau_core::{BULLETIN_COUNT, topic_hint};

// ── Prompt template ──

const SATIRE_THEMES: &[&str] = &[
    "Overpromised deadlines that keep moving",
    "Mars colonization feasibility studies",
    "Underground transportation systems that lead nowhere",
    "Erratic social media behavior affecting markets",
    "Securities violations through post-based market manipulation",
    "Workplace conditions in manufacturing facilities",
    "Impossible technical promises about AI or autonomous systems",
    "Regulatory frameworks for flamethrowers sold as \"not flamethrowers\"",
    "Tunneling projects with implausible timelines",
    "Space debris from privately launched vehicles",
    "Mandatory timeframes for promised features that never arrive",
];

/// Build the generation prompt for one department.
pub fn build_prompt(department: &str) -> String {
    let themes = SATIRE_THEMES
        .iter()
        .map(|t| format!("- {t}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are an official government content writer for the {department}.\n\
         \n\
         Write {count} serious-sounding bullet points about the {department}'s latest initiatives or policies.\n\
         Each bullet point should:\n\
         1. Sound completely professional and bureaucratic with technical jargon\n\
         2. Subtly satirize a certain tech billionaire's habits without mentioning anyone by name\n\
         3. Be related to {topics}\n\
         4. Use proper government terminology and formal language\n\
         5. Include absurd specifics that sound plausible but are slightly ridiculous\n\
         6. Include at least one precise but meaningless statistic or measurement\n\
         7. Use unnecessarily complex acronyms that sound official\n\
         \n\
         Examples of subtle satire might reference:\n\
         {themes}\n\
         \n\
         Just provide the {count} bullet points with no introduction or other text. \
         Each bullet point should start with a hyphen and be on a new line.",
        count = BULLETIN_COUNT,
        topics = topic_hint(department),
    )
}
