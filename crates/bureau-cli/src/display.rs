//! Terminal rendering for the department bulletin page.
//!
//! Everything here returns a `String` so the page can be printed, piped,
//! or asserted on without a terminal.

use bureau_core::{ContentDocument, DEPARTMENTS, DepartmentEntry};
use chrono::NaiveDate;

const WIDTH: usize = 72;

/// Icons cycled by bulletin position.
const ICONS: [&str; 5] = ["🔍", "📊", "🔐", "📝", "⚠️"];

const TITLE: &str = "OFFICIAL DEPARTMENT UPDATES";
const CLASSIFICATION: &str = "CLASSIFICATION: FOR UNOFFICIAL USE ONLY";

const RESTRICTED: &[&str] = &[
    "🔒 CLASSIFIED",
    "Updates for this department are currently restricted.",
    "Please check back later or contact your supervisor for clearance.",
];

const FOOTER: &[&str] = &[
    "UNOFFICIAL NON-GOVERNMENT INFORMATION PORTAL",
    "All updates are for entertainment purposes only. Classification: FUUO.",
    "Form ID: NGOV-UPD-2025-03 | Clearance: L3 | Retention: 7 years",
];

// ── Public API ──

/// Icon for the bulletin at `position`.
pub fn icon_for(position: usize) -> &'static str {
    ICONS[position % ICONS.len()]
}

/// The full page for `department`: header, panel, footer.
pub fn render_page(doc: &ContentDocument, department: &str) -> String {
    let mut out = String::with_capacity(2048);
    push_header(&mut out, doc.last_updated);
    push_department_header(&mut out, department);
    out.push_str(&render_panel(doc, department));
    push_footer(&mut out);
    out
}

/// Just the bulletin panel, or the restricted placeholder when the document
/// has no entry for `department`.
pub fn render_panel(doc: &ContentDocument, department: &str) -> String {
    match doc.department(department) {
        Some(entry) => render_bulletins(entry),
        None => render_restricted(),
    }
}

/// Numbered department list for interactive selection.
pub fn render_selection() -> String {
    let mut out = String::from("Select a Department\n");
    for (i, dept) in DEPARTMENTS.iter().enumerate() {
        out.push_str(&format!("  {:>2}. {}\n", i + 1, dept.name));
    }
    out
}

// ── Sections ──

fn push_header(out: &mut String, last_updated: NaiveDate) {
    out.push_str(&"=".repeat(WIDTH));
    out.push('\n');
    out.push_str(&format!("{:^WIDTH$}\n", format!("🦅  {TITLE}")));
    out.push_str(&"=".repeat(WIDTH));
    out.push('\n');
    out.push_str(&format!(
        "{:^WIDTH$}\n\n",
        format!("Last Updated: {}  [CLASSIFIED]", last_updated.format("%Y-%m-%d"))
    ));
}

fn push_department_header(out: &mut String, department: &str) {
    out.push_str(&format!("── {department} "));
    let used = department.chars().count() + 4;
    out.push_str(&"─".repeat(WIDTH.saturating_sub(used)));
    out.push_str("\n\n");
}

fn render_bulletins(entry: &DepartmentEntry) -> String {
    let mut out = String::new();
    out.push_str(CLASSIFICATION);
    out.push_str("\n\n");
    for (i, bulletin) in entry.bulletins.iter().enumerate() {
        out.push_str(&format!("  {} {}\n", icon_for(i), bulletin));
    }
    out
}

fn render_restricted() -> String {
    let mut out = String::new();
    for line in RESTRICTED {
        out.push_str(&format!("{line:^WIDTH$}\n"));
    }
    out
}

fn push_footer(out: &mut String) {
    out.push('\n');
    out.push_str(&"─".repeat(WIDTH));
    out.push('\n');
    out.push_str(&format!("{:^WIDTH$}\n", "🦅  ⚖️  🏛️"));
    for line in FOOTER {
        out.push_str(&format!("{line:^WIDTH$}\n"));
    }
}
