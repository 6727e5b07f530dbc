//! The fixed department registry and each department's topic hint.

/// A department the portal reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Department {
    pub name: &'static str,
    /// Subject areas fed into the generation prompt.
    pub topics: &'static str,
}

const fn dept(name: &'static str, topics: &'static str) -> Department {
    Department { name, topics }
}

/// Hint used for names outside the registry.
const DEFAULT_TOPICS: &str = "government operations";

/// Every department, in selection-list order.
pub const DEPARTMENTS: [Department; 25] = [
    dept("Department of State", "international relations, diplomacy, foreign policy"),
    dept(
        "Department of the Treasury",
        "financial systems, currency, taxation, economic policy",
    ),
    dept("Department of Defense", "military operations, defense contracts, security"),
    dept("Department of Justice", "legal proceedings, investigations, regulations"),
    dept(
        "Department of the Interior",
        "public lands, natural resources, conservation",
    ),
    dept("Department of Agriculture", "farming, food production, rural development"),
    dept("Department of Commerce", "business, trade, economic growth"),
    dept("Department of Labor", "employment, workforce, labor conditions"),
    dept(
        "Department of Health and Human Services",
        "healthcare, public health, medical research",
    ),
    dept(
        "Department of Housing and Urban Development",
        "housing, urban planning, community development",
    ),
    dept(
        "Department of Transportation",
        "transportation systems, infrastructure, traffic",
    ),
    dept("Department of Energy", "energy production, power systems, energy research"),
    dept("Department of Education", "education systems, schools, learning initiatives"),
    dept("Department of Veterans Affairs", "veteran benefits, healthcare for veterans"),
    dept("Department of Homeland Security", "national security, emergency management"),
    dept(
        "Environmental Protection Agency",
        "environmental protection, pollution, climate",
    ),
    dept(
        "Federal Communications Commission",
        "telecommunications, internet, broadcasting",
    ),
    dept(
        "Securities and Exchange Commission",
        "financial markets, investments, securities",
    ),
    dept(
        "National Aeronautics and Space Administration",
        "space exploration, aeronautics, research",
    ),
    dept(
        "Federal Trade Commission",
        "consumer protection, competition, business practices",
    ),
    dept(
        "Small Business Administration",
        "small businesses, entrepreneurship, startups",
    ),
    dept("Nuclear Regulatory Commission", "nuclear energy, radiation safety"),
    dept("Federal Reserve System", "monetary policy, banking system, interest rates"),
    dept(
        "Consumer Financial Protection Bureau",
        "consumer financial products, loans, credit",
    ),
    dept("National Science Foundation", "scientific research, funding, innovation"),
];

/// Topic hint for `name`, or a generic one for unknown departments.
pub fn topic_hint(name: &str) -> &'static str {
    DEPARTMENTS
        .iter()
        .find(|d| d.name == name)
        .map(|d| d.topics)
        .unwrap_or(DEFAULT_TOPICS)
}

/// Resolve a user selection: a 1-based list number or a case-insensitive name.
pub fn resolve(selection: &str) -> Option<&'static Department> {
    let selection = selection.trim();
    if let Ok(n) = selection.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| DEPARTMENTS.get(i));
    }
    DEPARTMENTS
        .iter()
        .find(|d| d.name.eq_ignore_ascii_case(selection))
}
