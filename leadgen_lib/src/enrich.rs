//! Heuristic lead enrichment: ICP tags, guessed email, score and outreach text.
//!
//! Everything here is illustrative. Tags come from keyword substrings, the
//! email is a fixed pattern that is never verified, and the score is a fixed
//! additive rule rather than a model of real business signals.

use serde::Deserialize;
use thiserror::Error;

use crate::extract::NO_DESCRIPTION;

pub const BASE_SCORE: u8 = 70;
pub const MAX_SCORE: u8 = 95;

/// Tag assigned when no ICP rule matches.
pub const DEFAULT_TAG: &str = "SaaS";
/// Tag that earns the AI score bonus.
pub const AI_TAG: &str = "AI";

const PITCH_SNIPPET_CHARS: usize = 70;
const EMAIL_SNIPPET_CHARS: usize = 80;

/// Error types for ICP rule loading.
#[derive(Error, Debug)]
pub enum IcpRuleError {
    #[error("Failed to parse ICP rules YAML: {0}")]
    YamlParse(#[from] serde_yml::Error),
    #[error("ICP rule '{0}' has no keywords")]
    EmptyRule(String),
    #[error("Duplicate ICP tag: {0}")]
    DuplicateTag(String),
}

/// Top-level structure for the ICP rules YAML file.
#[derive(Deserialize, Debug)]
pub struct IcpRuleFile {
    pub rules: Vec<IcpRule>,
}

/// A tag and the description keywords that trigger it.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IcpRule {
    pub tag: String,
    pub keywords: Vec<String>,
}

impl IcpRule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|kw| lowered.contains(kw.as_str()))
    }
}

/// Whether a description may carry several ICP tags or only the first match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TagPolicy {
    /// Every matching rule contributes its tag, in rule order.
    #[default]
    AllMatches,
    /// Only the highest-priority matching rule contributes.
    FirstMatch,
}

/// Parse and validate ICP rules from YAML content.
///
/// Keywords are lower-cased so matching against a lower-cased description
/// is case-insensitive.
pub fn parse_icp_rules(yaml_content: &str) -> Result<Vec<IcpRule>, IcpRuleError> {
    let file: IcpRuleFile = serde_yml::from_str(yaml_content)?;

    let mut validated: Vec<IcpRule> = Vec::with_capacity(file.rules.len());
    for rule in file.rules {
        if validated.iter().any(|r| r.tag == rule.tag) {
            return Err(IcpRuleError::DuplicateTag(rule.tag));
        }
        let keywords: Vec<String> = rule
            .keywords
            .iter()
            .map(|kw| kw.trim().to_lowercase())
            .filter(|kw| !kw.is_empty())
            .collect();
        if keywords.is_empty() {
            return Err(IcpRuleError::EmptyRule(rule.tag));
        }
        validated.push(IcpRule {
            tag: rule.tag,
            keywords,
        });
    }
    Ok(validated)
}

/// Load the ICP rules embedded at compile time.
pub fn load_icp_rules() -> Result<Vec<IcpRule>, IcpRuleError> {
    let yaml_content = include_str!("../../seed_data/icp_rules.yml");
    parse_icp_rules(yaml_content)
}

/// Derives ICP tags from a description.
///
/// The sentinel description never matches anything and yields the default tag.
pub fn tags_for(description: &str, rules: &[IcpRule], policy: TagPolicy) -> Vec<String> {
    if description == NO_DESCRIPTION {
        return vec![DEFAULT_TAG.to_string()];
    }
    let lowered = description.to_lowercase();
    let mut matched = rules.iter().filter(|rule| rule.matches(&lowered));

    let tags: Vec<String> = match policy {
        TagPolicy::AllMatches => matched.map(|rule| rule.tag.clone()).collect(),
        TagPolicy::FirstMatch => matched.next().map(|rule| rule.tag.clone()).into_iter().collect(),
    };

    if tags.is_empty() {
        vec![DEFAULT_TAG.to_string()]
    } else {
        tags
    }
}

/// Additive evidence score in `[BASE_SCORE, MAX_SCORE]`.
///
/// +10 for a real description, +5 for a non-`support` mailbox, +5 for a
/// logo, +3 for the AI tag.
pub fn score_for(description: &str, email: &str, logo: Option<&str>, tags: &[String]) -> u8 {
    let mut score = BASE_SCORE;
    if description != NO_DESCRIPTION {
        score += 10;
    }
    let local_part = email.split('@').next().unwrap_or_default();
    if !local_part.to_lowercase().starts_with("support") {
        score += 5;
    }
    if logo.is_some_and(|l| !l.trim().is_empty()) {
        score += 5;
    }
    if tags.iter().any(|t| t == AI_TAG) {
        score += 3;
    }
    score.clamp(BASE_SCORE, MAX_SCORE)
}

/// Best-guess contact address. Never checked against a real mailbox.
pub fn guess_email(domain: &str) -> String {
    format!("info@{}", domain.trim())
}

/// One-sentence outreach pitch.
pub fn pitch_for(company: &str, domain: &str, description: &str) -> String {
    if description == NO_DESCRIPTION {
        return format!(
            "Hi {company} team, I'd love to connect and learn more about what you're building at {domain}."
        );
    }
    format!(
        "Hi {company} team, I noticed you describe yourselves as \"{}\" and think there's a strong fit to help you grow.",
        truncate_chars(description, PITCH_SNIPPET_CHARS)
    )
}

/// Multi-line cold email addressed to the guessed contact address.
pub fn cold_email_for(company: &str, domain: &str, description: &str, email: &str) -> String {
    let mut body = format!(
        "To: {email}\n\
         Subject: Quick idea for {company}\n\
         \n\
         Hi {company} team,\n\
         \n\
         I came across {domain} while researching teams in your space and wanted to reach out."
    );
    if description != NO_DESCRIPTION {
        body.push_str(&format!(
            "\nI was especially interested to read: \"{}\".",
            truncate_chars(description, EMAIL_SNIPPET_CHARS)
        ));
    }
    body.push_str(
        "\n\nWe help companies like yours turn interest into qualified pipeline without adding headcount.\n\
         Would you be open to a 15-minute call next week?\n\
         \n\
         Best regards,\n\
         The LeadGen team",
    );
    body
}

/// First `max_chars` characters of `text`, with `...` appended when cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
