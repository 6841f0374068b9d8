use leadgen_api::MAX_SUGGESTIONS;

use crate::enrich::TagPolicy;
use crate::error::LeadGenError;

pub const MAX_KEYWORD_LENGTH: usize = 100;
pub const MAX_CONCURRENCY: usize = 16;

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, LeadGenError> {
    if input.len() > max_len {
        return Err(LeadGenError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(LeadGenError::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate a search keyword: enforce length, strip control chars, trim.
pub fn validate_keyword(input: &str) -> Result<String, LeadGenError> {
    sanitize_text(input, MAX_KEYWORD_LENGTH)
}

/// Validate the result-count limit (must be 1..=25).
pub fn validate_limit(limit: usize) -> Result<usize, LeadGenError> {
    if !(1..=MAX_SUGGESTIONS).contains(&limit) {
        return Err(LeadGenError::InvalidInput(format!(
            "limit must be between 1 and {}",
            MAX_SUGGESTIONS
        )));
    }
    Ok(limit)
}

/// Validate the minimum score threshold (must be 0..=100).
pub fn validate_min_score(min_score: u8) -> Result<u8, LeadGenError> {
    if min_score > 100 {
        return Err(LeadGenError::InvalidInput(
            "min score must be between 0 and 100".to_string(),
        ));
    }
    Ok(min_score)
}

/// Validate the number of concurrent page fetches (must be 1..=16).
pub fn validate_concurrency(concurrency: usize) -> Result<usize, LeadGenError> {
    if !(1..=MAX_CONCURRENCY).contains(&concurrency) {
        return Err(LeadGenError::InvalidInput(format!(
            "concurrency must be between 1 and {}",
            MAX_CONCURRENCY
        )));
    }
    Ok(concurrency)
}

/// Validate a tag policy name: `all` or `first`, case-insensitive.
pub fn validate_tag_policy(input: &str) -> Result<TagPolicy, LeadGenError> {
    match input.trim().to_lowercase().as_str() {
        "all" | "all-matches" => Ok(TagPolicy::AllMatches),
        "first" | "first-match" => Ok(TagPolicy::FirstMatch),
        _ => Err(LeadGenError::InvalidInput(format!(
            "unknown tag policy '{}'. Valid values: all, first",
            input
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Keyword validation --

    #[test]
    fn keyword_trimmed() {
        assert_eq!(validate_keyword("  CRM startups ").unwrap(), "CRM startups");
    }

    #[test]
    fn keyword_strips_control_chars() {
        assert_eq!(validate_keyword("AI\tSaaS\n").unwrap(), "AISaaS");
    }

    #[test]
    fn keyword_empty() {
        assert!(validate_keyword("").is_err());
        assert!(validate_keyword("   ").is_err());
    }

    #[test]
    fn keyword_too_long() {
        let long = "a".repeat(MAX_KEYWORD_LENGTH + 1);
        assert!(validate_keyword(&long).is_err());
    }

    #[test]
    fn keyword_unicode_kept() {
        assert_eq!(validate_keyword("Zürich fintech").unwrap(), "Zürich fintech");
    }

    // -- Limit validation --

    #[test]
    fn limit_bounds() {
        assert!(validate_limit(0).is_err());
        assert_eq!(validate_limit(1).unwrap(), 1);
        assert_eq!(validate_limit(25).unwrap(), 25);
        assert!(validate_limit(26).is_err());
    }

    // -- Min score validation --

    #[test]
    fn min_score_bounds() {
        assert_eq!(validate_min_score(0).unwrap(), 0);
        assert_eq!(validate_min_score(95).unwrap(), 95);
        assert!(validate_min_score(101).is_err());
    }

    // -- Concurrency validation --

    #[test]
    fn concurrency_bounds() {
        assert!(validate_concurrency(0).is_err());
        assert_eq!(validate_concurrency(4).unwrap(), 4);
        assert!(validate_concurrency(17).is_err());
    }

    // -- Tag policy validation --

    #[test]
    fn tag_policy_values() {
        assert_eq!(validate_tag_policy("all").unwrap(), TagPolicy::AllMatches);
        assert_eq!(validate_tag_policy("FIRST").unwrap(), TagPolicy::FirstMatch);
        assert!(validate_tag_policy("some").is_err());
    }
}
