//! Trigger detection and payload extraction for polled comments.

/// Classification of a comment body against the configured triggers.
///
/// Exhaustive so the per-comment handler covers every outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerScan {
    /// The body contains none of the trigger substrings.
    NotRelevant,
    /// The comment was written by the bot's own account.
    SelfAuthored,
    /// A trigger matched but no quoted payload was found.
    MissingPayload,
    /// A trigger matched; the extracted artist-name payload (may be empty).
    Payload(String),
}

/// Scan a comment body for a trigger and extract the quoted payload.
///
/// Triggers are matched case-sensitively as exact substrings. The payload is
/// the text between the first and second `"` in the body; only the first
/// quoted segment is ever used. The author comparison is case-insensitive,
/// and a self-authored comment is never treated as a trigger regardless of
/// content.
pub fn scan(body: &str, author: &str, bot_username: &str, triggers: &[String]) -> TriggerScan {
    if author.eq_ignore_ascii_case(bot_username) {
        return TriggerScan::SelfAuthored;
    }

    if !triggers.iter().any(|t| body.contains(t.as_str())) {
        return TriggerScan::NotRelevant;
    }

    let mut segments = body.split('"');
    // The segment before the first quote is discarded.
    segments.next();

    match segments.next() {
        Some(payload) => TriggerScan::Payload(payload.to_string()),
        None => TriggerScan::MissingPayload,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triggers() -> Vec<String> {
        vec!["!cb".to_string(), "!concertbot".to_string(), "!livemusic".to_string()]
    }

    #[test]
    fn extracts_first_quoted_payload() {
        let result = scan("!cb \"Radiohead\"", "someone", "concert_bot", &triggers());
        assert_eq!(result, TriggerScan::Payload("Radiohead".to_string()));
    }

    #[test]
    fn only_first_quoted_segment_is_used() {
        let result = scan("!cb \"Muse\" or maybe \"Radiohead\"", "someone", "concert_bot", &triggers());
        assert_eq!(result, TriggerScan::Payload("Muse".to_string()));
    }

    #[test]
    fn trigger_match_is_case_sensitive() {
        assert_eq!(scan("!CB \"Muse\"", "someone", "concert_bot", &triggers()), TriggerScan::NotRelevant);
        assert_eq!(scan("nothing to see here", "someone", "concert_bot", &triggers()), TriggerScan::NotRelevant);
    }

    #[test]
    fn any_configured_trigger_matches() {
        assert!(matches!(
            scan("hey !livemusic \"Muse\"", "someone", "concert_bot", &triggers()),
            TriggerScan::Payload(_)
        ));
    }

    #[test]
    fn missing_quotes_is_flagged() {
        assert_eq!(scan("!cb", "someone", "concert_bot", &triggers()), TriggerScan::MissingPayload);
    }

    #[test]
    fn empty_quoted_payload_passes_through() {
        // Rejected downstream by the concert client as an invalid query.
        assert_eq!(scan("!cb \"\"", "someone", "concert_bot", &triggers()), TriggerScan::Payload(String::new()));
    }

    #[test]
    fn self_authored_is_skipped_regardless_of_content() {
        assert_eq!(scan("!cb \"Muse\"", "Concert_Bot", "concert_bot", &triggers()), TriggerScan::SelfAuthored);
        assert_eq!(scan("no trigger at all", "concert_bot", "concert_bot", &triggers()), TriggerScan::SelfAuthored);
    }
}
