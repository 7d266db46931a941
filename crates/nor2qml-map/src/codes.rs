//! Nordic code tables and their QuakeML equivalents.

/// QuakeML event type for a Nordic event id. Unknown and absent ids are
/// "not reported".
pub fn event_type(id: Option<char>) -> &'static str {
    match id {
        Some('*' | 'Q') => "earthquake",
        Some('E' | 'P') => "explosion",
        Some('I') => "induced or triggered event",
        Some('V') => "volcanic eruption",
        Some('X') => "landslide",
        _ => "not reported",
    }
}

/// Pick polarity for a first-motion code.
pub fn polarity(first_motion: char) -> Option<&'static str> {
    match first_motion {
        'C' => Some("positive"),
        'D' => Some("negative"),
        '+' | '-' => Some("undecidable"),
        _ => None,
    }
}

pub fn magnitude_type(code: char) -> Option<&'static str> {
    match code {
        'L' => Some("ML"),
        'C' => Some("Mc"),
        'B' => Some("mb"),
        'S' => Some("Ms"),
        'W' => Some("MW"),
        _ => None,
    }
}

/// Band and instrument prefix of a SEED channel code.
pub fn channel_prefix(instrument: char) -> Option<&'static str> {
    match instrument {
        'S' => Some("SH"),
        'B' => Some("BH"),
        'L' => Some("LH"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_types() {
        assert_eq!(event_type(Some('E')), "explosion");
        assert_eq!(event_type(Some('Q')), "earthquake");
        assert_eq!(event_type(Some('A')), "not reported");
        assert_eq!(event_type(Some('Z')), "not reported");
        assert_eq!(event_type(None), "not reported");
    }

    #[test]
    fn test_small_tables() {
        assert_eq!(polarity('-'), Some("undecidable"));
        assert_eq!(polarity('U'), None);
        assert_eq!(magnitude_type('W'), Some("MW"));
        assert_eq!(channel_prefix('B'), Some("BH"));
        assert_eq!(channel_prefix('H'), None);
    }
}
