use crate::header::{CommentHeader, ErrorHeader, Header, HeaderKind, MainHeader};
use crate::phase::PhaseData;

/// One seismic event: headers and phase rows, each in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NordicEvent {
    pub headers: Vec<Header>,
    pub phase_data: Vec<PhaseData>,
}

impl NordicEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, header: Header) -> Self {
        self.headers.push(header);
        self
    }

    pub fn with_phase(mut self, phase: PhaseData) -> Self {
        self.phase_data.push(phase);
        self
    }

    pub fn first_header_kind(&self) -> Option<HeaderKind> {
        self.headers.first().map(Header::kind)
    }

    pub fn main_headers(&self) -> impl Iterator<Item = &MainHeader> {
        self.headers.iter().filter_map(Header::as_main)
    }

    pub fn error_headers(&self) -> impl Iterator<Item = &ErrorHeader> {
        self.headers.iter().filter_map(Header::as_error)
    }

    pub fn comment_headers(&self) -> impl Iterator<Item = &CommentHeader> {
        self.headers.iter().filter_map(Header::as_comment)
    }

    /// The primary solution; phase arrival dates are relative to it.
    pub fn first_main(&self) -> Option<&MainHeader> {
        self.main_headers().next()
    }

    /// Uncertainties are always taken from the first error header.
    pub fn first_error(&self) -> Option<&ErrorHeader> {
        self.error_headers().next()
    }

    pub fn count_of(&self, kind: HeaderKind) -> usize {
        self.headers
            .iter()
            .filter(|header| header.kind() == kind)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_main_skips_other_kinds() {
        let event = NordicEvent::new()
            .with_header(Header::Comment(CommentHeader::default()))
            .with_header(Header::Main(MainHeader {
                hour: Some(4),
                ..MainHeader::default()
            }))
            .with_header(Header::Main(MainHeader {
                hour: Some(5),
                ..MainHeader::default()
            }));
        assert_eq!(event.first_header_kind(), Some(HeaderKind::Comment));
        assert_eq!(event.first_main().and_then(|main| main.hour), Some(4));
        assert_eq!(event.count_of(HeaderKind::Main), 2);
        assert!(event.first_error().is_none());
    }
}
