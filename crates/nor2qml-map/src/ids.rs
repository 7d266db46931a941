//! Resource identifiers.

/// Counter behind pick, amplitude and arrival identifiers.
///
/// One sequence is created per run and passed to every mapping call, so the
/// numbers keep increasing across all events converted from one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdSequence {
    current: u64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sequence whose next value is `next`.
    pub fn starting_at(next: u64) -> Self {
        Self {
            current: next.saturating_sub(1),
        }
    }

    /// Step to and return the next identifier number.
    pub fn advance(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    /// Last value handed out; 0 before the first [`advance`](Self::advance).
    pub fn current(&self) -> u64 {
        self.current
    }
}

/// `smi:` resource identifiers under one authority.
#[derive(Debug, Clone, Copy)]
pub struct PublicIds<'a> {
    authority: &'a str,
}

impl<'a> PublicIds<'a> {
    pub fn new(authority: &'a str) -> Self {
        Self { authority }
    }

    pub fn event_parameters(&self) -> String {
        format!("smi:{}/eventParameter", self.authority)
    }

    pub fn event(&self) -> String {
        format!("smi:{}/event/", self.authority)
    }

    pub fn origin(&self) -> String {
        self.path("origin")
    }

    pub fn magnitude(&self) -> String {
        self.path("magnitude")
    }

    pub fn focal_mechanism(&self) -> String {
        self.path("focalMech")
    }

    pub fn agency(&self) -> String {
        self.path("agency")
    }

    pub fn pick(&self, number: u64) -> String {
        format!("{}/{number}", self.path("pick"))
    }

    pub fn amplitude(&self, number: u64) -> String {
        format!("{}/{number}", self.path("amplitude"))
    }

    pub fn arrival(&self, number: u64) -> String {
        format!("{}/{number}", self.path("arrival"))
    }

    fn path(&self, resource: &str) -> String {
        format!("smi:{}/path/to/{resource}", self.authority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence() {
        let mut ids = IdSequence::new();
        assert_eq!(ids.current(), 0);
        assert_eq!(ids.advance(), 1);
        assert_eq!(ids.advance(), 2);
        assert_eq!(ids.current(), 2);

        let mut resumed = IdSequence::starting_at(10);
        assert_eq!(resumed.advance(), 10);
    }

    #[test]
    fn test_public_ids() {
        let ids = PublicIds::new("wh.atis.ids");
        assert_eq!(ids.event_parameters(), "smi:wh.atis.ids/eventParameter");
        assert_eq!(ids.event(), "smi:wh.atis.ids/event/");
        assert_eq!(ids.origin(), "smi:wh.atis.ids/path/to/origin");
        assert_eq!(ids.pick(3), "smi:wh.atis.ids/path/to/pick/3");
        assert_eq!(ids.arrival(3), "smi:wh.atis.ids/path/to/arrival/3");
    }
}
