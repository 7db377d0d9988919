//! Session state shared by the interactive shells
//!
//! Holds the two inputs, the latest result, and the single in-flight flag.
//! The flag can only be flipped through [`IdeaSession::begin`] and
//! [`IdeaSession::finish`], which keeps the one-request-at-a-time rule in one
//! place instead of scattered across key handlers.

use crate::prompt::IdeaRequest;

/// Everything a shell mutates between renders
#[derive(Debug, Default, Clone)]
pub struct IdeaSession {
    pub industry: String,
    pub trend: String,
    /// The last generation outcome, fallback strings included
    pub idea: Option<String>,
    generating: bool,
}

impl IdeaSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a request is outstanding
    pub fn is_generating(&self) -> bool {
        self.generating
    }

    /// True when a trigger would actually start a request
    pub fn can_generate(&self) -> bool {
        !self.generating && !self.industry.is_empty() && !self.trend.is_empty()
    }

    /// Start a generation: raises the in-flight flag and clears the previous
    /// idea. Returns `None` and changes nothing when either input is empty or
    /// a request is already outstanding.
    pub fn begin(&mut self) -> Option<IdeaRequest> {
        if self.generating {
            return None;
        }
        let request = IdeaRequest::new(self.industry.clone(), self.trend.clone())?;
        self.generating = true;
        self.idea = None;
        Some(request)
    }

    /// Settle the in-flight request with whatever text came back. Always
    /// clears the flag, fallback outcomes included.
    pub fn finish(&mut self, outcome: String) {
        self.idea = Some(outcome);
        self.generating = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> IdeaSession {
        let mut session = IdeaSession::new();
        session.industry = "Food".to_string();
        session.trend = "AI".to_string();
        session
    }

    #[test]
    fn test_empty_input_is_a_no_op() {
        let mut session = IdeaSession::new();
        assert!(session.begin().is_none());
        assert!(!session.is_generating());
        assert!(session.idea.is_none());

        session.industry = "Food".to_string();
        assert!(session.begin().is_none());
        assert!(!session.is_generating());
    }

    #[test]
    fn test_begin_raises_flag_and_clears_stale_idea() {
        let mut session = filled();
        session.idea = Some("old idea".to_string());

        let request = session.begin().unwrap();
        assert_eq!(request.industry, "Food");
        assert_eq!(request.trend, "AI");
        assert!(session.is_generating());
        assert!(session.idea.is_none());
    }

    #[test]
    fn test_second_trigger_while_outstanding_is_a_no_op() {
        let mut session = filled();
        assert!(session.begin().is_some());
        assert!(session.begin().is_none());
        assert!(session.is_generating());
    }

    #[test]
    fn test_finish_clears_flag_and_stores_outcome() {
        let mut session = filled();
        session.begin().unwrap();

        session.finish("## Idea".to_string());
        assert!(!session.is_generating());
        assert_eq!(session.idea.as_deref(), Some("## Idea"));

        // A new trigger works again after settling
        assert!(session.begin().is_some());
    }

    #[test]
    fn test_can_generate_tracks_inputs_and_flag() {
        let mut session = IdeaSession::new();
        assert!(!session.can_generate());

        session.industry = "Food".to_string();
        session.trend = "AI".to_string();
        assert!(session.can_generate());

        session.begin().unwrap();
        assert!(!session.can_generate());

        session.finish("done".to_string());
        assert!(session.can_generate());
    }
}
