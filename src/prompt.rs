//! Prompt assembly for idea generation

/// One generation request: the two user-supplied strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaRequest {
    pub industry: String,
    pub trend: String,
}

impl IdeaRequest {
    /// Build a request, refusing empty input. Only zero-length strings are
    /// rejected; whitespace-only input passes through.
    pub fn new(industry: impl Into<String>, trend: impl Into<String>) -> Option<Self> {
        let industry = industry.into();
        let trend = trend.into();
        if industry.is_empty() || trend.is_empty() {
            return None;
        }
        Some(Self { industry, trend })
    }

    /// Render the fixed prompt the model is asked to follow. The requested
    /// shape is what [`crate::format::format_idea`] knows how to classify.
    pub fn prompt(&self) -> String {
        format!(
            "Generate a startup idea and a one-liner pitch based on Industry: {} and Trend: {}. \
             Format the response as: \n\
             ## Startup Idea: [Idea Name]\n\
             Industry: [Industry]\n\
             Trend: [Trend]\n\
             Concept: [Brief concept description]\n\
             Key Features:\n\
             * [Feature 1]\n\
             * [Feature 2]\n\
             * [Feature 3]\n\
             Target Audience:\n\
             * [Audience 1]\n\
             * [Audience 2]\n\
             Revenue Model:\n\
             * [Revenue Model 1]\n\
             * [Revenue Model 2]\n\
             One-Liner Pitch:\n\
             [Short Pitch]",
            self.industry, self.trend
        )
    }
}
