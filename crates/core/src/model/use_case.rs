use thiserror::Error;

use crate::model::UseCaseId;

/// A shared testimonial entry on the use case board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UseCase {
    id: UseCaseId,
    title: String,
    description: String,
    team: String,
    impact: String,
    author: String,
    tags: Vec<String>,
}

impl UseCase {
    #[must_use]
    pub fn new(
        id: UseCaseId,
        title: impl Into<String>,
        description: impl Into<String>,
        team: impl Into<String>,
        impact: impl Into<String>,
        author: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            team: team.into(),
            impact: impact.into(),
            author: author.into(),
            tags,
        }
    }

    #[must_use]
    pub fn id(&self) -> UseCaseId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn team(&self) -> &str {
        &self.team
    }

    #[must_use]
    pub fn impact(&self) -> &str {
        &self.impact
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UseCaseDraftError {
    #[error("use case title cannot be empty")]
    EmptyTitle,
    #[error("use case team cannot be empty")]
    EmptyTeam,
    #[error("use case description cannot be empty")]
    EmptyDescription,
    #[error("use case impact cannot be empty")]
    EmptyImpact,
}

/// The four form fields a submitter fills in.
///
/// Validation happens at the form boundary, before submission; the board
/// itself accepts whatever draft it is handed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UseCaseDraft {
    pub title: String,
    pub team: String,
    pub description: String,
    pub impact: String,
}

impl UseCaseDraft {
    /// Form-level check that all four fields are filled in.
    ///
    /// # Errors
    ///
    /// Returns the first `UseCaseDraftError` for a field that is empty
    /// after trimming.
    pub fn validate(&self) -> Result<(), UseCaseDraftError> {
        if self.title.trim().is_empty() {
            return Err(UseCaseDraftError::EmptyTitle);
        }
        if self.team.trim().is_empty() {
            return Err(UseCaseDraftError::EmptyTeam);
        }
        if self.description.trim().is_empty() {
            return Err(UseCaseDraftError::EmptyDescription);
        }
        if self.impact.trim().is_empty() {
            return Err(UseCaseDraftError::EmptyImpact);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> UseCaseDraft {
        UseCaseDraft {
            title: "Automated Email Responses".into(),
            team: "IT".into(),
            description: "Drafting first-pass replies with AI.".into(),
            impact: "50% time saved".into(),
        }
    }

    #[test]
    fn complete_draft_validates() {
        assert!(full_draft().validate().is_ok());
    }

    #[test]
    fn each_field_is_required() {
        let mut draft = full_draft();
        draft.title = "  ".into();
        assert_eq!(draft.validate(), Err(UseCaseDraftError::EmptyTitle));

        let mut draft = full_draft();
        draft.team = String::new();
        assert_eq!(draft.validate(), Err(UseCaseDraftError::EmptyTeam));

        let mut draft = full_draft();
        draft.description = "\n".into();
        assert_eq!(draft.validate(), Err(UseCaseDraftError::EmptyDescription));

        let mut draft = full_draft();
        draft.impact = String::new();
        assert_eq!(draft.validate(), Err(UseCaseDraftError::EmptyImpact));
    }
}
