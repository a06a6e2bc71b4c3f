//! Pure lookup tables for the quest pathway, starter prompts, and the
//! seed entries on the use case board.
//!
//! Everything here is deterministic for a given role+goal pair and is
//! re-derived on every call; nothing is persisted.

use crate::model::{
    LearningResource, Pathway, Quest, QuestId, QuestKind, UseCase, UseCaseId,
};

const LEARN_RESOURCE_URL: &str = "https://www.youtube.com/watch?v=aircAruvnKk";
const LEARN_RESOURCE_KIND: &str = "Video (10 min)";

/// Fallback starter prompt when neither the role nor the goal has one.
pub const DEFAULT_STARTER_PROMPT: &str = "How can AI help me in my work?";

/// Display label for a role. Unknown roles fall back to the raw input.
#[must_use]
pub fn role_label(role: &str) -> &str {
    match role {
        "hr" => "HR",
        "sales" => "Sales",
        "underwriting" => "Underwriting",
        "leader" => "Leadership",
        "it" => "IT",
        "customer-service" => "Customer Service",
        "marketing" => "Marketing",
        "finance" => "Finance",
        other => other,
    }
}

/// Display label for a learning goal. Unknown goals fall back to the raw
/// input.
#[must_use]
pub fn goal_label(goal: &str) -> &str {
    match goal {
        "automate" => "automation",
        "write" => "writing",
        "analyze" => "analysis",
        "basics" => "AI fundamentals",
        "customer" => "customer engagement",
        "decision" => "decision-making",
        "creative" => "creativity",
        "research" => "research",
        other => other,
    }
}

/// Build the three-quest pathway for a role+goal selection.
///
/// Quest 1 is always a `Learn` quest carrying an external resource,
/// quest 2 a `Try` quest, quest 3 a `Share` quest.
#[must_use]
pub fn quests_for(role: &str, goal: &str) -> Pathway {
    let role_label = role_label(role);
    let goal_label = goal_label(goal);

    Pathway::new(vec![
        Quest::new(
            QuestId::new(1),
            QuestKind::Learn,
            "Learn: Foundations",
            format!("Discover how AI can enhance {goal_label} in {role_label}"),
            "Watch Video",
            Some(LearningResource {
                title: format!("AI for {role_label}: {goal_label}"),
                url: LEARN_RESOURCE_URL.to_string(),
                kind: LEARN_RESOURCE_KIND.to_string(),
            }),
        ),
        Quest::new(
            QuestId::new(2),
            QuestKind::Try,
            "Try: Hands-On Practice",
            format!("Experiment with AI prompts tailored for {goal_label}"),
            "Open Playground",
            None,
        ),
        Quest::new(
            QuestId::new(3),
            QuestKind::Share,
            "Share: Your Experience",
            format!("Share how you're using AI for {goal_label} in {role_label}"),
            "Submit Use Case",
            None,
        ),
    ])
}

/// Suggested playground prompt for a role+goal pair.
///
/// Resolution order: the exact role+goal entry, then the role's default,
/// then `DEFAULT_STARTER_PROMPT`.
#[must_use]
pub fn starter_prompt(role: &str, goal: &str) -> &'static str {
    let role_default = match role {
        "hr" => Some("How can AI help me improve HR processes?"),
        "sales" => Some("How can I use AI to improve my sales conversations?"),
        "underwriting" => Some("How can AI assist in the underwriting process?"),
        "leader" => Some("How can I use AI to become a better leader?"),
        _ => None,
    };

    let exact = match (role, goal) {
        ("hr", "automate") => Some(
            "Help me draft a job description for a Senior Software Engineer position that emphasizes our company culture and benefits.",
        ),
        ("hr", "write") => Some(
            "Write a professional email to announce our new remote work policy to all employees.",
        ),
        ("hr", "basics") => {
            Some("Explain how AI can help HR departments work more efficiently.")
        }
        ("sales", "automate") => Some(
            "Create a follow-up email template for prospects who attended our product demo.",
        ),
        ("sales", "write") => Some(
            "Draft a compelling value proposition for our life insurance products targeting young families.",
        ),
        ("sales", "customer") => Some(
            "Suggest 5 questions I should ask to better understand a client's insurance needs.",
        ),
        ("underwriting", "analyze") => Some(
            "Summarize the key risk factors I should consider when reviewing a large commercial policy application.",
        ),
        ("underwriting", "decision") => Some(
            "What questions should I ask to assess risk for a high-net-worth individual life insurance application?",
        ),
        ("underwriting", "automate") => Some(
            "Help me create a checklist for reviewing health insurance applications.",
        ),
        ("leader", "decision") => Some(
            "Help me structure a team meeting agenda to discuss our Q4 goals and challenges.",
        ),
        ("leader", "write") => Some(
            "Draft talking points for a 1-on-1 meeting with an underperforming team member.",
        ),
        ("leader", "basics") => Some(
            "What are the key ways leaders can leverage AI to improve team productivity?",
        ),
        _ => None,
    };

    exact.or(role_default).unwrap_or(DEFAULT_STARTER_PROMPT)
}

/// The five fixed seed entries on the use case board.
#[must_use]
pub fn seed_use_cases() -> Vec<UseCase> {
    vec![
        UseCase::new(
            UseCaseId::new(1),
            "Automated Policy Document Drafting",
            "Used AI to draft initial versions of HR policy documents, reducing drafting time by 60%. The AI provides a solid first draft that we then review and customize.",
            "HR",
            "60% time saved",
            "Sarah M.",
            vec!["automation".into(), "writing".into(), "efficiency".into()],
        ),
        UseCase::new(
            UseCaseId::new(2),
            "Personalized Client Follow-ups",
            "Created templates using AI for personalized follow-up emails after client meetings. Each email is tailored to the specific discussion points, improving response rates.",
            "Sales",
            "35% higher response rate",
            "James T.",
            vec![
                "customer engagement".into(),
                "writing".into(),
                "sales".into(),
            ],
        ),
        UseCase::new(
            UseCaseId::new(3),
            "Risk Assessment Summaries",
            "Using AI to summarize lengthy medical reports and financial documents for underwriting review. Helps identify key risk factors more quickly.",
            "Underwriting",
            "45% faster reviews",
            "Maria L.",
            vec![
                "analysis".into(),
                "efficiency".into(),
                "decision-making".into(),
            ],
        ),
        UseCase::new(
            UseCaseId::new(4),
            "Meeting Notes & Action Items",
            "Implemented AI-assisted meeting summaries that automatically generate action items and key decisions. Team members can focus on discussion rather than note-taking.",
            "Leadership",
            "Better meeting outcomes",
            "David K.",
            vec![
                "productivity".into(),
                "collaboration".into(),
                "writing".into(),
            ],
        ),
        UseCase::new(
            UseCaseId::new(5),
            "Customer Service Response Templates",
            "Built a library of AI-generated response templates for common customer inquiries. Representatives personalize them for each situation, ensuring faster and more consistent service.",
            "Customer Service",
            "30% faster response time",
            "Linda R.",
            vec![
                "customer engagement".into(),
                "efficiency".into(),
                "writing".into(),
            ],
        ),
    ]
}
