/// A value/label pair offered by the role and goal pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// The eight roles a user can pick from.
pub const ROLE_OPTIONS: [SelectionOption; 8] = [
    SelectionOption { value: "hr", label: "HR Professional" },
    SelectionOption { value: "sales", label: "Sales Representative" },
    SelectionOption { value: "underwriting", label: "Underwriter" },
    SelectionOption { value: "leader", label: "Team Leader / Manager" },
    SelectionOption { value: "it", label: "IT Professional" },
    SelectionOption { value: "customer-service", label: "Customer Service" },
    SelectionOption { value: "marketing", label: "Marketing" },
    SelectionOption { value: "finance", label: "Finance / Actuarial" },
];

/// The eight learning goals a user can pick from.
pub const GOAL_OPTIONS: [SelectionOption; 8] = [
    SelectionOption { value: "automate", label: "Automate repetitive tasks" },
    SelectionOption { value: "write", label: "Write better and faster" },
    SelectionOption { value: "analyze", label: "Analyze data more effectively" },
    SelectionOption { value: "basics", label: "Explore AI basics" },
    SelectionOption { value: "customer", label: "Improve customer interactions" },
    SelectionOption { value: "decision", label: "Make better decisions" },
    SelectionOption { value: "creative", label: "Boost creative work" },
    SelectionOption { value: "research", label: "Research and learn faster" },
];

/// The user's role and learning goal. Both start empty; pathway features
/// stay inactive until both are picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSelection {
    role: String,
    goal: String,
}

impl UserSelection {
    #[must_use]
    pub fn new(role: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            goal: goal.into(),
        }
    }

    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    #[must_use]
    pub fn goal(&self) -> &str {
        &self.goal
    }

    pub fn set_role(&mut self, role: impl Into<String>) {
        self.role = role.into();
    }

    pub fn set_goal(&mut self, goal: impl Into<String>) {
        self.goal = goal.into();
    }

    /// True once both role and goal are picked.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        !self.role.is_empty() && !self.goal.is_empty()
    }
}
