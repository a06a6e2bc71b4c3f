/// Descriptor for one phase of the capability roadmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoadmapPhase {
    pub id: u8,
    pub name: &'static str,
    pub description: &'static str,
}

/// The four roadmap phases, indexed by `ProgressRecord::current_phase`.
pub static ROADMAP_PHASES: [RoadmapPhase; 4] = [
    RoadmapPhase {
        id: 0,
        name: "Spark",
        description: "Discover AI possibilities and build awareness",
    },
    RoadmapPhase {
        id: 1,
        name: "Try",
        description: "Experiment with AI tools in a safe environment",
    },
    RoadmapPhase {
        id: 2,
        name: "Share",
        description: "Share learnings and use cases with your team",
    },
    RoadmapPhase {
        id: 3,
        name: "Scale",
        description: "Apply AI at scale to drive business value",
    },
];

/// Look up the descriptor for a phase number.
#[must_use]
pub fn roadmap_phase(phase: u8) -> Option<&'static RoadmapPhase> {
    ROADMAP_PHASES.get(usize::from(phase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_ids_match_their_index() {
        for (idx, phase) in ROADMAP_PHASES.iter().enumerate() {
            assert_eq!(usize::from(phase.id), idx);
        }
    }

    #[test]
    fn lookup_covers_the_valid_range() {
        assert_eq!(roadmap_phase(0).unwrap().name, "Spark");
        assert_eq!(roadmap_phase(3).unwrap().name, "Scale");
        assert!(roadmap_phase(4).is_none());
    }
}
