//! Test-only fixtures shared by unit, behaviour and property tests.

use std::collections::HashMap;

use crate::{Category, MatchReason, Profile, Scorer, Society, SocietyMatch};

/// The seed campus catalog: eight societies across two categories.
#[must_use]
pub fn campus_catalog() -> Vec<Society> {
    vec![
        Society::new(1, "Nebula", Category::Technical)
            .with_description(
                "Innovation & emerging technologies. Building the future one project at a time.",
            )
            .with_tags(["ai", "ml", "innovation", "tech", "project", "startup"])
            .with_skills(["Python", "Machine Learning", "React", "Cloud"])
            .with_roles(["Project Lead", "AI Researcher", "Developer", "Designer"]),
        Society::new(2, "Binary Club", Category::Technical)
            .with_description(
                "Competitive coding community. DSA, hackathons, and inter-college contests.",
            )
            .with_tags(["coding", "dsa", "competitive", "hackathon", "algorithms", "leetcode"])
            .with_skills(["C++", "Data Structures", "Algorithms", "Problem Solving"])
            .with_roles(["Competitive Coder", "Mentor", "Contest Organizer"]),
        Society::new(3, "CSSS", Category::Technical)
            .with_description(
                "Computer Science Student Society. Workshops, seminars, and career events.",
            )
            .with_tags(["career", "workshop", "seminar", "networking", "placement", "cs"])
            .with_skills(["Communication", "Event Management", "Research", "Networking"])
            .with_roles(["Event Coordinator", "Speaker Liaison", "Content Writer"]),
        Society::new(4, "GFG Student Chapter", Category::Technical)
            .with_description(
                "GeeksforGeeks campus chapter. Practice problems, mock interviews, and webinars.",
            )
            .with_tags(["gfg", "interview", "placement", "dsa", "coding", "practice"])
            .with_skills(["DSA", "System Design", "Interview Prep", "Teaching"])
            .with_roles(["Chapter Lead", "Content Creator", "Interview Coach"]),
        Society::new(5, "IOTUINO", Category::Technical)
            .with_description(
                "IoT & hardware innovation. Arduino projects, embedded systems, and robotics.",
            )
            .with_tags(["iot", "arduino", "hardware", "robotics", "electronics", "embedded"])
            .with_skills(["Arduino", "IoT", "Embedded C", "Circuitry", "3D Printing"])
            .with_roles(["Hardware Engineer", "Embedded Developer", "Robotics Lead"]),
        Society::new(6, "Art Society", Category::Art)
            .with_description(
                "Creative art exhibitions, live painting events, and collaborative murals.",
            )
            .with_tags(["art", "painting", "design", "creative", "illustration", "visual"])
            .with_skills(["Illustration", "Painting", "Digital Art", "Photoshop", "Figma"])
            .with_roles(["Curator", "Visual Artist", "Mural Lead", "Social Media Designer"]),
        Society::new(7, "Dance X", Category::Art)
            .with_description(
                "Contemporary and freestyle dance. Workshops, battles, and annual showcases.",
            )
            .with_tags(["dance", "contemporary", "freestyle", "performance", "choreography"])
            .with_skills(["Contemporary", "Hip-hop", "Freestyle", "Choreography", "Stage Presence"])
            .with_roles([
                "Choreographer",
                "Performer",
                "Workshop Instructor",
                "Stage Manager",
            ]),
        Society::new(8, "Dance Y", Category::Cultural)
            .with_description(
                "Classical and cultural dance forms. Preserving heritage through movement.",
            )
            .with_tags(["dance", "classical", "cultural", "heritage", "bharatanatyam", "folk"])
            .with_skills(["Bharatanatyam", "Kathak", "Folk Dance", "Cultural Research"])
            .with_roles(["Classical Dancer", "Cultural Ambassador", "Costume Designer"]),
    ]
}

/// Test `Scorer` returning a preset score per society id.
///
/// Unknown ids score zero. Each non-zero score carries a single interest
/// reason labelled with the society name.
#[derive(Debug, Clone, Default)]
pub struct FixedScorer {
    scores: HashMap<u64, u32>,
}

impl FixedScorer {
    /// Build a scorer from `(id, score)` pairs.
    #[must_use]
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u64, u32)>,
    {
        Self {
            scores: pairs.into_iter().collect(),
        }
    }
}

impl Scorer for FixedScorer {
    fn score(&self, society: &Society, _profile: &Profile) -> SocietyMatch {
        let score = self.scores.get(&society.id).copied().unwrap_or(0);
        if score == 0 {
            return SocietyMatch::none();
        }
        SocietyMatch {
            score,
            match_reasons: std::iter::once(MatchReason::Interest(society.name.clone())).collect(),
        }
    }
}
