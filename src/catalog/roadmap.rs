//! Learning tracks and their milestones for the career map.

use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TrackId {
    JobReady,
    FutureReady,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub timeframe: &'static str,
    pub skills: &'static [&'static str],
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Track {
    pub id: TrackId,
    pub title: &'static str,
    pub timeline: &'static str,
    pub difficulty: Difficulty,
    pub skills: &'static [&'static str],
    pub future_proof: u8,
    pub market_demand: u8,
    pub milestones: &'static [Milestone],
}

impl Track {
    pub fn completed_milestones(&self) -> usize {
        self.milestones.iter().filter(|m| m.completed).count()
    }

    /// Completed share of milestones, `0.0..=100.0`.
    pub fn progress_percent(&self) -> f64 {
        if self.milestones.is_empty() {
            return 0.0;
        }
        self.completed_milestones() as f64 / self.milestones.len() as f64 * 100.0
    }

    /// Index of the milestone being worked on: the first incomplete one.
    pub fn current_milestone(&self) -> Option<usize> {
        self.milestones.iter().position(|m| !m.completed)
    }
}

pub static TRACKS: [Track; 2] = [
    Track {
        id: TrackId::JobReady,
        title: "Job-Ready Track",
        timeline: "6-12 months",
        difficulty: Difficulty::Medium,
        skills: &["React", "Node.js", "Database", "Git", "Testing"],
        future_proof: 75,
        market_demand: 85,
        milestones: &[
            Milestone {
                id: "1",
                title: "Foundation Skills",
                description: "Master core programming concepts and tools",
                timeframe: "Month 1-2",
                skills: &["HTML/CSS", "JavaScript", "Git"],
                completed: true,
            },
            Milestone {
                id: "2",
                title: "Framework Mastery",
                description: "Build modern web applications with React",
                timeframe: "Month 3-4",
                skills: &["React", "State Management", "API Integration"],
                completed: true,
            },
            Milestone {
                id: "3",
                title: "Backend Development",
                description: "Create server-side applications and databases",
                timeframe: "Month 5-6",
                skills: &["Node.js", "Express", "MongoDB", "Authentication"],
                completed: false,
            },
            Milestone {
                id: "4",
                title: "Portfolio & Job Search",
                description: "Build impressive projects and land your first role",
                timeframe: "Month 7-8",
                skills: &["Portfolio", "Interview Skills", "Networking"],
                completed: false,
            },
        ],
    },
    Track {
        id: TrackId::FutureReady,
        title: "Future-Ready Track",
        timeline: "12-24 months",
        difficulty: Difficulty::Hard,
        skills: &["AI/ML", "Cloud", "Blockchain", "IoT", "Cybersecurity"],
        future_proof: 95,
        market_demand: 70,
        milestones: &[
            Milestone {
                id: "1",
                title: "AI Fundamentals",
                description: "Understanding machine learning and AI concepts",
                timeframe: "Month 1-3",
                skills: &["Python", "Statistics", "ML Algorithms"],
                completed: false,
            },
            Milestone {
                id: "2",
                title: "Deep Learning",
                description: "Neural networks and advanced AI techniques",
                timeframe: "Month 4-8",
                skills: &["TensorFlow", "PyTorch", "Computer Vision", "NLP"],
                completed: false,
            },
            Milestone {
                id: "3",
                title: "Cloud & Infrastructure",
                description: "Scalable AI systems and cloud deployment",
                timeframe: "Month 9-12",
                skills: &["AWS/GCP", "Docker", "Kubernetes", "MLOps"],
                completed: false,
            },
            Milestone {
                id: "4",
                title: "Emerging Tech Integration",
                description: "Blockchain, IoT, and next-gen technologies",
                timeframe: "Month 13-18",
                skills: &["Blockchain", "IoT", "Edge Computing", "Web3"],
                completed: false,
            },
        ],
    },
];

impl TrackId {
    pub fn next(self) -> Self {
        match self {
            TrackId::JobReady => TrackId::FutureReady,
            TrackId::FutureReady => TrackId::JobReady,
        }
    }
}

pub fn track(id: TrackId) -> &'static Track {
    match id {
        TrackId::JobReady => &TRACKS[0],
        TrackId::FutureReady => &TRACKS[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_ready_is_half_done() {
        let t = track(TrackId::JobReady);
        assert_eq!(t.completed_milestones(), 2);
        assert!((t.progress_percent() - 50.0).abs() < 1e-9);
        assert_eq!(t.current_milestone(), Some(2));
    }

    #[test]
    fn future_ready_starts_at_first_milestone() {
        let t = track(TrackId::FutureReady);
        assert_eq!(t.progress_percent(), 0.0);
        assert_eq!(t.current_milestone(), Some(0));
    }

    #[test]
    fn lookup_matches_table_ids() {
        for t in &TRACKS {
            assert_eq!(track(t.id).id, t.id);
        }
    }
}
