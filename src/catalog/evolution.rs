//! Skill-evolution analytics: skill metrics, crisis predictions and insight tables.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl Trend {
    pub fn symbol(self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
            Trend::Stable => "→",
        }
    }
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

/// Impact rating of a prediction. Shares the low/medium/high scale.
pub type Impact = RiskLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillMetric {
    pub name: &'static str,
    pub current: u8,
    pub target: u8,
    pub trend: Trend,
    pub risk_level: RiskLevel,
    pub future_proof: u8,
}

impl SkillMetric {
    /// `target - current`. Negative for skills being wound down.
    pub fn gap(&self) -> i16 {
        i16::from(self.target) - i16::from(self.current)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CrisisPrediction {
    pub title: &'static str,
    pub probability: u8,
    pub impact: Impact,
    pub timeline: &'static str,
    pub description: &'static str,
    pub mitigations: &'static [&'static str],
}

pub static SKILL_METRICS: [SkillMetric; 5] = [
    SkillMetric {
        name: "JavaScript/React",
        current: 85,
        target: 95,
        trend: Trend::Up,
        risk_level: RiskLevel::Low,
        future_proof: 80,
    },
    SkillMetric {
        name: "Machine Learning",
        current: 45,
        target: 80,
        trend: Trend::Up,
        risk_level: RiskLevel::Medium,
        future_proof: 95,
    },
    SkillMetric {
        name: "Data Analysis",
        current: 70,
        target: 85,
        trend: Trend::Up,
        risk_level: RiskLevel::Low,
        future_proof: 85,
    },
    SkillMetric {
        name: "Manual Testing",
        current: 80,
        target: 60,
        trend: Trend::Down,
        risk_level: RiskLevel::High,
        future_proof: 30,
    },
    SkillMetric {
        name: "Cloud Computing",
        current: 35,
        target: 75,
        trend: Trend::Up,
        risk_level: RiskLevel::Medium,
        future_proof: 90,
    },
];

pub static CRISIS_PREDICTIONS: [CrisisPrediction; 3] = [
    CrisisPrediction {
        title: "AI Automation Impact",
        probability: 75,
        impact: RiskLevel::High,
        timeline: "2-3 years",
        description: "Manual testing and basic coding tasks may become automated",
        mitigations: &[
            "Learn AI/ML fundamentals",
            "Focus on complex problem-solving",
            "Develop AI prompt engineering skills",
        ],
    },
    CrisisPrediction {
        title: "Cloud-First Migration",
        probability: 90,
        impact: RiskLevel::Medium,
        timeline: "1-2 years",
        description: "Most companies will require cloud deployment expertise",
        mitigations: &[
            "Get AWS/GCP certification",
            "Practice container technologies",
            "Learn infrastructure as code",
        ],
    },
    CrisisPrediction {
        title: "No-Code/Low-Code Rise",
        probability: 60,
        impact: RiskLevel::Medium,
        timeline: "3-5 years",
        description: "Simple applications may not require traditional coding",
        mitigations: &[
            "Specialize in complex algorithms",
            "Focus on system architecture",
            "Become a no-code platform expert",
        ],
    },
];

/// Critical skill gaps: (skill, gap percent, severity).
pub static SKILL_GAPS: [(&str, u8, RiskLevel); 3] = [
    ("Machine Learning", 35, RiskLevel::High),
    ("Cloud Computing", 40, RiskLevel::Medium),
    ("React/JS", 10, RiskLevel::Low),
];

/// Market demand change by role, in percent.
pub static MARKET_TRENDS: [(&str, i8); 4] = [
    ("AI/ML Engineers", 45),
    ("Cloud Architects", 35),
    ("Data Scientists", 22),
    ("Manual Testers", -15),
];

/// Recommended learning path: (phase, steps).
pub static LEARNING_PATH: [(&str, &[&str]); 3] = [
    (
        "Immediate Focus",
        &["Python fundamentals", "Statistics & probability", "ML algorithms basics"],
    ),
    (
        "Next 3 Months",
        &["AWS Cloud Practitioner", "Docker containers", "TensorFlow basics"],
    ),
    (
        "Long-term Goal",
        &["MLOps engineering", "AI system architecture", "Advanced cloud services"],
    ),
];
