//! Short career videos for the discovery feed.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CareerVideo {
    pub id: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub role: &'static str,
    pub salary: &'static str,
    pub growth: &'static str,
    pub tags: &'static [&'static str],
    pub description: &'static str,
    pub thumbnail: &'static str,
    /// Like count before the current user's own like.
    pub likes: u32,
}

pub static CAREER_VIDEOS: [CareerVideo; 5] = [
    CareerVideo {
        id: "1",
        title: "Day in the Life: Data Scientist",
        company: "Google",
        role: "Senior Data Scientist",
        salary: "₹25L - ₹40L",
        growth: "+22% growth",
        tags: &["Python", "ML", "Analytics", "Remote"],
        description: "Transform data into insights that drive billion-dollar decisions",
        thumbnail: "🧠",
        likes: 1240,
    },
    CareerVideo {
        id: "2",
        title: "UX Designer Building the Future",
        company: "Figma",
        role: "Product Designer",
        salary: "₹18L - ₹35L",
        growth: "+13% growth",
        tags: &["Design", "User Research", "Prototyping", "Creative"],
        description: "Design experiences that millions of users love every day",
        thumbnail: "🎨",
        likes: 892,
    },
    CareerVideo {
        id: "3",
        title: "Cybersecurity: Digital Guardian",
        company: "CrowdStrike",
        role: "Security Engineer",
        salary: "₹22L - ₹45L",
        growth: "+35% growth",
        tags: &["Security", "Ethical Hacking", "Networks", "High-demand"],
        description: "Protect organizations from cyber threats in an AI-driven world",
        thumbnail: "🔐",
        likes: 1580,
    },
    CareerVideo {
        id: "4",
        title: "AI Engineer: Building Tomorrow",
        company: "OpenAI",
        role: "Machine Learning Engineer",
        salary: "₹30L - ₹60L",
        growth: "+45% growth",
        tags: &["AI/ML", "Python", "Deep Learning", "Future-proof"],
        description: "Create AI systems that will reshape how humans work and live",
        thumbnail: "🤖",
        likes: 2100,
    },
    CareerVideo {
        id: "5",
        title: "Product Manager: Strategy Master",
        company: "Stripe",
        role: "Senior Product Manager",
        salary: "₹28L - ₹50L",
        growth: "+19% growth",
        tags: &["Strategy", "Leadership", "Analytics", "Business"],
        description: "Lead cross-functional teams to build products users can't live without",
        thumbnail: "📊",
        likes: 965,
    },
];
