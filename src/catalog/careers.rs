//! Career path suggestions shown by the browser.

use crate::domain::{CareerRecord, Industry};

pub static CAREER_PATHS: [CareerRecord; 6] = [
    CareerRecord {
        id: "data-scientist",
        title: "Data Scientist",
        match_score: 92,
        growth_rate: "+22%",
        average_salary: "₹12L/year",
        required_skills: &["Python", "Statistics", "Machine Learning", "SQL"],
        industry: Industry::Technology,
        description: "Analyze complex data to help organizations make informed decisions",
    },
    CareerRecord {
        id: "product-manager",
        title: "Product Manager",
        match_score: 88,
        growth_rate: "+19%",
        average_salary: "₹15L/year",
        required_skills: &["Strategy", "Analytics", "Leadership", "Communication"],
        industry: Industry::Technology,
        description: "Drive product vision and strategy from conception to launch",
    },
    CareerRecord {
        id: "ux-designer",
        title: "UX Designer",
        match_score: 85,
        growth_rate: "+18%",
        average_salary: "₹10L/year",
        required_skills: &["Design Thinking", "Prototyping", "Research", "Figma"],
        industry: Industry::CreativeArts,
        description: "Create intuitive and engaging user experiences for digital products",
    },
    CareerRecord {
        id: "software-engineer",
        title: "Software Engineer",
        match_score: 90,
        growth_rate: "+25%",
        average_salary: "₹14L/year",
        required_skills: &["JavaScript", "React", "Node.js", "Git"],
        industry: Industry::Technology,
        description: "Build and maintain software applications and systems",
    },
    CareerRecord {
        id: "business-analyst",
        title: "Business Analyst",
        match_score: 83,
        growth_rate: "+14%",
        average_salary: "₹9L/year",
        required_skills: &["Excel", "SQL", "Analysis", "Communication"],
        industry: Industry::Finance,
        description: "Bridge the gap between business needs and technical solutions",
    },
    CareerRecord {
        id: "digital-marketer",
        title: "Digital Marketing Manager",
        match_score: 81,
        growth_rate: "+16%",
        average_salary: "₹8L/year",
        required_skills: &["SEO", "Social Media", "Analytics", "Content Strategy"],
        industry: Industry::CreativeArts,
        description: "Plan and execute digital marketing campaigns across multiple channels",
    },
];

/// Look up a career by id.
pub fn find(id: &str) -> Option<&'static CareerRecord> {
    CAREER_PATHS.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        for (i, a) in CAREER_PATHS.iter().enumerate() {
            for b in &CAREER_PATHS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn scores_are_percentages() {
        assert!(CAREER_PATHS.iter().all(|c| c.match_score <= 100));
    }

    #[test]
    fn find_by_id() {
        assert_eq!(find("ux-designer").map(|c| c.title), Some("UX Designer"));
        assert!(find("astronaut").is_none());
    }
}
