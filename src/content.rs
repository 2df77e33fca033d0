// Everything the page says lives here. Edit these tables, not the markup.
use crate::icons::Icon;

#[derive(Debug, Clone, PartialEq)]
pub struct CompanyProfile {
    pub name: &'static str,
    pub founded: u16,
    pub email: &'static str,
    pub phone: &'static str,
    pub industry: &'static str,
    pub size: &'static str,
    pub members_note: &'static str,
    pub tagline: &'static str,
    pub mission: &'static str,
}

pub const COMPANY: CompanyProfile = CompanyProfile {
    name: "The Trinity Company",
    founded: 2022,
    email: "thetrinityc@gmail.com",
    phone: "+91 9503447189",
    industry: "Information Technology & Services",
    size: "2–10 employees",
    members_note: "3 LinkedIn members currently list The Trinity Company as their workplace.",
    tagline: "Building the next generation of data scientists.",
    mission: "We connect learners, graduates, and professionals with internships and jobs in Data Science and related fields — and help them grow with real-world projects and mentorship.",
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainEntry {
    pub icon: Icon,
    pub label: &'static str,
}

pub const DOMAINS: &[DomainEntry] = &[
    DomainEntry { icon: Icon::Brain, label: "Machine Learning" },
    DomainEntry { icon: Icon::BarChart, label: "Data Analytics" },
    DomainEntry { icon: Icon::LineChart, label: "Predictive Analytics" },
    DomainEntry { icon: Icon::TrendChart, label: "Forecasting" },
    DomainEntry { icon: Icon::Database, label: "Database Management" },
    DomainEntry { icon: Icon::Layers, label: "Data Architecture" },
    DomainEntry { icon: Icon::Brain, label: "Deep Learning" },
    DomainEntry { icon: Icon::BarChart, label: "Statistical Modeling" },
    DomainEntry { icon: Icon::TrendChart, label: "Data Visualization" },
    DomainEntry { icon: Icon::Brain, label: "AI" },
    DomainEntry { icon: Icon::Globe, label: "Web/Software Development" },
];

pub const COURSES: &[&str] = &[
    "Data Science",
    "Python Development",
    "Artificial Intelligence (AI)",
    "Machine Learning (ML)",
    "Deep Learning (DL)",
    "SQL",
    "Power BI",
    "Tableau",
    "R Language",
    "STATA",
];

pub const ROLES: &[&str] = &[
    "Web Developer",
    "Data Engineer",
    "Data Analyst",
    "Researcher",
    "Data Scientist",
    "Machine Learning Engineer",
];

pub const PROJECT_AREAS: &[&str] = &[
    "Web Development",
    "Software Development",
    "Data Science",
    "Analytics",
    "Visualization Dashboards",
    "Forecasting & Time Series",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavEntry {
    pub anchor: &'static str,
    pub label: &'static str,
}

// Header order. The sections below render in the same order.
pub const NAV_LINKS: &[NavEntry] = &[
    NavEntry { anchor: "about", label: "About" },
    NavEntry { anchor: "domains", label: "Domains" },
    NavEntry { anchor: "internships", label: "Internships" },
    NavEntry { anchor: "jobs", label: "Hiring" },
    NavEntry { anchor: "courses", label: "Courses" },
    NavEntry { anchor: "projects", label: "Projects" },
    NavEntry { anchor: "contact", label: "Contact" },
];

/// How many nav entries the footer's "Explore" column repeats.
pub const FOOTER_EXPLORE_LINKS: usize = 4;
/// How many courses the footer's "Learn" column lists.
pub const FOOTER_COURSES: usize = 5;
/// How many project areas the internship blurb names.
pub const INTERNSHIP_FOCUS_AREAS: usize = 4;

pub const ABOUT_TAGS: &[&str] = &["Collaborative", "Project-driven", "Mentor-led"];

pub const INTERNSHIP_POINTS: &[&str] = &[
    "Duration typically matches a semester or summer break.",
    "Mix of paid and unpaid internships depending on project and sponsor.",
    "Weekly mentor syncs, code reviews, and demo days.",
];

pub const HIRING_CRITERIA: &[&str] = &[
    "Strong fundamentals in programming, statistics, and problem solving.",
    "Hands-on with Python/R/SQL and popular ML/DL frameworks.",
    "Curiosity, collaboration, and willingness to learn.",
    "Portfolio or GitHub demonstrating real-world projects.",
];

pub const PROJECT_HIGHLIGHTS: &[&str] = &[
    "End-to-end problem framing & data pipeline",
    "Modeling, evaluation, and MLOps basics",
    "Visualization dashboards & reporting",
];

/// "Focus on building portfolio-ready projects in A, B, C, D and more."
pub fn internship_focus_line() -> String {
    let areas: Vec<&str> = PROJECT_AREAS
        .iter()
        .take(INTERNSHIP_FOCUS_AREAS)
        .copied()
        .collect();
    format!(
        "Focus on building portfolio-ready projects in {} and more.",
        areas.join(", ")
    )
}

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, COMPANY.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn nav_anchors_are_unique_and_in_page_order() {
        let anchors: Vec<&str> = NAV_LINKS.iter().map(|n| n.anchor).collect();
        assert_eq!(
            anchors,
            ["about", "domains", "internships", "jobs", "courses", "projects", "contact"]
        );
        let unique: HashSet<&str> = anchors.iter().copied().collect();
        assert_eq!(unique.len(), anchors.len());
    }

    #[test]
    fn focus_line_names_first_four_project_areas() {
        assert_eq!(
            internship_focus_line(),
            "Focus on building portfolio-ready projects in Web Development, Software Development, Data Science, Analytics and more."
        );
    }

    #[test]
    fn footer_slices_fit_their_tables() {
        assert!(FOOTER_EXPLORE_LINKS <= NAV_LINKS.len());
        assert!(FOOTER_COURSES <= COURSES.len());
        assert!(INTERNSHIP_FOCUS_AREAS <= PROJECT_AREAS.len());
    }

    #[test]
    fn copyright_uses_given_year() {
        assert_eq!(
            copyright_line(2026),
            "© 2026 The Trinity Company. All rights reserved."
        );
    }
}
