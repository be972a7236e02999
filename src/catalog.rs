use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    FullStack,
    Frontend,
    AiMl,
    Blockchain,
    ArVr,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::FullStack,
        Category::Frontend,
        Category::AiMl,
        Category::Blockchain,
        Category::ArVr,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::FullStack => "Full-Stack",
            Category::Frontend => "Frontend",
            Category::AiMl => "AI/ML",
            Category::Blockchain => "Blockchain",
            Category::ArVr => "AR/VR",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn choices() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn admits(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Completed,
    InProgress,
    InDevelopment,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Completed => "Completed",
            Status::InProgress => "In Progress",
            Status::InDevelopment => "In Development",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Status::Completed => "badge badge-done",
            Status::InProgress => "badge badge-progress",
            Status::InDevelopment => "badge badge-dev",
        }
    }
}

/// Rating in tenths of a star, 0..=50.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(pub u8);

impl Rating {
    pub const MAX: Rating = Rating(50);
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub category: Category,
    pub status: Status,
    pub rating: Rating,
    pub timeline: &'static str,
    pub features: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub live_url: &'static str,
    pub code_url: &'static str,
}

pub static PROJECTS: [ProjectRecord; 6] = [
    ProjectRecord {
        id: 1,
        title: "E-Commerce Platform",
        description: "A full-stack e-commerce solution with modern payment processing, real-time inventory management, and advanced analytics dashboard.",
        image: "https://images.unsplash.com/photo-1654618977232-a6c6dea9d1e8?w=600&h=400&fit=crop",
        category: Category::FullStack,
        status: Status::Completed,
        rating: Rating(49),
        timeline: "6 months",
        features: &["Payment Integration", "Admin Dashboard", "Real-time Analytics"],
        technologies: &["React", "Node.js", "PostgreSQL", "Stripe", "Redis"],
        live_url: "#",
        code_url: "#",
    },
    ProjectRecord {
        id: 2,
        title: "AI-Powered Task Manager",
        description: "Intelligent task management with AI suggestions, natural language processing, and smart scheduling algorithms.",
        image: "https://images.pexels.com/photos/577585/pexels-photo-577585.jpeg?w=600&h=400&fit=crop",
        category: Category::AiMl,
        status: Status::InProgress,
        rating: Rating(47),
        timeline: "4 months",
        features: &["AI Suggestions", "Voice Commands", "Smart Scheduling"],
        technologies: &["Next.js", "OpenAI API", "Prisma", "TypeScript", "Tailwind"],
        live_url: "#",
        code_url: "#",
    },
    ProjectRecord {
        id: 3,
        title: "Real-time Weather Dashboard",
        description: "Interactive weather platform with detailed forecasts, climate data visualization, and location-based alerts.",
        image: "https://images.unsplash.com/photo-1508361727343-ca787442dcd7?w=600&h=400&fit=crop",
        category: Category::Frontend,
        status: Status::Completed,
        rating: Rating(48),
        timeline: "3 months",
        features: &["Real-time Updates", "Interactive Maps", "Weather Alerts"],
        technologies: &["Vue.js", "D3.js", "Express", "MongoDB", "Socket.io"],
        live_url: "#",
        code_url: "#",
    },
    ProjectRecord {
        id: 4,
        title: "Social Media Analytics Suite",
        description: "Comprehensive analytics platform for social media performance with automated reporting and trend analysis.",
        image: "https://images.pexels.com/photos/39284/macbook-apple-imac-computer-39284.jpeg?w=600&h=400&fit=crop",
        category: Category::FullStack,
        status: Status::Completed,
        rating: Rating(49),
        timeline: "8 months",
        features: &["Multi-platform Support", "Custom Reports", "Trend Analysis"],
        technologies: &["React", "Python", "Django", "Chart.js", "PostgreSQL"],
        live_url: "#",
        code_url: "#",
    },
    ProjectRecord {
        id: 5,
        title: "Blockchain Voting System",
        description: "Secure, transparent voting platform using blockchain technology with biometric verification and audit trails.",
        image: "https://images.unsplash.com/photo-1583508915901-b5f84c1dcde1?w=600&h=400&fit=crop",
        category: Category::Blockchain,
        status: Status::Completed,
        rating: Rating(50),
        timeline: "10 months",
        features: &["Smart Contracts", "Biometric Auth", "Audit Trail"],
        technologies: &["Solidity", "Web3.js", "React", "IPFS", "MetaMask"],
        live_url: "#",
        code_url: "#",
    },
    ProjectRecord {
        id: 6,
        title: "AR Learning Platform",
        description: "Augmented reality educational platform with interactive 3D models, gamification, and progress tracking.",
        image: "https://images.unsplash.com/photo-1654618977232-a6c6dea9d1e8?w=600&h=400&fit=crop",
        category: Category::ArVr,
        status: Status::InDevelopment,
        rating: Rating(46),
        timeline: "12 months",
        features: &["3D Interactions", "Gamification", "Progress Analytics"],
        technologies: &["Unity", "ARCore", "Firebase", "C#", "Blender"],
        live_url: "#",
        code_url: "#",
    },
];

pub fn catalog() -> &'static [ProjectRecord] {
    &PROJECTS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<u32> = catalog().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), catalog().len());
    }

    #[test]
    fn ratings_stay_within_five_stars() {
        assert!(catalog().iter().all(|p| p.rating <= Rating::MAX));
        assert_eq!(Rating(50).to_string(), "5.0");
        assert_eq!(Rating(47).to_string(), "4.7");
    }

    #[test]
    fn every_category_is_offered_by_the_filter_control() {
        let offered: Vec<_> = CategoryFilter::choices().collect();
        for project in catalog() {
            assert!(offered.contains(&CategoryFilter::Only(project.category)));
        }
        let labels: Vec<_> = offered.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            ["All", "Full-Stack", "Frontend", "AI/ML", "Blockchain", "AR/VR"]
        );
    }

    #[test]
    fn all_admits_every_category_and_only_matches_exactly() {
        for category in Category::ALL {
            assert!(CategoryFilter::All.admits(category));
        }
        assert!(CategoryFilter::Only(Category::AiMl).admits(Category::AiMl));
        assert!(!CategoryFilter::Only(Category::AiMl).admits(Category::ArVr));
    }

    #[test]
    fn records_carry_display_fields() {
        for project in catalog() {
            assert!(!project.title.is_empty());
            assert!(!project.technologies.is_empty());
            assert!(!project.features.is_empty());
        }
    }
}
