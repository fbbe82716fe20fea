//! Static catalog data for every section of the page.
//!
//! Nothing here changes at runtime. [`SiteContent::default`] builds the one
//! instance the app owns and hands down through context.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementKind {
    Competition,
    Academic,
    Certification,
}

/// Badge classes for an [`AchievementKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindStyle {
    pub label: &'static str,
    pub bg_class: &'static str,
    pub text_class: &'static str,
    pub border_class: &'static str,
}

impl AchievementKind {
    pub fn style(self) -> KindStyle {
        match self {
            Self::Competition => KindStyle {
                label: "Competition",
                bg_class: "bg-yellow-500/20",
                text_class: "text-yellow-400",
                border_class: "border-yellow-500/30",
            },
            Self::Academic => KindStyle {
                label: "Academic",
                bg_class: "bg-purple-500/20",
                text_class: "text-purple-400",
                border_class: "border-purple-500/30",
            },
            Self::Certification => KindStyle {
                label: "Certification",
                bg_class: "bg-green-500/20",
                text_class: "text-green-400",
                border_class: "border-green-500/30",
            },
        }
    }
}

/// Icon glyphs, rendered as `<i class=...>` like the rest of the site's icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Award,
    Briefcase,
    Code,
    Database,
    GraduationCap,
    Layers,
    Shield,
    Smartphone,
    Star,
    Trophy,
    Wrench,
    Mail,
    Github,
    Linkedin,
}

impl Icon {
    pub fn class(self) -> &'static str {
        match self {
            Self::Award => "extra-award",
            Self::Briefcase => "extra-briefcase",
            Self::Code => "extra-code",
            Self::Database => "extra-database",
            Self::GraduationCap => "extra-graduation-cap",
            Self::Layers => "extra-layers",
            Self::Shield => "extra-shield",
            Self::Smartphone => "extra-smartphone",
            Self::Star => "extra-star",
            Self::Trophy => "extra-trophy",
            Self::Wrench => "extra-wrench",
            Self::Mail => "extra-email",
            Self::Github => "devicon-github-plain",
            Self::Linkedin => "devicon-linkedin-plain",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalLink {
    pub href: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Achievement {
    pub id: u32,
    pub title: &'static str,
    pub organization: &'static str,
    pub year: u16,
    pub description: &'static str,
    pub kind: AchievementKind,
    pub icon: Icon,
    /// Tailwind gradient stops, e.g. `from-purple-500 to-indigo-500`.
    pub accent: &'static str,
    pub link: Option<ExternalLink>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub source_url: &'static str,
    pub live_url: Option<&'static str>,
    pub category: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: Icon,
    pub skills: &'static [&'static str],
    pub accent: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Education {
    pub institution: &'static str,
    pub degree: &'static str,
    pub period: &'static str,
    pub grade: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub title: &'static str,
    pub organization: &'static str,
    pub location: Option<&'static str>,
    pub period: &'static str,
    pub summary: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub icon: Icon,
    pub accent: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub bio: &'static str,
    pub email: &'static str,
    pub github_url: &'static str,
    pub linkedin_url: &'static str,
    pub resume_url: &'static str,
    pub portrait: &'static str,
    pub badges: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContent {
    pub profile: Profile,
    pub education: Vec<Education>,
    pub internships: Vec<Role>,
    pub roles: Vec<Role>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub achievements: Vec<Achievement>,
}

impl SiteContent {
    pub fn contact_channels(&self) -> Vec<ContactChannel> {
        let profile = &self.profile;
        vec![
            ContactChannel {
                label: "Email",
                value: profile.email,
                href: "mailto:dattpatel2020@gmail.com",
                icon: Icon::Mail,
                accent: "from-red-500 to-pink-500",
            },
            ContactChannel {
                label: "GitHub",
                value: "HMTking",
                href: profile.github_url,
                icon: Icon::Github,
                accent: "from-gray-600 to-gray-400",
            },
            ContactChannel {
                label: "LinkedIn",
                value: "datt-patel-a312a5256",
                href: profile.linkedin_url,
                icon: Icon::Linkedin,
                accent: "from-blue-600 to-blue-400",
            },
        ]
    }

    /// Summary tiles under the carousel. Counts come from the catalog so they
    /// can't drift from it.
    pub fn achievement_stats(&self) -> Vec<Stat> {
        let gate = self
            .achievements
            .iter()
            .filter(|a| a.title.starts_with("GATE"))
            .count();
        let certifications = self
            .achievements
            .iter()
            .filter(|a| a.kind == AchievementKind::Certification)
            .count();
        vec![
            Stat {
                label: "GATE Qualifications",
                value: gate.to_string(),
                icon: Icon::GraduationCap,
            },
            Stat {
                label: "JEE Percentile",
                value: "97.4".to_string(),
                icon: Icon::Trophy,
            },
            Stat {
                label: "Certifications",
                value: certifications.to_string(),
                icon: Icon::Award,
            },
            Stat {
                label: "Total Achievements",
                value: self.achievements.len().to_string(),
                icon: Icon::Star,
            },
        ]
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            profile: Profile {
                name: "Datt Patel",
                initials: "DP",
                headline: "Computer Science Student & AI/ML Enthusiast",
                tagline: "Building innovative AI/ML solutions and web applications. Passionate about computer science, data analysis, and creating impactful technology solutions.",
                bio: "I am Datt Patel, a Computer Science and Engineering professional from the Indian Institute of Information Technology, Surat. I secured an All India Rank of 387 in GATE CS among over 2 lakh+ candidates, and an All India Rank of 877 in GATE Data Science and Artificial Intelligence. I possess a strong command of core computer science fundamentals, backed by hands-on expertise in software development, artificial intelligence, and data science, enabling me to build impactful, real-world technology.",
                email: "dattpatel2020@gmail.com",
                github_url: "https://github.com/HMTking",
                linkedin_url: "https://www.linkedin.com/in/datt-patel-a312a5256/",
                resume_url: "https://drive.google.com/drive/folders/1AyujkYxzU4YSV5wnSbomFGUnpNCchdu5?usp=drive_link",
                portrait: "/images/profile.jpg",
                badges: &["Fullstack Developer", "GATE CS AIR 387", "GATE DS&AI AIR 877"],
            },
            education: vec![Education {
                institution: "Indian Institute of Information Technology, Surat",
                degree: "Bachelor of Technology in Computer Science",
                period: "2022 - 2026",
                grade: Some("CGPA: 8.64/10"),
            }],
            internships: vec![Role {
                title: "Summer Intern - Data Science and Technology",
                organization: "India Space Lab",
                location: None,
                period: "2025",
                summary: None,
            }],
            roles: vec![Role {
                title: "Software Development Engineer (SDE)",
                organization: "MAQ Software",
                location: Some("Noida, India"),
                period: "Current",
                summary: Some("Currently working as a Software Development Engineer at MAQ Software, contributing to innovative software solutions and leveraging cutting-edge technologies to deliver high-quality products."),
            }],
            projects: vec![
                Project {
                    id: 1,
                    title: "American Sign Language (ASL) to Speech Converter",
                    description: "ML system that converts ASL gestures to speech and complete sentences in real time. Implemented multilayer perceptron (MLP) with time-frame separation for enhanced gesture recognition.",
                    image: "/images/asl.webp",
                    technologies: &["Python", "OpenCV", "MediaPipe", "gTTS", "Machine Learning", "Computer Vision"],
                    source_url: "https://github.com/HMTking/American-Sign-Language-To-Speech-and-Sentence-Conversion/tree/main",
                    live_url: None,
                    category: "machine-learning",
                },
                Project {
                    id: 2,
                    title: "Personal Finance Tracker",
                    description: "Web-based finance tracker to record income/expenses with persistent SQLite storage and responsive UI. Developed RESTful APIs for transaction CRUD and financial summary with real-time dashboard updates.",
                    image: "/images/finance-tracker.png",
                    technologies: &["Flask", "SQLite", "Chart.js", "JavaScript", "HTML", "CSS"],
                    source_url: "https://github.com/HMTking/personal-finance-tracker-By-DattPatel",
                    live_url: Some("https://personal-finance-tracker-by-dattpatel.onrender.com"),
                    category: "fullstack",
                },
                Project {
                    id: 3,
                    title: "Mini Plant Store - Greenify",
                    description: "Plant e-commerce application with customer and admin modules using the MERN stack and Vite. Implemented features including product browsing, cart management, order history, and checkout with authentication.",
                    image: "/images/greenify.png",
                    technologies: &["MongoDB", "Express", "React", "Node.js", "Vite", "JWT", "Cloudinary"],
                    source_url: "https://github.com/HMTking/greenify",
                    live_url: Some("https://greenify-frontend-chi.vercel.app/"),
                    category: "fullstack",
                },
            ],
            skills: vec![
                SkillCategory {
                    title: "Programming Languages",
                    icon: Icon::Code,
                    skills: &["C++", "Python", "JavaScript", "SQL", "C"],
                    accent: "from-blue-500 to-cyan-500",
                },
                SkillCategory {
                    title: "Machine Learning & AI",
                    icon: Icon::Database,
                    skills: &["Scikit-learn", "NumPy", "Pandas", "TensorFlow", "OpenCV"],
                    accent: "from-green-500 to-emerald-500",
                },
                SkillCategory {
                    title: "Frontend Libraries",
                    icon: Icon::Layers,
                    skills: &["React", "HTML/CSS", "JavaScript", "Tailwind CSS", "Bootstrap"],
                    accent: "from-purple-500 to-pink-500",
                },
                SkillCategory {
                    title: "Backend & Database",
                    icon: Icon::Database,
                    skills: &["Node.js", "Express.js", "MongoDB", "MySQL", "REST APIs"],
                    accent: "from-orange-500 to-red-500",
                },
                SkillCategory {
                    title: "Tools & Platforms",
                    icon: Icon::Wrench,
                    skills: &["Git", "GitHub", "Jupyter Notebook", "VS Code", "Linux"],
                    accent: "from-indigo-500 to-purple-500",
                },
                SkillCategory {
                    title: "Competitive Programming",
                    icon: Icon::Smartphone,
                    skills: &["Data Structures", "Algorithms", "LeetCode", "Problem Solving", "CodeChef"],
                    accent: "from-pink-500 to-rose-500",
                },
            ],
            achievements: vec![
                Achievement {
                    id: 1,
                    title: "GATE CS 2023 - All India Rank 387",
                    organization: "Computer Science and Information Technology",
                    year: 2023,
                    description: "Secured All India Rank 387 in GATE 2023 CS examination out of 170,000+ candidates, demonstrating exceptional analytical and technical skills.",
                    kind: AchievementKind::Academic,
                    icon: Icon::GraduationCap,
                    accent: "from-purple-500 to-indigo-500",
                    link: Some(ExternalLink {
                        href: "https://drive.google.com/file/d/1rBwPXMwiNWEitnzEPDT_OonJdSBt_yKC/view?usp=sharing",
                        label: "View Result",
                    }),
                },
                Achievement {
                    id: 2,
                    title: "GATE DA 2024 - All India Rank 877",
                    organization: "Data Science and Artificial Intelligence",
                    year: 2024,
                    description: "Achieved All India Rank 877 in GATE 2024 Data Science and AI out of 57,000+ candidates, showcasing expertise in emerging technologies.",
                    kind: AchievementKind::Academic,
                    icon: Icon::GraduationCap,
                    accent: "from-blue-500 to-purple-500",
                    link: Some(ExternalLink {
                        href: "https://drive.google.com/file/d/1adYMu7XRM04OI1Meji8Ttu8iaRVngz4E/view?usp=sharing",
                        label: "View Result",
                    }),
                },
                Achievement {
                    id: 3,
                    title: "JEE Main 2020 - 97.4 Percentile",
                    organization: "National Testing Agency",
                    year: 2020,
                    description: "Achieved 97.4 percentile in JEE Main 2020, demonstrating exceptional problem-solving abilities in Mathematics, Physics, and Chemistry.",
                    kind: AchievementKind::Academic,
                    icon: Icon::Trophy,
                    accent: "from-yellow-500 to-orange-500",
                    link: Some(ExternalLink {
                        href: "https://drive.google.com/file/d/1WHdq2zMr3wZIog2d6rYWepFPItaNebAK/view?usp=sharing",
                        label: "View Result",
                    }),
                },
                Achievement {
                    id: 4,
                    title: "India Space Lab Certificate",
                    organization: "India Space Lab",
                    year: 2024,
                    description: "Completed specialized training and certification program in space technology and satellite systems, expanding knowledge in aerospace engineering.",
                    kind: AchievementKind::Certification,
                    icon: Icon::Shield,
                    accent: "from-cyan-500 to-blue-500",
                    link: Some(ExternalLink {
                        href: "https://drive.google.com/file/d/1NINSv0MSeIXG-q75cWkWgwXXCTFU9f0W/view?usp=sharing",
                        label: "View Certificate",
                    }),
                },
                Achievement {
                    id: 5,
                    title: "FACT APP Internship Certificate",
                    organization: "FACT APP - Growth Intern",
                    year: 2023,
                    description: "Successfully completed the FACT APP internship program as a Growth Intern from June 8th to July 6th, 2023, demonstrating excellence in growth strategies and business development.",
                    kind: AchievementKind::Certification,
                    icon: Icon::Shield,
                    accent: "from-rose-500 to-pink-500",
                    link: Some(ExternalLink {
                        href: "https://drive.google.com/file/d/12unxQ-qv5np51tbocOfTIZdXZ1DIpXey/view?usp=sharing",
                        label: "View Certificate",
                    }),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_achievement_ids_unique() {
        let content = SiteContent::default();
        let ids = content
            .achievements
            .iter()
            .map(|a| a.id)
            .collect::<HashSet<_>>();
        assert_eq!(ids.len(), content.achievements.len());
    }

    #[test]
    fn test_kind_styles_distinct() {
        let kinds = [
            AchievementKind::Competition,
            AchievementKind::Academic,
            AchievementKind::Certification,
        ];
        let labels = kinds
            .iter()
            .map(|k| k.style().label)
            .collect::<HashSet<_>>();
        assert_eq!(labels.len(), kinds.len());
        assert_eq!(AchievementKind::Academic.style().text_class, "text-purple-400");
    }

    #[test]
    fn test_stats_track_catalog() {
        let mut content = SiteContent::default();
        let stats = content.achievement_stats();
        let value_of = |stats: &[Stat], label: &str| {
            stats
                .iter()
                .find(|s| s.label == label)
                .map(|s| s.value.clone())
                .unwrap_or_default()
        };
        assert_eq!(value_of(&stats, "Total Achievements"), "5");
        assert_eq!(value_of(&stats, "Certifications"), "2");
        assert_eq!(value_of(&stats, "GATE Qualifications"), "2");

        // Dropping a certification should be reflected in both counts
        content.achievements.pop();
        let stats = content.achievement_stats();
        assert_eq!(value_of(&stats, "Total Achievements"), "4");
        assert_eq!(value_of(&stats, "Certifications"), "1");
    }

    #[test]
    fn test_contact_channels_link_profile() {
        let content = SiteContent::default();
        let channels = content.contact_channels();
        assert_eq!(channels.len(), 3);
        assert!(channels
            .iter()
            .any(|c| c.href == content.profile.github_url));
        assert!(channels.iter().all(|c| !c.href.is_empty()));
    }
}
