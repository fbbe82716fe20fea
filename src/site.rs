use chrono::{DateTime, Datelike};

/// Page sections in scroll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Experience,
    Projects,
    Skills,
    Achievements,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Experience,
        Section::Projects,
        Section::Skills,
        Section::Achievements,
        Section::Contact,
    ];

    /// DOM id of the section element.
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Achievements => "achievements",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Achievements => "Achievements",
            Self::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

/// Year the bundle was built, stamped by build.rs.
pub fn copyright_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|t| t.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_anchors_unique() {
        let anchors = Section::ALL
            .iter()
            .map(|s| s.anchor())
            .collect::<HashSet<_>>();
        assert_eq!(anchors.len(), Section::ALL.len());
    }

    #[test]
    fn test_nav_order_matches_page() {
        let order = Section::ALL.map(Section::anchor);
        assert_eq!(
            order,
            [
                "home",
                "about",
                "experience",
                "projects",
                "skills",
                "achievements",
                "contact"
            ]
        );
        assert_eq!(Section::Achievements.href(), "#achievements");
    }

    #[test]
    fn test_build_year_parses() {
        let year = copyright_year().expect("BUILD_TIME should be RFC 3339");
        assert!(year >= 2024);
    }
}
