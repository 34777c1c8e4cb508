//! Portfolio content - the static profile shown by the tabs
//!
//! The built-in profile is used unless a YAML override is configured.
//! Every field of the override is optional; missing fields keep the
//! built-in value.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SkillIcon {
    #[default]
    Code,
    Globe,
    Smartphone,
}

impl SkillIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            SkillIcon::Code => "</>",
            SkillIcon::Globe => "(@)",
            SkillIcon::Smartphone => "[▯]",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub icon: SkillIcon,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResumeLink {
    pub label: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub owner: String,
    pub welcome: String,
    pub title: String,
    pub description: String,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub resume: ResumeLink,
    pub email: String,
    pub socials: Vec<SocialLink>,
    pub copyright_year: i32,
}

fn skill(name: &str, icon: SkillIcon) -> Skill {
    Skill {
        name: name.to_string(),
        icon,
    }
}

fn project(name: &str, description: &str, details: &str) -> Project {
    Project {
        name: name.to_string(),
        description: description.to_string(),
        details: details.to_string(),
        image: "/placeholder.svg?height=200&width=300".to_string(),
    }
}

impl Default for Profile {
    fn default() -> Self {
        let email = "varunpshetti.2003@gmail.com".to_string();
        Self {
            owner: "Varun Pradeep Shetti".to_string(),
            welcome: "Hi, I'm Varun Shetti. Welcome to my portfolio! I'm a passionate \
                      Full-Stack Developer specializing in React, Next.js, and API design. \
                      Let's build something amazing together!"
                .to_string(),
            title: "Full-Stack Web & App Developer".to_string(),
            description:
                "Crafting beautiful, responsive, and functional web and mobile experiences."
                    .to_string(),
            skills: vec![
                skill("HTML", SkillIcon::Code),
                skill("CSS", SkillIcon::Code),
                skill("JavaScript", SkillIcon::Code),
                skill("TypeScript", SkillIcon::Code),
                skill("Next.js", SkillIcon::Globe),
                skill("React Native", SkillIcon::Smartphone),
                skill("Python", SkillIcon::Code),
                skill("Bootstrap", SkillIcon::Code),
                skill("Tailwind CSS", SkillIcon::Code),
            ],
            projects: vec![
                project(
                    "E-commerce Platform",
                    "A full-stack e-commerce solution built with Next.js and Python backend.",
                    "Features include user authentication, product catalog, shopping cart, \
                     and payment integration.",
                ),
                project(
                    "Mobile Fitness App",
                    "A React Native app for tracking workouts and nutrition.",
                    "Includes workout planning, progress tracking, and integration with \
                     health APIs.",
                ),
                project(
                    "Portfolio Website",
                    "This responsive portfolio website built with Next.js and Tailwind CSS.",
                    "Showcases projects, skills, and contact information with a unique \
                     command-line interface.",
                ),
            ],
            resume: ResumeLink {
                label: "Download Resume.pdf".to_string(),
                path: "/path-to-your-resume.pdf".to_string(),
            },
            socials: vec![
                SocialLink {
                    label: "Email".to_string(),
                    url: format!("mailto:{}", email),
                },
                SocialLink {
                    label: "GitHub".to_string(),
                    url: "https://github.com/Varun122646".to_string(),
                },
                SocialLink {
                    label: "LinkedIn".to_string(),
                    url: "https://www.linkedin.com/in/vshettidev/".to_string(),
                },
            ],
            email,
            copyright_year: 2024,
        }
    }
}

impl Profile {
    /// Index of the project with the given name
    pub fn project_index(&self, name: &str) -> Option<usize> {
        self.projects.iter().position(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_lists() {
        let profile = Profile::default();
        assert_eq!(profile.skills.len(), 9);
        assert_eq!(profile.projects.len(), 3);
        assert_eq!(profile.socials.len(), 3);
        assert_eq!(profile.skills[5].icon, SkillIcon::Smartphone);
    }

    #[test]
    fn test_project_index_by_name() {
        let profile = Profile::default();
        assert_eq!(profile.project_index("Mobile Fitness App"), Some(1));
        assert_eq!(profile.project_index("Unknown"), None);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
owner: Jane Doe
skills:
  - name: Rust
  - name: Web
    icon: globe
"#;
        let profile: Profile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(profile.owner, "Jane Doe");
        assert_eq!(profile.skills.len(), 2);
        assert_eq!(profile.skills[0].icon, SkillIcon::Code);
        assert_eq!(profile.skills[1].icon, SkillIcon::Globe);
        assert_eq!(profile.projects.len(), 3);
        assert_eq!(profile.title, Profile::default().title);
    }
}
