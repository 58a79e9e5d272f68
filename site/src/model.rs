use serde::{Deserialize, Serialize};

// ── Owner profile ────────────────────────────────────────────────────────

/// Who the site is about, and where to reach them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Short line shown above the hero heading.
    pub tagline: String,
    pub email: String,
    pub location: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub resume_path: String,
    pub logo_path: String,
    pub portrait_path: String,
    /// "What I love" bullet list on the About page.
    #[serde(default)]
    pub loves: Vec<String>,
    /// Tool tags shown in the About card grid.
    #[serde(default)]
    pub toolbox: Vec<String>,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// First word of the name, used in the hero heading.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

// ── Display lists ────────────────────────────────────────────────────────

/// A project card. No identity beyond its position in the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub code_url: String,
    pub image: String,
}

impl Project {
    pub fn new(title: &str, description: &str, tech: &[&str], code_url: &str, image: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            tech: tech.iter().map(|t| t.to_string()).collect(),
            code_url: code_url.to_string(),
            image: image.to_string(),
        }
    }
}

/// A skill bar. `level` is a percentage in 0..=100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

impl Skill {
    pub fn new(name: &str, level: u8) -> Self {
        Self {
            name: name.to_string(),
            level: level.min(100),
        }
    }

    /// Bar width as a CSS percentage.
    pub fn width(&self) -> String {
        format!("{}%", self.level)
    }
}

/// One entry on the About page timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub period: String,
    pub title: String,
    pub body: String,
}

impl Milestone {
    pub fn new(period: &str, title: &str, body: &str) -> Self {
        Self {
            period: period.to_string(),
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}

/// A highlight card on the Home page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub body: String,
}

impl Highlight {
    pub fn new(title: &str, body: &str) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_level_is_capped() {
        assert_eq!(Skill::new("Overclocked", 140).level, 100);
        assert_eq!(Skill::new("Rust", 70).width(), "70%");
    }

    #[test]
    fn project_tags_keep_order() {
        let p = Project::new("t", "d", &["C++", "OOP"], "https://example.com", "/images/x.png");
        assert_eq!(p.tech, vec!["C++", "OOP"]);
    }

    #[test]
    fn profile_helpers() {
        let p = Profile {
            name: "Ada Lovelace".into(),
            tagline: String::new(),
            email: "ada@example.com".into(),
            location: String::new(),
            github_url: String::new(),
            linkedin_url: String::new(),
            resume_path: String::new(),
            logo_path: String::new(),
            portrait_path: String::new(),
            loves: Vec::new(),
            toolbox: Vec::new(),
        };
        assert_eq!(p.first_name(), "Ada");
        assert_eq!(p.mailto(), "mailto:ada@example.com");
    }
}
