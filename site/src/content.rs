//! Copy and list data compiled into the site. Pages render these directly;
//! nothing is fetched at runtime.

use serde::{Deserialize, Serialize};

use crate::model::{Highlight, Milestone, Profile, Project, Skill};
use crate::route::ROUTES;

const GITHUB: &str = "https://github.com/Fatimabutt786";

pub fn profile() -> Profile {
    Profile {
        name: "Fatima Butt".to_string(),
        tagline: "Aspiring Software Engineer".to_string(),
        email: "fatimabutt2k23@gmail.com".to_string(),
        location: "Lahore, Pakistan".to_string(),
        github_url: GITHUB.to_string(),
        linkedin_url: "https://www.linkedin.com/in/fatima-shahzad-bb31a529b/".to_string(),
        resume_path: "/images/Fatima Butt.pdf".to_string(),
        logo_path: "/images/Logo.png".to_string(),
        portrait_path: "/images/Me.png".to_string(),
        loves: [
            "⚡ Micro‑interactions that make UI feel alive",
            "🎨 Design systems, glassmorphism & vibrant gradients",
            "🧠 DSA mindset for performant code",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        toolbox: ["Wix", "Tailwind", "React", "Node", "Mongo", "C++ / OOP"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}

pub fn highlights() -> Vec<Highlight> {
    vec![
        Highlight::new(
            "Web Development",
            "💻 I create responsive, beautiful, and interactive websites using HTML, CSS, JS, Wix, and Tailwind. Focused on performance and UX!",
        ),
        Highlight::new(
            "Programming",
            "🖊️ Proficient in C, C++, Python, and Java. I solve complex problems, build algorithms, and enjoy coding challenges.",
        ),
        Highlight::new(
            "Problem Solving",
            "🧩 Completed 120+ LeetCode problems (Arrays, DP). I love tackling challenging problems and optimizing solutions.",
        ),
    ]
}

pub fn milestones() -> Vec<Milestone> {
    vec![
        Milestone::new(
            "2023–2027",
            "BSCS — Govt. University, Lahore",
            "Current CGPA 3.1 | Deepening CS & Advanced Calculus",
        ),
        Milestone::new("2024", "Frontend Focus", "Responsive sites with Wix + HTML/CSS/JS"),
        Milestone::new(
            "2025",
            "MERN Journey",
            "Building full‑stack apps, authentication & REST APIs",
        ),
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project::new(
            "Portfolio (Bootstrap)",
            "Responsive portfolio website.",
            &["Bootstrap", "HTML", "CSS"],
            "https://github.com/Fatimabutt786/My-portfolio-using-bootstrap",
            "/images/portfolio.webp",
        ),
        Project::new(
            "Rock‑Paper‑Scissors (C++)",
            "Console game with clean logic.",
            &["C++", "OOP"],
            "https://github.com/Fatimabutt786/Rock-paper-scissor-game-in-c-",
            "/images/Rock.jpg",
        ),
        Project::new(
            "Random Joke Generator",
            "Fetch jokes, playful UI.",
            &["JavaScript"],
            "https://github.com/Fatimabutt786/Random-joke-generator",
            "/images/joke.jpg",
        ),
        Project::new(
            "Music_Player (Java)",
            "OOP‑based library manager.",
            &["Java", "OOP"],
            "https://github.com/Fatimabutt786/Music_Player",
            "/images/music.webp",
        ),
        Project::new(
            "MERN Real‑Estate",
            "Listings, auth, Firebase hosting.",
            &["Mongo", "Express", "React", "Node", "Firebase"],
            "https://github.com/Fatimabutt786/Mern-Real-Estate",
            "/images/mern estate.jpg",
        ),
        Project::new(
            "Prescripto — Doctor Booking App",
            "Book appointments and manage schedules.",
            &["React", "Node", "Mongo", "Express", "Tailwind"],
            "https://github.com/Fatimabutt786/Prescripto",
            "/images/presc.png",
        ),
    ]
}

pub fn skills() -> Vec<Skill> {
    vec![
        Skill::new("HTML/CSS", 95),
        Skill::new("JavaScript", 85),
        Skill::new("Wix", 90),
        Skill::new("React", 80),
        Skill::new("C++ (OOP/DSA)", 88),
        Skill::new("Python", 70),
    ]
}

// ── Export format ────────────────────────────────────────────────────────

/// A navigation entry as written to `site.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavEntry {
    pub path: String,
    pub label: String,
}

/// Everything the site renders, in one serializable value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSnapshot {
    pub profile: Profile,
    pub routes: Vec<NavEntry>,
    pub highlights: Vec<Highlight>,
    pub milestones: Vec<Milestone>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
}

impl SiteSnapshot {
    pub fn bundled() -> Self {
        Self {
            profile: profile(),
            routes: ROUTES
                .iter()
                .map(|r| NavEntry {
                    path: r.path.to_string(),
                    label: r.label.to_string(),
                })
                .collect(),
            highlights: highlights(),
            milestones: milestones(),
            projects: projects(),
            skills: skills(),
        }
    }
}
