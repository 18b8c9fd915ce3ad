// SPDX-License-Identifier: MPL-2.0
//! Static portfolio content compiled into the binary.

use super::carousel::Identified;

/// A project shown in the gallery and its detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub tech_stack: &'static str,
    pub tags: &'static [&'static str],
    pub year: &'static str,
    pub description: &'static str,
    pub link: Option<&'static str>,
}

impl Identified for Project {
    type Id = &'static str;

    fn id(&self) -> Self::Id {
        self.id
    }
}

pub const PROJECTS: [Project; 6] = [
    Project {
        id: "1",
        title: "PC26 (Paper Cricket)",
        tech_stack: "JS • LocalStorage • Game Logic",
        tags: &["Game Dev", "Top Project", "400+ Users"],
        year: "2024",
        description: "My top game with 400+ active users worldwide. A multiplayer cricket \
            score simulator featuring a virtual coin toss system, friend invites, and complex \
            score tracking logic. Designed to bring the classroom classic to the web.",
        link: Some("https://pcwc.vercel.app/"),
    },
    Project {
        id: "2",
        title: "Forca OS",
        tech_stack: "HTML • CSS • JS",
        tags: &["Web OS", "Simulation"],
        year: "2024",
        description: "A web-based operating system simulation featuring draggable windows, \
            terminal commands, and theme customization. Built entirely with vanilla JavaScript \
            to demonstrate DOM manipulation mastery without frameworks.",
        link: Some("https://vercel.com/vesnis-projects"),
    },
    Project {
        id: "3",
        title: "Security Lab",
        tech_stack: "Python • Burp Suite • Nmap",
        tags: &["Security", "Ethical Hacking"],
        year: "2025",
        description: "A repository of sanitized CTF writeups and vulnerability reports from \
            controlled lab environments. Includes methodology for directory discovery using \
            gobuster and packet analysis with Wireshark.",
        link: Some("https://github.com/Vesni"),
    },
    Project {
        id: "4",
        title: "FB26 Tracker",
        tech_stack: "PHP • SQL • Analytics",
        tags: &["Sports Tech", "Full Stack"],
        year: "2024",
        description: "A football performance tracking application. Logs training sessions, \
            matches goals, and generates heatmaps. Demonstrates full-stack CRUD capabilities \
            and data visualization.",
        link: Some("https://github.com/Vesni"),
    },
    Project {
        id: "5",
        title: "Discord Tools",
        tech_stack: "Node.js • API",
        tags: &["Bot Dev", "Automation"],
        year: "2023",
        description: "Custom Discord bots and overlay tools for streamers. Handles server \
            moderation, live stats, and automated alerts using the Discord API.",
        link: None,
    },
    Project {
        id: "6",
        title: "Music Editor",
        tech_stack: "Audio Engineering",
        tags: &["Creative", "Audio"],
        year: "2023",
        description: "Portfolio of sound design and music editing work. Showcasing the \
            creative side of technical production.",
        link: Some("https://soundcloud.com/vesni-lanus"),
    },
];

pub const OWNER: &str = "VESNI";
pub const EMAIL: &str = "vesni277@gmail.com";

pub const HERO_CHIPS: [&str; 3] = ["Full-Stack Dev", "Ethical Pen-Tester", "Footballer"];
pub const HERO_TAGLINE: &str = "Mastered HTML • CSS • JS • PHP · Intermediate Python · \
    Ethical Security Research · Team player on and off the pitch.";
pub const MARQUEE: [&str; 4] = ["WEB DEVELOPMENT", "ETHICAL HACKING", "FOOTBALL", "GAMING"];

pub const BIO: [&str; 2] = [
    "I'm a results-first web developer and ethical security researcher who ships clean, \
     battle-tested sites and runs hands-on security assessments in controlled environments.",
    "Off keyboard, I have a captain-level mindset on the football pitch and compete in \
     gaming. I build small tools, experiment with new tech, and follow strict \
     responsible-disclosure practices for any security work.",
];

/// Skill matrix groups.
#[derive(Debug, Clone, Copy)]
pub struct Skills {
    pub mastered: &'static [&'static str],
    pub intermediate: &'static [&'static str],
    pub tools: &'static [&'static str],
}

pub const SKILLS: Skills = Skills {
    mastered: &["HTML5", "CSS3 / Tailwind", "JavaScript ES6+", "PHP"],
    intermediate: &["Python", "SQL / MySQL", "Git / GitHub", "Ethical Hacking"],
    tools: &["Burp Suite", "Nmap", "Wireshark", "Gobuster", "VS Code"],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub label: &'static str,
    pub link: Option<&'static str>,
}

pub const TECH_HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        label: "Google Developer Badge Holder",
        link: None,
    },
    Highlight {
        label: "Open Source Contributor",
        link: None,
    },
    Highlight {
        label: "Active Discord Developer: ethical_vesni",
        link: None,
    },
];

pub const LIFE_HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        label: "Official ICA Box Cricket Player",
        link: Some("https://cricheroes.com/player-profile/43662014/vesni/matches"),
    },
    Highlight {
        label: "Competitive Gamer",
        link: None,
    },
    Highlight {
        label: "Music Editor",
        link: None,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Social {
    pub name: &'static str,
    pub url: &'static str,
}

pub const SOCIALS: [Social; 7] = [
    Social {
        name: "GitHub",
        url: "https://github.com/Vesni",
    },
    Social {
        name: "YouTube",
        url: "https://www.youtube.com/@NotebookLMgoogl",
    },
    Social {
        name: "Discord",
        url: "https://discord.gg/tZE7WEkyhH",
    },
    Social {
        name: "Instagram",
        url: "https://www.instagram.com/https.vesni/",
    },
    Social {
        name: "Twitter",
        url: "https://x.com/NextYTreal",
    },
    Social {
        name: "SoundCloud",
        url: "https://soundcloud.com/vesni-lanus",
    },
    Social {
        name: "Vercel",
        url: "https://vercel.com/vesnis-projects",
    },
];

/// Where a service card's call to action leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceAction {
    /// Jumps to the project gallery.
    ShowProjects,
    Mail { subject: &'static str },
}

impl ServiceAction {
    /// Text form of the target, for display and copying.
    #[must_use]
    pub fn target(self) -> String {
        match self {
            ServiceAction::ShowProjects => "#projects".to_string(),
            ServiceAction::Mail { subject } => {
                format!("mailto:{EMAIL}?subject={}", subject.replace(' ', "%20"))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub action_label: &'static str,
    pub action: ServiceAction,
}

pub const SERVICES: [Service; 3] = [
    Service {
        title: "Web Dev",
        description: "Fast, responsive, and accessible websites built with modern standards.",
        features: &["Custom Frontend", "PHP Backend", "SEO Friendly"],
        action_label: "View Projects",
        action: ServiceAction::ShowProjects,
    },
    Service {
        title: "Security Audit",
        description: "Vulnerability assessments and hardening for your web applications.",
        features: &["Penetration Testing", "Report Writing", "Remediation"],
        action_label: "Request Audit",
        action: ServiceAction::Mail {
            subject: "Security Audit",
        },
    },
    Service {
        title: "Collaboration",
        description: "Looking for a teammate? I bring leadership from the pitch to the repo.",
        features: &["Open Source", "Team Leadership", "Mentorship"],
        action_label: "Let's Talk",
        action: ServiceAction::Mail {
            subject: "Collaboration",
        },
    },
];

pub const DISCLOSURE: &str = "All security testing shown is performed in legal, controlled \
    environments or with explicit permission. I do not condone illicit hacking. Contact me \
    to report potential vulnerabilities.";
