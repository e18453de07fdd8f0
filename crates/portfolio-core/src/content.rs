//! Static page content and its markup.

use std::fmt::Write;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8, // percent
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Planned => "Planned",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "status-completed",
            ProjectStatus::InProgress => "status-in-progress",
            ProjectStatus::Planned => "status-planned",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub status: ProjectStatus,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineEntry {
    pub title: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

pub struct Contact {
    pub heading: &'static str,
    pub blurb: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub links: &'static [(&'static str, &'static str)], // (label, href)
}

pub struct Hero {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub call_to_action: &'static str,
}

pub const HERO: Hero = Hero {
    title: "PORTFOLIO",
    subtitle: "Welcome to my digital space",
    call_to_action: "Explore My Work",
};

pub const ABOUT: &str = "Developer drawn to the places where design meets engineering: \
interfaces that feel alive, tools that stay out of the way, and code that is pleasant to \
come back to.";

pub const SKILLS: &[Skill] = &[
    Skill { name: "Rust", level: 85 },
    Skill { name: "TypeScript", level: 90 },
    Skill { name: "React", level: 88 },
    Skill { name: "WebAssembly", level: 75 },
    Skill { name: "Canvas / WebGL", level: 70 },
    Skill { name: "Node.js", level: 80 },
    Skill { name: "SQL", level: 72 },
    Skill { name: "UI / UX Design", level: 78 },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Starfield Portfolio",
        description: "This site: scroll-driven sections over canvas starfield, nebula and particle layers.",
        tech: &["Rust", "WebAssembly", "Canvas 2D"],
        status: ProjectStatus::Completed,
    },
    Project {
        title: "Orbit Tracker",
        description: "Live satellite pass predictions rendered on an interactive globe.",
        tech: &["TypeScript", "WebGL", "REST"],
        status: ProjectStatus::InProgress,
    },
    Project {
        title: "Pixel Forge",
        description: "Browser pixel-art editor with layers, palettes and animated sprite export.",
        tech: &["React", "Canvas", "IndexedDB"],
        status: ProjectStatus::Completed,
    },
    Project {
        title: "Signal Board",
        description: "Self-hosted dashboard aggregating build, uptime and deploy signals.",
        tech: &["Rust", "Axum", "SQLite"],
        status: ProjectStatus::Planned,
    },
];

pub const EXPERIENCE: &[TimelineEntry] = &[
    TimelineEntry {
        title: "Frontend Engineer",
        organization: "Nova Labs",
        period: "2023 - Present",
        description: "Design system components, animation tooling and performance work on a data-heavy web app.",
    },
    TimelineEntry {
        title: "Web Developer Intern",
        organization: "Pixel Studio",
        period: "2022 - 2023",
        description: "Built marketing sites and interactive landing pages for client campaigns.",
    },
];

pub const EDUCATION: &[TimelineEntry] = &[TimelineEntry {
    title: "B.Sc. Computer Science",
    organization: "State University",
    period: "2019 - 2023",
    description: "Focus on computer graphics and human-computer interaction.",
}];

pub const CONTACT: Contact = Contact {
    heading: "Get In Touch",
    blurb: "Have a project in mind or just want to say hello? Send a message.",
    email: "hello@example.com",
    location: "Remote",
    links: &[
        ("GitHub", "https://github.com/"),
        ("LinkedIn", "https://www.linkedin.com/"),
    ],
};

/// Minimal HTML text escaping for inner text and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn hero_html(hero: &Hero) -> String {
    format!(
        "<h1 class='portfolio-title'>{}</h1><p class='portfolio-subtitle'>{}</p>\
         <a class='cta' href='#projects' data-section='projects'>{}</a>",
        escape_html(hero.title),
        escape_html(hero.subtitle),
        escape_html(hero.call_to_action)
    )
}

pub fn skills_html(skills: &[Skill]) -> String {
    let mut html = String::from("<ul class='skills'>");
    for s in skills {
        let level = s.level.min(100);
        _ = write!(
            html,
            "<li class='skill'><span class='skill-name'>{}</span>\
             <div class='skill-bar'><div class='skill-fill' style='width:{}%'></div></div>\
             <span class='skill-level'>{}%</span></li>",
            escape_html(s.name),
            level,
            level
        );
    }
    html.push_str("</ul>");
    html
}

pub fn projects_html(projects: &[Project]) -> String {
    let mut html = String::from("<div class='projects'>");
    for p in projects {
        let tech: String = p
            .tech
            .iter()
            .map(|t| format!("<span class='tech'>{}</span>", escape_html(t)))
            .collect();
        _ = write!(
            html,
            "<article class='project'><h3>{}</h3><p>{}</p><div class='tech-list'>{}</div>\
             <span class='status {}'>{}</span></article>",
            escape_html(p.title),
            escape_html(p.description),
            tech,
            p.status.css_class(),
            p.status.label()
        );
    }
    html.push_str("</div>");
    html
}

pub fn timeline_html(heading: &str, entries: &[TimelineEntry]) -> String {
    let mut html = format!("<div class='timeline'><h2>{}</h2>", escape_html(heading));
    for e in entries {
        _ = write!(
            html,
            "<div class='timeline-entry'><h3>{}</h3><span class='org'>{}</span>\
             <span class='period'>{}</span><p>{}</p></div>",
            escape_html(e.title),
            escape_html(e.organization),
            escape_html(e.period),
            escape_html(e.description)
        );
    }
    html.push_str("</div>");
    html
}

pub fn about_html() -> String {
    format!("<p class='about-text'>{}</p>{}", escape_html(ABOUT), skills_html(SKILLS))
}

pub fn resume_html() -> String {
    format!(
        "{}{}",
        timeline_html("Experience", EXPERIENCE),
        timeline_html("Education", EDUCATION)
    )
}

/// Contact details plus a static form. There is no backend; the front-end
/// swallows its submit event.
pub fn contact_html(contact: &Contact) -> String {
    let email = escape_html(contact.email);
    let mut html = format!(
        "<h2>{}</h2><p class='contact-blurb'>{}</p><ul class='contact-info'>\
         <li><a href='mailto:{email}'>{email}</a></li><li>{}</li>",
        escape_html(contact.heading),
        escape_html(contact.blurb),
        escape_html(contact.location),
    );
    for (label, href) in contact.links {
        _ = write!(
            html,
            "<li><a href='{}' target='_blank' rel='noopener'>{}</a></li>",
            escape_html(href),
            escape_html(label)
        );
    }
    html.push_str(
        "</ul><form class='contact-form'>\
         <label>Name<input type='text' name='name' required></label>\
         <label>Email<input type='email' name='email' required></label>\
         <label>Message<textarea name='message' rows='5' required></textarea></label>\
         <button type='submit'>Send Message</button></form>",
    );
    html
}
