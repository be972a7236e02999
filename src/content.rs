use pulldown_cmark::{html, Options, Parser};

pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityKind {
    Project,
    Blog,
    Update,
}

impl ActivityKind {
    pub fn dot_class(self) -> &'static str {
        match self {
            ActivityKind::Project => "dot dot-project",
            ActivityKind::Blog => "dot dot-blog",
            ActivityKind::Update => "dot dot-update",
        }
    }
}

pub struct Activity {
    pub action: &'static str,
    pub when: &'static str,
    pub kind: ActivityKind,
}

pub struct Channel {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub note: &'static str,
}

pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

pub const OVERVIEW_STATS: [Stat; 4] = [
    Stat { label: "Projects Completed", value: "6" },
    Stat { label: "Client Satisfaction", value: "98%" },
    Stat { label: "Years Experience", value: "1+" },
    Stat { label: "Response Time", value: "< 2h" },
];

pub const SKILLS: [Skill; 4] = [
    Skill { name: "React", level: 95 },
    Skill { name: "Node.js & Express", level: 80 },
    Skill { name: "Java", level: 85 },
    Skill { name: "SQL", level: 70 },
];

pub const RECENT_ACTIVITY: [Activity; 4] = [
    Activity { action: "Launched E-commerce Platform", when: "2 days ago", kind: ActivityKind::Project },
    Activity { action: "Published React Performance Guide", when: "1 week ago", kind: ActivityKind::Blog },
    Activity { action: "Updated Portfolio Design", when: "2 weeks ago", kind: ActivityKind::Update },
    Activity { action: "Released Mobile App", when: "1 month ago", kind: ActivityKind::Project },
];

pub const CONTACT_STATS: [Stat; 3] = [
    Stat { label: "Response Time", value: "< 24h" },
    Stat { label: "Time Zone", value: "IST" },
    Stat { label: "Happy Clients", value: "50+" },
];

pub const CHANNELS: [Channel; 3] = [
    Channel { label: "Email", value: "hello@example.com", href: "mailto:hello@example.com", note: "Drop me a line anytime" },
    Channel { label: "Phone", value: "+91 XXXXXXXXXX", href: "tel:+91XXXXXXXXXX", note: "Mon-Fri from 9am to 6pm" },
    Channel { label: "Location", value: "Hyderabad, India", href: "#", note: "Available for remote work" },
];

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { name: "LinkedIn", url: "#" },
    SocialLink { name: "GitHub", url: "#" },
    SocialLink { name: "Twitter", url: "#" },
    SocialLink { name: "Dribbble", url: "#" },
];

const ABOUT_MD: &str = include_str!("../content/about.md");

pub fn render_markdown(src: &str) -> String {
    let mut out = String::with_capacity(src.len() * 3 / 2);
    html::push_html(&mut out, Parser::new_ext(src, Options::ENABLE_STRIKETHROUGH));
    out
}

pub fn about_html() -> String {
    render_markdown(ABOUT_MD)
}
