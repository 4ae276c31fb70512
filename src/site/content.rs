// Static page content. Everything here is defined once and never mutated.

#[derive(Clone, Copy, Debug)]
pub struct NavItem {
    pub name: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct ExternalLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Profile {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub initials: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
    pub links: &'static [ExternalLink],
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Education {
    pub degree: &'static str,
    pub field: Option<&'static str>,
    pub institution: &'static str,
    pub period: &'static str,
    pub score: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub title: &'static str,
    pub period: &'static str,
    pub tech: &'static [&'static str],
    pub description: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Clone, Copy, Debug)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Clone, Copy, Debug)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    LinkedIn,
}

#[derive(Clone, Copy, Debug)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub label: &'static str,
    pub detail: &'static str,
    pub href: &'static str,
}

impl ContactLink {
    /// `mailto:` and `tel:` links stay in the page; anything else opens in a
    /// new browsing context.
    pub fn is_external(&self) -> bool {
        !(self.href.starts_with("mailto:") || self.href.starts_with("tel:"))
    }
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { name: "Home" },
    NavItem { name: "About" },
    NavItem { name: "Projects" },
    NavItem { name: "Experience" },
    NavItem { name: "Skills" },
    NavItem { name: "Contact" },
];

const GITHUB_URL: &str = "https://github.com/HusainS07";
const LINKEDIN_URL: &str = "https://linkedin.com/in/mohamed-husain-sakarwala-b9b0b2226";

pub const PROFILE: Profile = Profile {
    first_name: "Mohamed Husain",
    last_name: "Sakarwala",
    initials: "MHS",
    headline: "Computer Engineering Student & Full-Stack Developer",
    summary: "Crafting innovative solutions at the intersection of AI, web development, and \
              embedded systems. Currently pursuing B.Tech at VJTI Mumbai with a passion for \
              building impactful technology.",
    links: &[
        ExternalLink {
            label: "GitHub",
            href: GITHUB_URL,
        },
        ExternalLink {
            label: "LinkedIn",
            href: LINKEDIN_URL,
        },
    ],
};

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "Bachelor of Technology (B.Tech)",
        field: Some("Computer Engineering"),
        institution: "VJTI Mumbai",
        period: "2024 – Present",
        score: "CGPA: 8.28",
    },
    Education {
        degree: "Diploma in Electronics Engineering",
        field: None,
        institution: "VJTI Mumbai",
        period: "2021 – 2024",
        score: "Percentage: 98.11% | State Rank 10",
    },
];

pub const ACHIEVEMENTS: &[&str] = &[
    "Scored 98.11% in Diploma and secured State Rank 10",
    "Point Status Acquisition & Locomotive Speed Control recognized at DJ Spark 2024, featured \
     in DJ Sanghvi's magazine with Patent filed",
    "Completed Hacktoberfest 2024 with merged pull requests across multiple open-source domains",
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Smart Parking System",
        period: "Mar 2025 – May 2025",
        tech: &["Next.js", "React", "Node.js", "MongoDB", "LangChain"],
        description: "Full-stack smart parking platform with real-time booking, admin-controlled \
                      slot management, and WebSocket integration.",
        highlights: &[
            "Real-time slot updates using Pusher (WebSockets)",
            "Integrated Razorpay for seamless payments",
            "AI-powered support using RAG pipeline with DeepSeek R1, improving response \
             accuracy by 40%",
        ],
    },
    Project {
        title: "Cybersecurity Threat Detection System",
        period: "June 2025 – Aug 2025",
        tech: &["Next.js", "FastAPI", "Scikit-learn"],
        description: "Advanced cybersecurity platform featuring phishing detection and malicious \
                      file classification.",
        highlights: &[
            "Phishing URL Detector with 95% accuracy using Random Forest",
            "Malicious File Classifier for .exe, .pdf, and .docx files",
            "Static feature extraction including entropy, file size, and metadata analysis",
        ],
    },
    Project {
        title: "AI Fitness and Nutrition Coach",
        period: "Dec 2024 – Feb 2025",
        tech: &["Next.js", "React", "Node.js", "MongoDB"],
        description: "Intelligent fitness companion with personalized nutrition recommendations \
                      and diet tracking.",
        highlights: &[
            "Interactive chatbot powered by DeepSeek R1",
            "Profile-based calendar for personalized diet tracking",
            "Secure authentication using NextAuth.js",
        ],
    },
];

pub const EXPERIENCE: &[Experience] = &[Experience {
    role: "Embedded Engineering Intern",
    company: "SCAD Technologies",
    period: "June 2023 – July 2023",
    highlights: &[
        "Optimized Arduino UART and ADC register-level code, boosting sensor response by 30%",
        "Engineered sensor-based automation systems using Embedded C++, enhancing data \
         acquisition efficiency by 25%",
    ],
}];

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        name: "Languages",
        skills: &["C++", "Embedded C", "Python", "JavaScript", "HTML", "CSS", "SQL"],
    },
    SkillCategory {
        name: "Developer Tools",
        skills: &[
            "VS Code",
            "Git",
            "GitHub",
            "MongoDB Compass",
            "Google Colab",
            "Jupyter Notebook",
        ],
    },
    SkillCategory {
        name: "Technologies",
        skills: &[
            "React",
            "Node.js",
            "Next.js",
            "FastAPI",
            "MongoDB",
            "LangChain",
            "Scikit-learn",
        ],
    },
];

pub const CONTACT_BLURB: &str = "I'm always open to discussing new projects, creative ideas, or \
                                 opportunities to be part of your vision. Feel free to reach out!";

pub const CONTACTS: &[ContactLink] = &[
    ContactLink {
        kind: ContactKind::Email,
        label: "Email",
        detail: "mhs.sakarwala@gmail.com",
        href: "mailto:mhs.sakarwala@gmail.com",
    },
    ContactLink {
        kind: ContactKind::Phone,
        label: "Phone",
        detail: "+91 8779919850",
        href: "tel:+918779919850",
    },
    ContactLink {
        kind: ContactKind::LinkedIn,
        label: "LinkedIn",
        detail: "Connect with me",
        href: LINKEDIN_URL,
    },
];

pub const COPYRIGHT_YEAR: u16 = 2025;
