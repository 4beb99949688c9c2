//! Static content catalog.
//!
//! Everything the panels render but never mutate: the project list, the
//! about/resume/contact copy, and the owner's identity strings. All data
//! is `'static` and constructed at compile time; consumers borrow it.

/// Name shown in the header box and window title.
pub const OWNER_NAME: &str = "WAFEE RAHMAN";

/// Role line on the home panel.
pub const OWNER_ROLE: &str = "Software Engineer & Computer Science Student";

/// Start gate prompt text.
pub const START_PROMPT: &str = "PRESS ANY KEY / CLICK TO START";

/// Home panel intro paragraph.
pub const HOME_INTRO: &str = "Explore my portfolio to learn about my projects, \
skills, and experience. You can contact me at:";

/// Projects panel intro paragraph.
pub const PROJECTS_INTRO: &str = "Click on a project to see more details, all of \
the repositories are available via github. More Projects coming soon, with a \
focus on computer vision & graphics next.";

/// Contact panel intro paragraph.
pub const CONTACT_INTRO: &str = "I'm always open to new opportunities and \
collaborations. Feel free to reach out using the form below or through my \
contact information.";

/// An entry in the project catalog.
#[derive(Debug, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub short_desc: &'static str,
    pub tags: &'static [&'static str],
    pub long_desc: &'static str,
    pub features: &'static [&'static str],
    pub technologies: &'static str,
    pub challenges: &'static str,
    /// Screenshot URL; `None` renders a placeholder label.
    pub image: Option<&'static str>,
}

static PROJECTS: &[Project] = &[
    Project {
        id: "explore-toronto",
        title: "Explore Toronto - Full-Stack Application",
        short_desc: "Web application for posting and reviewing tourist locations in Toronto.",
        tags: &["MongoDB", "Express", "React", "Node"],
        long_desc: "A full-featured web application that enables users to discover, post, \
and review tourist locations throughout Toronto. This project demonstrates full-stack \
development with the MERN stack and incorporates mapping features.",
        features: &[
            "Built 3 data models and respective create, read, update, and delete methods to streamline data operations",
            "Developed 16+ REST API routes, responding with middleware and validation for secure client requests",
            "Used PassportJS and Session cookies to encrypt and authenticate user credentials, enhancing site security",
            "Designed a responsive UI with real-time mapping using MapboxGL and Material UI to enhance user experience",
        ],
        technologies: "MongoDB, Express.js, React, Node.js, Passport.js, MapboxGL, Material UI",
        challenges: "One of the main challenges was implementing real-time mapping functionality \
while ensuring optimal performance. This was addressed by optimizing data loading and \
implementing efficient state management.",
        image: Some("https://github.com/user-attachments/assets/4c5252b0-7ec1-4fac-8f45-f42295f4a584"),
    },
    Project {
        id: "clipshare",
        title: "ClipShare Library - Video Processing Service",
        short_desc: "Scalable cloud video storage solution with processing capabilities.",
        tags: &["Firebase", "NextJS", "React", "Google Cloud Platform"],
        long_desc: "A scalable cloud video storage solution that compresses, processes, and \
displays user-uploaded videos. This project leverages cloud technologies to create a \
seamless video management experience.",
        features: &[
            "Programmed and containerized processing service on Google Cloud using Docker for seamless video processing",
            "Pipelined data between Cloud Storage buckets via Pub/Sub messaging queues to automate raw video encoding",
            "Deployed 5+ GCP Cloud Run functions for serverless video upload processing and secure user authentication",
            "Produced frontend application using TypeScript, React, and Next.js, allowing users to interact with uploads",
        ],
        technologies: "Firebase, Next.js, React, Google Cloud Platform, Docker, Cloud Run, Pub/Sub, Cloud Storage",
        challenges: "Managing the video processing pipeline efficiently was a significant \
challenge. We implemented a robust queuing system to handle the processing load and ensure \
videos were encoded correctly.",
        image: Some("https://github.com/user-attachments/assets/3dd91985-422e-448f-b69b-1424d9c364b3"),
    },
    Project {
        id: "weatherly",
        title: "Weatherly - A Machine Learning Meteorologist",
        short_desc: "ML-Driven weather forecasting platform with real-time predictions.",
        tags: &["TensorFlow 2.0", "Spring Boot", "React", "AWS"],
        long_desc: "A full-stack machine learning weather forecasting platform that provides \
accurate predictions based on historical data and implements LLM technology to explain \
results in natural language.",
        features: &[
            "Transformed and preprocessed 10,000+ rows of weather data to construct a feature set for prediction models",
            "Optimized prediction model accuracy by 25% using LSTM-based temperature forecasting with TensorFlow 2.0",
            "Engineered Large Language Model (LLM) to explain real-time predictions using Spring Boot and OpenAI API",
            "Deployed Spring Boot application on AWS EC2 Linux Virtual Machine to autonomously serve production build",
        ],
        technologies: "TensorFlow 2.0, Spring Boot, React, AWS EC2, LSTM Neural Networks, OpenAI API",
        challenges: "Achieving high accuracy in weather prediction required extensive data \
preprocessing and model tuning. We experimented with various architectures before settling \
on the LSTM approach that yielded the best results.",
        image: Some("https://github.com/user-attachments/assets/7e4c95b2-68b7-428d-a671-0df79ab7c02f"),
    },
];

/// The project catalog, in display order.
pub fn projects() -> &'static [Project] {
    PROJECTS
}

/// Looks up a project by its stable id.
pub fn project_by_id(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

/// A skill pill on the about panel.
#[derive(Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
}

static SKILLS: &[Skill] = &[
    Skill { name: "Full-Stack Development", icon: "💻" },
    Skill { name: "Python", icon: "🐍" },
    Skill { name: "JavaScript/TypeScript", icon: "📜" },
    Skill { name: "React", icon: "⚛️" },
    Skill { name: "Node.js", icon: "🟢" },
    Skill { name: "Cloud Computing", icon: "☁️" },
    Skill { name: "Machine Learning", icon: "🤖" },
    Skill { name: "Data Analysis", icon: "📊" },
];

/// Core skills shown on the about panel.
pub fn skills() -> &'static [Skill] {
    SKILLS
}

/// Paragraphs of the about panel intro.
pub fn about_paragraphs() -> &'static [&'static str] {
    &[
        "I'm a Computer Science student at Toronto Metropolitan University with a passion \
for software engineering and development. My journey in technology is focused on creating \
meaningful solutions that combine innovation with practical applications.",
        "Currently in the co-op program, I've had the opportunity to work with TD Securities \
and TD Insurance, where I've developed automations, optimized processes, and contributed to \
various projects using Python, TypeScript, SQL, and other technologies.",
        "I'm particularly interested in full-stack development, cloud technologies, and \
machine learning. My projects reflect these interests, combining robust backend systems \
with intuitive user interfaces.",
    ]
}

/// Interests list on the about panel.
pub fn interests() -> &'static [&'static str] {
    &[
        "Building innovative web applications that solve real-world problems",
        "Exploring machine learning and AI technologies",
        "Cloud architecture and serverless computing",
        "Open-source contribution and community involvement",
        "UI/UX design and creating intuitive user experiences",
    ]
}

/// A professional experience entry on the resume.
#[derive(Debug, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub position: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub duration: &'static str,
    pub bullets: &'static [&'static str],
}

static EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        position: "Software Engineer Intern - Process Innovation & Data Analytics",
        company: "TD Securities",
        location: "Toronto, ON",
        duration: "May 2025 - August 2025",
        bullets: &[
            "Led the development of 6 software automation projects from requirements to deployment, each eliminating 500 hours of manual intervention annually using TypeScript and the Numpy stack",
            "Accelerated structured notes preprocessing by 90% through automated PDF parsing with Python Regex patterns",
            "Reduced operational costs by $16,000 annually by automating daily Excel calculations with TypeScript",
            "Automated manual support script execution with a Flask/FastAPI architecture, saving 1040 hours annually",
        ],
    },
    ExperienceEntry {
        position: "Digitization, Automation, Workflow (DAW) Intern",
        company: "TD Insurance (TDI)",
        location: "Toronto, ON",
        duration: "September 2024 - April 2025",
        bullets: &[
            "Supported project delivery and management for DAW teams with Git, Jira, and Confluence DevOps tools",
            "Automated manual spreadsheet tasks by creating Excel scripts with TypeScript, significantly reducing labor time",
            "Analyzed production defects and conducted root cause analysis with SQL, saving over $10,000 in annual costs",
            "Facilitated project maintenance of 18+ automation deployments, ensuring service-level performance metrics",
            "Streamlined quarterly KPI reporting by automating 1,000+ daily report extractions with Python and Powerapps",
        ],
    },
];

/// Resume experience entries, most recent first.
pub fn experience() -> &'static [ExperienceEntry] {
    EXPERIENCE
}

/// An education entry on the resume.
#[derive(Debug, PartialEq, Eq)]
pub struct EducationEntry {
    pub institution: &'static str,
    pub degree: Option<&'static str>,
    pub duration: &'static str,
    pub gpa: Option<&'static str>,
    pub coursework_title: &'static str,
    pub coursework: &'static [&'static str],
}

static EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        institution: "Toronto Metropolitan University (Formerly Ryerson University)",
        degree: Some("Bachelor of Science, Computer Science Co-Op"),
        duration: "May 2027 (Expected)",
        gpa: Some("GPA: 4.03 / 4.33"),
        coursework_title: "Relevant Coursework:",
        coursework: &[
            "CPS109/209 - Python & Java programming, OOP, algorithms",
            "CPS213/310 - Logic circuits, CPU & ISA design",
            "CPS305 - Trees, graphs, algorithm analysis",
            "CPS590 - Processes, memory, file systems (OS)",
            "CPS406 - OO software engineering, UML",
            "CPS530 - Full-stack Web (Perl, Ruby, CGI, Apache)",
            "CPS393 - UNIX & C systems programming",
        ],
    },
    EducationEntry {
        institution: "Udemy - Full-Stack Web Developer Bootcamp 2023 (Colt Steele)",
        degree: None,
        duration: "Attained 2023",
        gpa: None,
        coursework_title: "Key Topics Covered:",
        coursework: &[
            "HTML 5, CSS 3, responsive & accessible design",
            "Modern JavaScript (ES6+), DOM manipulation, tooling",
            "Node.js, Express, RESTful API design",
            "MongoDB & Mongoose data modeling",
            "React fundamentals & component architecture",
            "Deployment workflows & full-stack capstone projects",
        ],
    },
];

/// Resume education entries.
pub fn education() -> &'static [EducationEntry] {
    EDUCATION
}

/// A titled group of skill tags on the resume.
#[derive(Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub entries: &'static [&'static str],
}

static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Programming Languages:",
        entries: &["Python", "Javascript", "C", "Java", "Lisp"],
    },
    SkillCategory {
        title: "Technologies:",
        entries: &[
            "HTML/CSS", "Git", "Node.js", "REST", "Express.js", "Bash", "Linux",
            "MongoDB", "ReactJS", "NextJS", "Firebase", "UNIX",
        ],
    },
    SkillCategory {
        title: "Developer Tools:",
        entries: &[
            "Git", "Docker", "Google Cloud Platform", "Visual Studio", "PyCharm",
            "IntelliJ", "Jira", "Confluence",
        ],
    },
    SkillCategory {
        title: "Familiar:",
        entries: &["Perl", "PHP", "Ruby", "Apache", "CGI", "ASP", "XML"],
    },
];

/// Technical skill groups on the resume.
pub fn skill_categories() -> &'static [SkillCategory] {
    SKILL_CATEGORIES
}

static AWARD_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Honours:",
        entries: &["2022 - 2023, 2023 - 2024 Faculty of Science Dean's List"],
    },
    SkillCategory {
        title: "Awards:",
        entries: &[
            "2022 CHFT Diversity Scholarship",
            "2022 Investing in Our Diversity (IIOD) Scholarship",
            "2023 Randy Padmore Anti-Racism Scholarship",
            "2023-2024 Alexandra Park Revitalization Scholarship",
            "2024 TD Securities Bridging the Gap Scholarship",
        ],
    },
];

/// Awards and honours groups on the resume.
pub fn award_categories() -> &'static [SkillCategory] {
    AWARD_CATEGORIES
}

/// A labeled contact row, optionally linked.
#[derive(Debug, PartialEq, Eq)]
pub struct ContactRow {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub link: Option<&'static str>,
}

static CONTACT_ROWS: &[ContactRow] = &[
    ContactRow {
        icon: "📧",
        label: "Email",
        value: "Wafee.Rahman842@gmail.com",
        link: Some("mailto:Wafee.Rahman842@gmail.com"),
    },
    ContactRow {
        icon: "📱",
        label: "Phone",
        value: "647-570-3356",
        link: Some("tel:6475703356"),
    },
    ContactRow {
        icon: "🏫",
        label: "University",
        value: "Toronto Metropolitan University",
        link: None,
    },
    ContactRow {
        icon: "📍",
        label: "Location",
        value: "Toronto, ON, Canada",
        link: None,
    },
];

/// Contact info rows on the contact panel.
pub fn contact_rows() -> &'static [ContactRow] {
    CONTACT_ROWS
}

static HOME_LINKS: &[ContactRow] = &[
    ContactRow {
        icon: "📧",
        label: "Email",
        value: "Wafee.Rahman842@gmail.com",
        link: Some("mailto:Wafee.Rahman842@gmail.com"),
    },
    ContactRow {
        icon: "🔗",
        label: "LinkedIn",
        value: "linkedin.com/in/wafeerahman",
        link: Some("https://linkedin.com/in/wafeerahman"),
    },
    ContactRow {
        icon: "💻",
        label: "GitHub",
        value: "github.com/WafeeRahman",
        link: Some("https://github.com/WafeeRahman"),
    },
    ContactRow {
        icon: "📱",
        label: "Phone",
        value: "647-570-3356",
        link: None,
    },
];

/// Quick links on the home panel.
pub fn home_links() -> &'static [ContactRow] {
    HOME_LINKS
}

/// A social media link on the contact panel.
#[derive(Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub url: &'static str,
}

static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        icon: "L",
        label: "LinkedIn",
        url: "https://linkedin.com/in/wafeerahman",
    },
    SocialLink {
        icon: "G",
        label: "GitHub",
        url: "https://github.com/WafeeRahman",
    },
];

/// Social links on the contact panel.
pub fn social_links() -> &'static [SocialLink] {
    SOCIAL_LINKS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_three_projects() {
        assert_eq!(projects().len(), 3);
    }

    #[test]
    fn test_project_ids_unique() {
        let mut ids: Vec<&str> = projects().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), projects().len());
    }

    #[test]
    fn test_project_lookup() {
        let project = project_by_id("weatherly").unwrap();
        assert!(project.title.starts_with("Weatherly"));
        assert!(project_by_id("nope").is_none());
    }

    #[test]
    fn test_projects_are_fully_populated() {
        for project in projects() {
            assert!(!project.tags.is_empty());
            assert!(!project.features.is_empty());
            assert!(!project.long_desc.is_empty());
            assert!(!project.challenges.is_empty());
        }
    }

    #[test]
    fn test_resume_content_present() {
        assert_eq!(experience().len(), 2);
        assert_eq!(education().len(), 2);
        assert_eq!(skill_categories().len(), 4);
        assert_eq!(award_categories().len(), 2);
    }
}
