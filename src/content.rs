//! Static content rendered by the portfolio sections.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub id: &'static str,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "About", id: "about" },
    NavItem { label: "Experience", id: "experience" },
    NavItem { label: "Projects", id: "projects" },
    NavItem { label: "Contact", id: "contact" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub glyph: &'static str,
    pub label: &'static str,
}

pub const ABOUT_HIGHLIGHTS: [Highlight; 3] = [
    Highlight { glyph: "🧠", label: "AI Development" },
    Highlight { glyph: "👁", label: "Computer Vision" },
    Highlight { glyph: "📈", label: "Technical Growth" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub title: &'static str,
    pub company: &'static str,
    pub parent_company: Option<&'static str>,
    pub location: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
}

pub const EXPERIENCE: [ExperienceEntry; 5] = [
    ExperienceEntry {
        title: "AI Developer",
        company: "GROW AI",
        parent_company: Some("iQue Ventures"),
        location: "Madiwala, Bengaluru",
        duration: "2026 - Present",
        description: "Building real-time person detection and multi-object tracking systems for live video analytics, optimizing end-to-end stream processing and improving accuracy through threshold tuning and tracking refinement.",
    },
    ExperienceEntry {
        title: "AI Developer",
        company: "Owlytics",
        parent_company: Some("iQue Ventures"),
        location: "Madiwala, Bengaluru",
        duration: "2025 - 2026",
        description: "Designed and deployed deep learning models for detection and recognition tasks, building scalable ML pipelines from preprocessing to deployment and integrating AI solutions seamlessly into production backend systems.",
    },
    ExperienceEntry {
        title: "Research Analyst",
        company: "Rpinnacle Research Solutions",
        parent_company: Some("Resbee"),
        location: "Thuckalay, Tamil Nadu",
        duration: "2024 - 2025",
        description: "Produced technical documentation for deep learning and data science research, contributing to dataset analysis, experimental evaluation, and comparative model benchmarking.",
    },
    ExperienceEntry {
        title: "Python-Intern",
        company: "Srishti Innovations",
        parent_company: Some("Techno Park"),
        location: "Thiruvananthapuram, Kerala",
        duration: "July 2023",
        description: "Enhanced Python programming skills and explored software development methodologies through hands-on projects and practical applications.",
    },
    ExperienceEntry {
        title: "Inplant Training",
        company: "iTrobes Technologies Pvt. Ltd.",
        parent_company: None,
        location: "Marthandam, Tamil Nadu",
        duration: "July 2022",
        description: "Gained industry exposure to software development practices and team collaboration, strengthening practical understanding of real-world workflows.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub year: Option<&'static str>,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub glyph: &'static str,
    pub link: Option<&'static str>,
}

pub const PROJECTS: [Project; 6] = [
    Project {
        title: "AI Batting Classification",
        year: Some("2026"),
        description: "An intelligent computer vision system that processes uploaded cricket videos to identify and classify batting shots, analyze performance metrics, and predict outcomes for advanced sports analytics.",
        features: &["Deep Learning", "Prediction", "Classification"],
        glyph: "🏏",
        link: None,
    },
    Project {
        title: "AI Recognition & Detection",
        year: Some("2026"),
        description: "An advanced AI-powered system for real-time recognition and detection using IP cameras and deep learning techniques, enabling accurate identification, classification, tracking, and intelligent video analysis.",
        features: &["Deep Learning", "Detection", "Recognition"],
        glyph: "🎥",
        link: None,
    },
    Project {
        title: "Vision Snap",
        year: Some("2025"),
        description: "Vision Snap is a web based tool for creating image datasets for computer vision. It captures images from live webcams and extracts frames from uploaded videos. Users can organize samples into custom classes and export them as machine learning ready datasets.",
        features: &["Webcam Capture", "Video Frame Extraction", "Dataset Creation"],
        glyph: "📸",
        link: None,
    },
    Project {
        title: "ALL IN ONE",
        year: Some("2025"),
        description: "ALL IN ONE is a web-based OCR tool that extracts content from images, PDFs, and web uploads. It converts scanned documents into readable and searchable text and extracts embedded images along with textual data. Supports structured output from multi-page PDF documents for fast and accurate digitization.",
        features: &["OCR", "Document AI", "Text & Image Extraction"],
        glyph: "📄",
        link: None,
    },
    Project {
        title: "Hospital Management System",
        year: Some("2024"),
        description: "Developed a hospital management system with dedicated login portals for patients and doctors. Integrated functionalities for managing treatment plans, brain tumor detection records, and visit histories, enhancing efficiency in medical data handling and patient care.",
        features: &["Patient & Doctor Portals", "Medical Records", "Brain Tumor Detection"],
        glyph: "🏥",
        link: None,
    },
    Project {
        title: "Tech Media Community",
        year: Some("2023"),
        description: "Designed and developed a tech media platform that encourages group learning and topic-based conversations. The platform enables members to exchange ideas, discuss emerging technologies, and collaborate on upcoming developments, creating a community-driven learning experience.",
        features: &["Group Learning", "Topic-Based Discussions", "Community Collaboration"],
        glyph: "👥",
        link: None,
    },
];

/// A tech stack tile. `glyph` is shown when the remote logo can't be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechItem {
    pub name: &'static str,
    pub logo: Option<&'static str>,
    pub glyph: &'static str,
}

macro_rules! tech {
    ($name:literal, $logo:literal, $glyph:literal) => {
        TechItem {
            name: $name,
            logo: Some($logo),
            glyph: $glyph,
        }
    };
}

pub const TECH_STACK: [TechItem; 18] = [
    tech!("HTML", "https://cdn.simpleicons.org/html5/E34F26", "</>"),
    tech!("CSS", "https://cdn.simpleicons.org/css/1572B6", "🎨"),
    tech!("React", "https://cdn.simpleicons.org/react/61DAFB", "⚛"),
    tech!("FastAPI", "https://cdn.simpleicons.org/fastapi/009688", "⚡"),
    tech!("Python", "https://cdn.simpleicons.org/python/3776AB", "🐍"),
    tech!("JavaScript", "https://cdn.simpleicons.org/javascript/F7DF1E", "{}"),
    tech!("Node.js", "https://cdn.simpleicons.org/nodedotjs/5FA04E", "⚙"),
    tech!("PostgreSQL", "https://cdn.simpleicons.org/postgresql/4169E1", "🗄"),
    tech!("Data Analysis", "https://cdn.simpleicons.org/chartdotjs/FF6384", "📊"),
    tech!("API Integration", "https://cdn.simpleicons.org/postman/FF6C37", "🔌"),
    tech!("Data Handling", "https://cdn.simpleicons.org/googlecloud/4285F4", "☁"),
    tech!("Research Analyst", "https://cdn.simpleicons.org/readthedocs/8CA1AF", "🔎"),
    tech!("Model Evaluation", "https://cdn.simpleicons.org/weightsandbiases/FFBE00", "✅"),
    tech!("Artificial Intelligence", "https://img.icons8.com/ios-filled/100/FFFFFF/artificial-intelligence.png", "🧠"),
    tech!("Machine Learning", "https://cdn.simpleicons.org/scikitlearn/F7931E", "🤖"),
    tech!("Deep Learning", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/tensorflow/tensorflow-original.svg", "🕸"),
    tech!("Computer Vision", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/opencv/opencv-original.svg", "👁"),
    tech!("Real-Time Processing", "https://cdn.simpleicons.org/apachekafka/FFFFFF", "📡"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    pub glyph: &'static str,
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

pub const TIMELINE: [TimelineEntry; 4] = [
    TimelineEntry {
        glyph: "🎓",
        title: "Education",
        lines: &[
            "HSE - Child Jesus Matriculation Higher Secondary School, Unnamalaikadai [2018 - 2020]",
            "BE (CSE) - Bethlahem Institute of Engineering, Karungal [2020 - 2024]",
        ],
    },
    TimelineEntry {
        glyph: "💼",
        title: "Career",
        lines: &[
            "2023 - Academic Project using Deep Learning",
            "2024 - Research Analyst",
            "2025 - Python Developer",
            "2026 - AI Developer",
        ],
    },
    TimelineEntry {
        glyph: "📈",
        title: "Personal Journey",
        lines: &[
            "2020 - Transitioned from school to engineering, building core technical foundations",
            "2023 - Achieved significant research milestones and actively explored career opportunities",
            "2024 - Placed in a Research Analyst role, working on data-driven research tasks",
            "2025 - Exploring opportunities in Web Development and AI technologies",
            "2026 - Focused on building AI-powered computer vision and real-time analytics projects",
        ],
    },
    TimelineEntry {
        glyph: "🔧",
        title: "Skills",
        lines: &[
            "Frontend Development",
            "Backend Development",
            "Databases & Cloud Services",
            "Artificial Intelligence",
            "Computer Vision Models",
            "Optimization & Performance Tuning",
            "Real-Time Video Streaming",
            "DevOps & Version Control",
        ],
    },
];

/// Splits a timeline line into an emphasised lead and the rest, on the first `" - "`.
pub fn split_lead(line: &str) -> Option<(&str, &str)> {
    line.split_once(" - ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub glyph: &'static str,
    pub class: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        label: "WhatsApp",
        href: "https://wa.me/919626863389",
        glyph: "💬",
        class: "bg-green-600 hover:bg-green-500",
    },
    SocialLink {
        label: "Email",
        href: "mailto:akashrm.mail@gmail.com",
        glyph: "✉",
        class: "bg-red-600 hover:bg-red-500",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/akash-rm",
        glyph: "in",
        class: "bg-blue-600 hover:bg-blue-500",
    },
    SocialLink {
        label: "GitHub",
        href: "https://github.com/akash-BuildHub",
        glyph: "⌥",
        class: "bg-gray-700 hover:bg-gray-600",
    },
];

pub const CONTACT_PHONE: &str = "+91 96268 63389";
pub const CONTACT_EMAIL: &str = "akashtechcore@gmail.com";
pub const CONTACT_LOCATION: &str = "India";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lead() {
        assert_eq!(
            split_lead("2024 - Research Analyst"),
            Some(("2024", "Research Analyst"))
        );
        // only the first separator splits, the rest stays intact
        assert_eq!(
            split_lead("HSE - Child Jesus School [2018 - 2020]"),
            Some(("HSE", "Child Jesus School [2018 - 2020]"))
        );
        assert_eq!(split_lead("Frontend Development"), None);
        assert_eq!(split_lead("Real-Time Video Streaming"), None);
    }

    #[test]
    fn test_nav_targets_are_unique() {
        let mut ids = NAV_ITEMS.iter().map(|n| n.id).collect::<Vec<_>>();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), NAV_ITEMS.len());
    }

    #[test]
    fn test_experience_keys_are_unique() {
        // cards are keyed by company and duration
        let mut keys = EXPERIENCE
            .iter()
            .map(|e| format!("{}-{}", e.company, e.duration))
            .collect::<Vec<_>>();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), EXPERIENCE.len());
    }

    #[test]
    fn test_every_tech_item_has_fallback() {
        assert!(TECH_STACK.iter().all(|t| !t.glyph.is_empty()));
    }
}
