use std::cmp::Ordering;

pub const PROJECT_IMAGE_FALLBACK: &str = "https://placehold.co/600x400/1e293b/94a3b8?text=Image+Error";
pub const BLOG_IMAGE_FALLBACK: &str = "https://placehold.co/600x400/1e293b/94a3b8?text=Blog+Post";
pub const FEATURED_IMAGE_FALLBACK: &str = "https://placehold.co/600x400/334155/e2e8f0?text=Error";
pub const PROFILE_IMAGE: &str = "/profile.jpg";
pub const PROFILE_IMAGE_FALLBACK: &str = "https://placehold.co/320x320/e2e8f0/334155?text=SID";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectCategory {
    Software,
    Hardware,
}

impl ProjectCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Software => "Software",
            Self::Hardware => "Hardware",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub tags: &'static [&'static str],
    pub url: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FeaturedProject {
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub accent: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BlogPost {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub image_url: &'static str,
    pub date: &'static str,
    pub reading_time: &'static str,
    pub url: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub years: &'static str,
    pub achievements: &'static [&'static str],
}

#[derive(Clone, Debug, PartialEq)]
pub struct Certificate {
    pub title: &'static str,
    pub issuer: &'static str,
    pub issued: &'static str,
    pub url: &'static str,
}

const SOFTWARE_PROJECTS: &[Project] = &[
    Project {
        title: "Deep Convolutional Generative Adversarial Network",
        description: "Worked in a team of 4 on a project involving DCGANs for realistic image generation.",
        image_url: "https://placehold.co/600x400/164e63/f0f9ff?text=DCGANs",
        tags: &["Python", "TensorFlow", "Large Dataset", "Keras", "Numpy"],
        url: "#",
    },
    Project {
        title: "Enhancement on Meta's Research",
        description: "Achieved object goal navigation through Goal-Oriented Semantic Exploration, combining semantic mapping, policy learning, and efficient path planning.",
        image_url: "https://placehold.co/600x400/164e63/f0f9ff?text=Meta+Research",
        tags: &["Path Planning", "Computer Vision", "RL", "Simulator", "Robotics"],
        url: "#",
    },
    Project {
        title: "E-commerce Platform",
        description: "A full-stack e-commerce site with user authentication, product catalog, shopping cart, and payment integration using Stripe.",
        image_url: "https://placehold.co/600x400/164e63/f0f9ff?text=E-commerce",
        tags: &["React", "Node.js", "Express", "MongoDB", "Stripe API"],
        url: "#",
    },
];

const HARDWARE_PROJECTS: &[Project] = &[
    Project {
        title: "Visual Tracking Unmanned Vehicle - Mambo Drone",
        description: "Developed a low-cost mini drone using vision-based control and model-based software design, with rigorous testing and MATLAB-based implementation.",
        image_url: "https://placehold.co/600x400/164e63/f0f9ff?text=Mambo+Drone",
        tags: &["Sensor Fusion", "Control Systems", "Kalman Filter", "Perception", "Matlab"],
        url: "#",
    },
    Project {
        title: "Automated Hydroponics System",
        description: "Designed and built an IoT-based hydroponics system using Raspberry Pi to monitor and control nutrient levels, pH, and lighting for optimal plant growth.",
        image_url: "https://placehold.co/600x400/164e63/f0f9ff?text=Hydroponics",
        tags: &["Raspberry Pi", "IoT", "Python", "Sensors", "Automation"],
        url: "#",
    },
    Project {
        title: "Smart Robotic Arm",
        description: "Constructed a 4-axis robotic arm with computer vision capabilities to identify, pick up, and sort objects based on color and shape.",
        image_url: "https://placehold.co/600x400/164e63/f0f9ff?text=Robotic+Arm",
        tags: &["Arduino", "C++", "Computer Vision", "Servos", "3D Printing"],
        url: "#",
    },
];

const FEATURED_PROJECTS: &[FeaturedProject] = &[
    FeaturedProject {
        title: "Join the Animal Alliance",
        description: "Non-profit organization dedicated to animal welfare.",
        image_url: "https://placehold.co/600x400/334155/e2e8f0?text=Animal+Alliance",
        accent: "accent-teal",
    },
    FeaturedProject {
        title: "Easy EMDR",
        description: "All-in-one Solutions for your EMDR practice",
        image_url: "https://placehold.co/600x400/334155/e2e8f0?text=Easy+EMDR",
        accent: "accent-purple",
    },
    FeaturedProject {
        title: "Browse Mega Corps",
        description: "Website to browse corporations and their subsidiaries.",
        image_url: "https://placehold.co/600x400/334155/e2e8f0?text=Mega+Corps",
        accent: "accent-indigo",
    },
];

const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        title: "The Rise of Serverless Architecture",
        excerpt: "Exploring the benefits, drawbacks, and real-world use cases of serverless computing and how it's changing the landscape of web development.",
        image_url: "https://placehold.co/600x400/164e63/f0f9ff?text=Serverless",
        date: "2025-09-28",
        reading_time: "8 min read",
        url: "#",
    },
    BlogPost {
        title: "Mastering React Hooks: A Deep Dive",
        excerpt: "An in-depth guide to understanding and effectively using React Hooks for state management and side effects in your applications.",
        image_url: "https://placehold.co/600x400/164e63/f0f9ff?text=React+Hooks",
        date: "2025-10-18",
        reading_time: "12 min read",
        url: "#",
    },
    BlogPost {
        title: "A Guide to 3D Web Graphics with Three.js",
        excerpt: "Learn the fundamentals of creating stunning, interactive 3D visualizations in the browser using the popular Three.js library.",
        image_url: "https://placehold.co/600x400/164e63/f0f9ff?text=Three.js",
        date: "2025-09-05",
        reading_time: "15 min read",
        url: "#",
    },
];

const EDUCATION: &[Education] = &[
    Education {
        degree: "B.Tech in Electronics and Instrumentation",
        institution: "Odisha University of Technology and Research, Bhubaneswar",
        years: "2023 - 2027",
        achievements: &[
            "Focused on AI, Hardware Prototyping and Data Analytics.",
            "Member of Alumni Relations Cell.",
        ],
    },
    Education {
        degree: "Higher Secondary Education",
        institution: "DAV PUBLIC SCHOOL Pokhariput, Bhubaneswar",
        years: "2021 - 2023",
        achievements: &["Achieved 96.2%.", "Scholar Distinction Awardee."],
    },
];

const SKILLS: &[&str] = &[
    "C Programming",
    "Python",
    "JavaScript (ES6+)",
    "React",
    "Node.js",
    "Tailwind CSS",
    "Linux",
    "Firebase",
    "HTML5 & CSS3",
    "Hardware Prototyping",
    "Arduino",
    "Git & GitHub",
];

const CERTIFICATES: &[Certificate] = &[
    Certificate {
        title: "Google Professional Cloud Architect",
        issuer: "Google Cloud",
        issued: "Issued Aug 2024",
        url: "#",
    },
    Certificate {
        title: "React - The Complete Guide",
        issuer: "Udemy",
        issued: "Issued Jan 2023",
        url: "#",
    },
    Certificate {
        title: "Certified Kubernetes Administrator (CKA)",
        issuer: "The Linux Foundation",
        issued: "Issued May 2023",
        url: "#",
    },
];

pub fn projects(category: ProjectCategory) -> &'static [Project] {
    match category {
        ProjectCategory::Software => SOFTWARE_PROJECTS,
        ProjectCategory::Hardware => HARDWARE_PROJECTS,
    }
}

pub fn featured_projects() -> &'static [FeaturedProject] {
    FEATURED_PROJECTS
}

/// Blog posts, newest first.
pub fn blog_posts() -> Vec<BlogPost> {
    let mut posts = BLOG_POSTS.to_vec();
    posts.sort_by(|a, b| compare_dates(b.date, a.date));
    posts
}

pub fn education() -> &'static [Education] {
    EDUCATION
}

pub fn skills() -> &'static [&'static str] {
    SKILLS
}

pub fn certificates() -> &'static [Certificate] {
    CERTIFICATES
}

fn compare_dates(left: &str, right: &str) -> Ordering {
    parse_date(left).cmp(&parse_date(right))
}

/// Splits a `YYYY-MM-DD` date. `None` when any part is missing or out of range.
fn parse_date(date: &str) -> Option<(i32, u32, u32)> {
    let mut parts = date.split('-');
    let year = parts.next()?.parse::<i32>().ok()?;
    let month = parts.next()?.parse::<u32>().ok().filter(|month| (1..=12).contains(month))?;
    let day = parts.next()?.parse::<u32>().ok().filter(|day| (1..=31).contains(day))?;
    if parts.next().is_some() {
        return None;
    }
    Some((year, month, day))
}

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Long form (`October 18, 2025`). Malformed dates are shown as written.
pub fn format_date(date: &str) -> String {
    let Some((year, month, day)) = parse_date(date) else {
        tracing::warn!(date, "unparseable catalog date");
        return date.to_string();
    };
    format!("{} {day}, {year}", MONTHS[month as usize - 1])
}
