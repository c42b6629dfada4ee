//! Static copy shown on the landing page.

pub const COMPANY_NAME: &str = "AsuVens AI";
pub const HERO_TITLE: &str = "Cutting-Edge AI Solutions";

pub struct NavItem {
    pub label: &'static str,
    pub id: &'static str,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "Home", id: "home" },
    NavItem { label: "Services", id: "services" },
    NavItem { label: "About", id: "about" },
    NavItem { label: "Contact", id: "contact" },
];

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub gradient: &'static str,
}

pub const SERVICES: [Service; 6] = [
    Service {
        icon: "fas fa-brain",
        title: "Machine Learning",
        description: "Advanced machine learning algorithms and models tailored to solve your specific business challenges and automate complex processes.",
        gradient: "linear-gradient(90deg, #8b5cf6, #3b82f6)",
    },
    Service {
        icon: "fas fa-comments",
        title: "Natural Language Processing",
        description: "Sophisticated NLP solutions for chatbots, sentiment analysis, language translation, and intelligent document processing.",
        gradient: "linear-gradient(90deg, #3b82f6, #6366f1)",
    },
    Service {
        icon: "fas fa-eye",
        title: "Computer Vision",
        description: "Cutting-edge computer vision systems for image recognition, object detection, and automated visual inspection solutions.",
        gradient: "linear-gradient(90deg, #6366f1, #8b5cf6)",
    },
    Service {
        icon: "fas fa-chart-line",
        title: "Predictive Analytics",
        description: "Data-driven predictive models to forecast trends, optimize operations, and make informed strategic business decisions.",
        gradient: "linear-gradient(90deg, #8b5cf6, #ec4899)",
    },
    Service {
        icon: "fas fa-gears",
        title: "AI Automation",
        description: "Intelligent process automation solutions to streamline workflows, reduce costs, and improve operational efficiency.",
        gradient: "linear-gradient(90deg, #ec4899, #ef4444)",
    },
    Service {
        icon: "fas fa-handshake",
        title: "AI Consulting",
        description: "Expert consulting services to guide your AI transformation journey and implement best practices for maximum ROI.",
        gradient: "linear-gradient(90deg, #ef4444, #8b5cf6)",
    },
];

pub struct Stat {
    pub label: &'static str,
    pub target: u32,
    pub suffix: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { label: "AI Projects Delivered", target: 50, suffix: "+" },
    Stat { label: "Happy Clients", target: 25, suffix: "+" },
    Stat { label: "Success Rate", target: 95, suffix: "%" },
    Stat { label: "Support Available", target: 24, suffix: "/7" },
];

pub struct Tech {
    pub icon: &'static str,
    pub name: &'static str,
    pub gradient: &'static str,
}

pub const TECH_STACK: [Tech; 9] = [
    Tech { icon: "fab fa-python", name: "Python", gradient: "linear-gradient(135deg, #eab308, #3b82f6)" },
    Tech { icon: "fas fa-database", name: "AI/ML", gradient: "linear-gradient(135deg, #22c55e, #14b8a6)" },
    Tech { icon: "fas fa-cloud", name: "Cloud", gradient: "linear-gradient(135deg, #3b82f6, #6366f1)" },
    Tech { icon: "fas fa-microchip", name: "Hardware", gradient: "linear-gradient(135deg, #ef4444, #ec4899)" },
    Tech { icon: "fas fa-network-wired", name: "Networks", gradient: "linear-gradient(135deg, #8b5cf6, #3b82f6)" },
    Tech { icon: "fas fa-sliders", name: "DevOps", gradient: "linear-gradient(135deg, #6b7280, #374151)" },
    Tech { icon: "fab fa-docker", name: "Docker", gradient: "linear-gradient(135deg, #60a5fa, #2563eb)" },
    Tech { icon: "fas fa-server", name: "Servers", gradient: "linear-gradient(135deg, #6366f1, #8b5cf6)" },
    Tech { icon: "fas fa-terminal", name: "CLI", gradient: "linear-gradient(135deg, #4ade80, #16a34a)" },
];

pub struct ContactInfo {
    pub icon: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub gradient: &'static str,
}

pub const CONTACT_INFO: [ContactInfo; 4] = [
    ContactInfo {
        icon: "fas fa-envelope",
        title: "Email",
        content: "info@asuvensai.com",
        gradient: "linear-gradient(90deg, #3b82f6, #6366f1)",
    },
    ContactInfo {
        icon: "fas fa-phone",
        title: "Phone",
        content: "+91 9492756026",
        gradient: "linear-gradient(90deg, #22c55e, #14b8a6)",
    },
    ContactInfo {
        icon: "fas fa-location-dot",
        title: "Location",
        content: "Hyderabad, Telangana, India",
        gradient: "linear-gradient(90deg, #ef4444, #ec4899)",
    },
    ContactInfo {
        icon: "fas fa-clock",
        title: "Business Hours",
        content: "Mon - Fri: 9AM - 6PM IST",
        gradient: "linear-gradient(90deg, #8b5cf6, #3b82f6)",
    },
];

pub const OFFICE_ADDRESS: [&str; 4] = [
    "Sri Sai Nilayam,",
    "New Vivekananda Nagar,",
    "Allapur, Hyderabad,",
    "Telangana, India",
];

pub const COMPANY_LINKS: [NavItem; 3] = [
    NavItem { label: "About Us", id: "about" },
    NavItem { label: "Our Services", id: "services" },
    NavItem { label: "Contact", id: "contact" },
];

pub struct SocialLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { icon: "fab fa-linkedin", label: "LinkedIn", href: "https://www.linkedin.com/" },
    SocialLink { icon: "fab fa-x-twitter", label: "Twitter", href: "https://twitter.com/" },
    SocialLink { icon: "fab fa-github", label: "GitHub", href: "https://github.com/" },
    SocialLink { icon: "fab fa-instagram", label: "Instagram", href: "https://www.instagram.com/" },
];
