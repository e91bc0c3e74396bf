#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub feedback: &'static str,
}

// Section anchors
pub const HOME_ANCHOR: &str = "home";
pub const ABOUT_ANCHOR: &str = "about";
pub const SERVICES_ANCHOR: &str = "services";
pub const CONTACT_ANCHOR: &str = "contact";

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Home",
        target: "#home",
    },
    NavLink {
        label: "About",
        target: "#about",
    },
    NavLink {
        label: "Services",
        target: "#services",
    },
    NavLink {
        label: "Contact",
        target: "#contact",
    },
];

pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "Fast Setup",
        description: "Launch your project in minutes with sensible defaults and zero configuration.",
    },
    Feature {
        title: "Responsive Design",
        description: "Every page looks sharp on phones, tablets and wide desktop screens.",
    },
    Feature {
        title: "Friendly Support",
        description: "Our team answers questions quickly so you can keep moving forward.",
    },
];

pub const TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        name: "Jane Doe",
        feedback: "Brightside helped us ship our new site in a single weekend. Highly recommended!",
    },
    Testimonial {
        name: "John Smith",
        feedback: "Clean design, great support and a smooth experience from start to finish.",
    },
];

pub const HERO_TITLE: &str = "Build something people love";
pub const HERO_SUBTITLE: &str =
    "A simple, fast and beautiful way to present your product to the world.";
