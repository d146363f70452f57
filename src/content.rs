//! Static site content. Every section renders records defined here at
//! compile time; nothing in this module changes at runtime.

use crate::Route;

/// Closed set of project categories. Also drives the portfolio filter
/// control, so adding a category here grows the filter row automatically.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Category {
    Website,
    MobileApp,
    Software,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Website, Category::MobileApp, Category::Software];

    pub fn label(self) -> &'static str {
        match self {
            Category::Website => "Website",
            Category::MobileApp => "Mobile App",
            Category::Software => "Software",
        }
    }
}

#[derive(PartialEq, Debug)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    /// Live deployment, if the client has one. Projects without a URL get
    /// a disabled "Coming Soon" affordance in the detail overlay.
    pub url: Option<&'static str>,
    pub featured: bool,
}

pub static PROJECTS: [Project; 3] = [
    Project {
        id: 1,
        title: "Church Website",
        category: Category::Website,
        description: "A modern church website designed to share worship services, church \
            activities, announcements, and faith-based content. Features a beautiful, \
            responsive design with easy content management.",
        image: "https://images.unsplash.com/photo-1557324232-b8917d3c3dcb?crop=entropy&cs=srgb&fm=jpg&w=800&q=85",
        technologies: &["React", "Node.js", "Tailwind CSS", "Firebase"],
        url: Some("https://thuthichristianassembly.netlify.app/"),
        featured: true,
    },
    Project {
        id: 2,
        title: "AquaRescue App",
        category: Category::MobileApp,
        description: "AquaRescue is a fast and reliable flood emergency app that lets users \
            send SOS alerts, share live location, and receive critical safety updates when \
            every second matters.",
        image: "https://images.unsplash.com/photo-1633250391894-397930e3f5f2?crop=entropy&cs=srgb&fm=jpg&w=800&q=85",
        technologies: &["React Native", "Firebase", "Redux", "Maps API"],
        url: None,
        featured: true,
    },
    Project {
        id: 3,
        title: "Presentation Software",
        category: Category::Software,
        description: "A comprehensive church presentation software developed for Kumar Pastor, \
            designed to display song lyrics, Bible verses, announcements, and multimedia \
            content during worship services. Features real-time text synchronization, \
            customizable themes, and seamless multimedia integration for an enhanced worship \
            experience.",
        image: "https://images.unsplash.com/photo-1568952433726-3896e3881c65?crop=entropy&cs=srgb&fm=jpg&w=800&q=85",
        technologies: &["Electron", "React", "SQLite", "Node.js"],
        url: Some("https://drive.google.com/drive/folders/112EpRXfDObD8_eM-3Y3fRYBdY_lMPkf4?usp=sharing"),
        featured: true,
    },
];

#[derive(PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    /// Accent class suffix picked up by the section stylesheet.
    pub accent: &'static str,
}

pub const SERVICES: [Service; 3] = [
    Service {
        title: "Website Development",
        description: "Stunning, responsive websites that captivate your audience and drive conversions.",
        features: &["Responsive Design", "SEO Optimized", "Fast Loading", "CMS Integration"],
        accent: "teal",
    },
    Service {
        title: "App Development",
        description: "Native and cross-platform mobile apps that deliver exceptional user experiences.",
        features: &["iOS & Android", "Cross-Platform", "Push Notifications", "Offline Mode"],
        accent: "indigo",
    },
    Service {
        title: "Software Development",
        description: "Custom software solutions that streamline your business operations.",
        features: &["Custom CRM/ERP", "API Development", "Cloud Solutions", "Database Design"],
        accent: "pink",
    },
];

#[derive(PartialEq)]
pub struct Testimonial {
    pub author: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    /// Star rating on the usual 1-5 scale.
    pub rating: u8,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        author: "Kumar Pastor",
        role: "Pastor, Kumar Pastor Church",
        quote: "The presentation software developed by LMK SoftTech has revolutionized our \
            worship services. The seamless display of song lyrics, Bible verses, and \
            multimedia content has greatly enhanced our congregation's experience. The \
            real-time synchronization and customizable themes are exactly what we needed.",
        rating: 5,
    },
    Testimonial {
        author: "C Akash",
        role: "Junior Developer, Ordinal Technology",
        quote: "Working with LMK SoftTech on the AquaRescue flood emergency app was an \
            incredible experience. Their expertise in React Native and Firebase integration \
            helped create a life-saving application that can send SOS alerts and share \
            real-time location during emergencies.",
        rating: 5,
    },
    Testimonial {
        author: "Sam Renault",
        role: "Cyber Security Expert, Renault",
        quote: "After seeing the demo designs for our food delivery app, I'm eagerly waiting \
            for the completion. The UI/UX looks professional and user-friendly. LMK \
            SoftTech's attention to detail in the design phase gives us confidence in the \
            final product.",
        rating: 5,
    },
];

/// "Why choose us" cards on the home page.
#[derive(PartialEq)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

pub const HIGHLIGHTS: [Highlight; 4] = [
    Highlight {
        title: "Lightning Fast",
        description: "Optimized for speed and performance across all devices.",
    },
    Highlight {
        title: "Secure & Reliable",
        description: "Enterprise-grade security to protect your data.",
    },
    Highlight {
        title: "On-Time Delivery",
        description: "We respect deadlines and deliver projects on schedule.",
    },
    Highlight {
        title: "24/7 Support",
        description: "Round-the-clock technical support when you need it.",
    },
];

#[derive(PartialEq)]
pub struct CompanyValue {
    pub title: &'static str,
    pub description: &'static str,
}

pub const VALUES: [CompanyValue; 4] = [
    CompanyValue {
        title: "Client-Focused",
        description: "Your success is our priority. We listen, understand, and deliver \
            solutions that exceed expectations.",
    },
    CompanyValue {
        title: "Innovation",
        description: "We stay at the forefront of technology, bringing cutting-edge solutions \
            to every project.",
    },
    CompanyValue {
        title: "Passion",
        description: "We love what we do. Every line of code is crafted with care and dedication.",
    },
    CompanyValue {
        title: "Quality",
        description: "Excellence in every pixel. We never compromise on the quality of our \
            deliverables.",
    },
];

#[derive(PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 2] = [
    Stat { value: "100%", label: "Client Satisfaction" },
    Stat { value: "24/7", label: "Support Available" },
];

pub const EXPERTISE: [&str; 6] = [
    "React & Next.js",
    "React Native",
    "Node.js & Express",
    "Python & Django",
    "Cloud Solutions",
    "Database Design",
];

/// A way to reach the business. `href` is absent for entries that are
/// display-only (the street address has nothing to link to).
#[derive(PartialEq)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        label: "Email",
        value: "kishorepa64@gmail.com",
        href: Some("mailto:kishorepa64@gmail.com"),
    },
    ContactChannel {
        label: "Phone",
        value: "+91 6374308218",
        href: Some("tel:+916374308218"),
    },
    ContactChannel {
        label: "Location",
        value: "Nagercoil, India",
        href: None,
    },
];

pub const NAV_LINKS: [(&str, Route); 5] = [
    ("Home", Route::Home),
    ("Services", Route::Services),
    ("About", Route::About),
    ("Portfolio", Route::Portfolio),
    ("Contact", Route::Contact),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_ids_are_unique() {
        for (i, a) in PROJECTS.iter().enumerate() {
            for b in &PROJECTS[i + 1..] {
                assert_ne!(a.id, b.id, "{} and {} share an id", a.title, b.title);
            }
        }
    }

    #[test]
    fn ratings_stay_on_the_five_star_scale() {
        for testimonial in &TESTIMONIALS {
            assert!(
                (1..=5).contains(&testimonial.rating),
                "{} has rating {}",
                testimonial.author,
                testimonial.rating
            );
        }
    }

    #[test]
    fn category_labels_are_distinct() {
        for (i, a) in Category::ALL.iter().enumerate() {
            assert!(!a.label().is_empty());
            for b in &Category::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }

    #[test]
    fn each_category_is_represented_in_the_portfolio() {
        for category in Category::ALL {
            assert!(
                PROJECTS.iter().any(|p| p.category == category),
                "no project in category {:?}",
                category
            );
        }
    }

    #[test]
    fn linked_projects_carry_absolute_urls() {
        for project in &PROJECTS {
            if let Some(url) = project.url {
                assert!(url.starts_with("https://"), "{} links to {}", project.title, url);
            }
        }
    }
}
