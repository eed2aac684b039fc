//! Static portfolio content referenced by the navigator.
//!
//! Selections carry an index into [`PROJECTS`]; everything else is plain
//! data the frontend renders as-is.

pub struct Project {
    pub title: &'static str,
    pub tech: &'static str,
    pub blurb: &'static str,
    pub url: &'static str,
    pub skills: &'static [&'static str],
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Utilities Deals",
        tech: "Next.js, Tailwind CSS, HTML, JavaScript",
        blurb: "Blog and About Us pages for Utilities Deals, fetching content \
                from the client's API with responsive, easy-to-navigate layouts.",
        url: "https://utilitiesdeals.co.uk/",
        skills: &["Next.js", "Tailwind CSS", "HTML", "JavaScript"],
    },
    Project {
        title: "BabyBazar.pk",
        tech: "Shopify, Ruby on Rails, JSON APIs, Liquid",
        blurb: "Backend for BabyBazar.pk on Shopify: building and maintaining \
                JSON APIs for smooth data flow and reliable platform performance.",
        url: "https://babybazar.pk/",
        skills: &["Shopify", "Ruby on Rails", "JSON APIs", "Liquid"],
    },
    Project {
        title: "CompareNook.com",
        tech: "Node.js, Next.js, JavaScript, Full-Stack Development",
        blurb: "A price comparison site helping shoppers compare deals across \
                multiple online marketplaces and make smarter purchases.",
        url: "https://www.comparenook.com/",
        skills: &["Node.js", "Next.js", "JavaScript", "Full-Stack Development"],
    },
];

pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_CATEGORIES: [SkillCategory; 5] = [
    SkillCategory {
        title: "Backend",
        skills: &[
            "Node.js (Express, NestJS)",
            "Python (FastAPI, Flask)",
            "PHP (Laravel)",
            "Ruby on Rails",
        ],
    },
    SkillCategory {
        title: "Frontend",
        skills: &["HTML, CSS, JavaScript", "React / Vue", "Next.js", "TypeScript"],
    },
    SkillCategory {
        title: "Game Development",
        skills: &["Unity", "Unreal Engine", "C#", "C++"],
    },
    SkillCategory {
        title: "Database",
        skills: &["MySQL", "PostgreSQL", "MongoDB"],
    },
    SkillCategory {
        title: "Tools",
        skills: &["Git & GitHub", "Docker", "Nginx"],
    },
];

pub struct Experience {
    pub years: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub summary: &'static str,
}

pub const EXPERIENCES: [Experience; 2] = [
    Experience {
        years: "2023 - Present",
        title: "Freelance Full-Stack Developer",
        company: "Freelance",
        location: "Remote",
        summary: "Developed backend APIs and web applications. Worked with \
                  databases and authentication systems. Collaborated with \
                  designers and frontend developers.",
    },
    Experience {
        years: "2015 - 2023",
        title: "Front-End & Game Developer",
        company: "Freelance",
        location: "Remote",
        summary: "Built interactive user interfaces and browser-based games \
                  with modern front-end frameworks, implementing game \
                  mechanics, animations and UI logic.",
    },
];

pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "GitHub",
        url: "https://github.com/AnnaPluto2/My-Portfolio",
    },
    SocialLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/nakamuraaoi",
    },
    SocialLink {
        label: "Email",
        url: "mailto:nakamuraaoi1124@gmail.com",
    },
];
