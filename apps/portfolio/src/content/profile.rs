use crate::models::experience::CategorizedSkills;
use crate::models::profile::{Bio, Referral, SocialIcon, SocialLink};

pub const BIO: Bio = Bio {
    name: "Arul Gnanasivam",
    title: "Aerospace Engineer & Researcher",
    affiliation: "University of Washington",
    ex_affiliation: "Ex-Blue Origin",
    tagline: "Engineering the future of aerospace with thermal fluids analysis and AI-driven design.",
    email: "arul.gnanasivam@gmail.com",
    phone: "669-214-8048",
    short_bio: "I am an M.S. Aerospace Engineering student at the University of Washington \
specializing in Fluids. My expertise lies in bridging the gap between theoretical thermal \
analysis and practical system implementation, with a growing focus on applying machine \
learning to engineering challenges.",
    long_bio: "",
};

pub const SOCIALS: &[SocialLink] = &[
    SocialLink {
        platform: "LinkedIn",
        url: "https://www.linkedin.com/in/arul-g",
        icon: SocialIcon::Linkedin,
    },
    SocialLink {
        platform: "Email",
        url: "mailto:arul.gnanasivam@gmail.com",
        icon: SocialIcon::Mail,
    },
];

pub const REFERRALS: &[Referral] = &[
    Referral {
        quote: "I worked with Arul at Blue Origin for over a year and during that time he was an \
incredibly valuable analyst and team member. He possesses a strong understanding of heat transfer \
which allows him to quickly iterate through design problems to arrive at an optimized solution. He \
is always dependable to provide accurate and timely results especially when quick turn-around or \
short notice analyses are requested. Arul is always positive and happy to take on any task when \
needed. He is highly reliable engineer and will be a valuable addition to any fast-paced environment!",
        author: "Declan Caldwell, Thermal Engineer III at Blue Origin",
    },
    Referral {
        quote: "I\u{2019}ve had the privilege of working with Arul at Blue Origin where he was part of \
our Thermal Analysis group. Arul's expertise in thermal component analysis is remarkable - he \
simplified the complex concepts related to our component level heat transfer and delivered an \
optimized solution which helped maturing our Thermal Hardware design. His collaborative spirit \
combining with his commitment to Excellence making him an invaluable asset to any team. I highly \
recommend Arul for his exceptional technical knowledge, grasp on thermal engineering fundamentals, \
professionalism and teamwork.",
        author: "Shawoon Roy, Technical Project Manager at Blue Origin",
    },
];

pub const THERMAL_RESUME_SKILLS: CategorizedSkills = CategorizedSkills {
    software: &[
        "Thermal Desktop",
        "Ansys Icepak",
        "OpenFOAM",
        "PTC Creo",
        "AutoCAD",
        "Siemens NX12",
        "RPA",
    ],
    languages: &[
        "Python", "Matlab", "C++", "Pytorch", "Sci-Kit", "OpenCV", "Pandas", "Linux",
    ],
    hardware: &[
        "Machine shop trained",
        "3-D printing",
        "TIG welding",
        "Lathe",
        "GD&T",
    ],
};

pub const ML_RESUME_SKILLS: CategorizedSkills = CategorizedSkills {
    languages: &[
        "Python", "Matlab", "C++", "Pytorch", "Sci-Kit", "OpenCV", "Pandas", "Linux", "Bash",
    ],
    software: &[
        "Thermal Desktop",
        "Ansys Icepak",
        "OpenFOAM",
        "LabView",
        "TUCAN",
        "ITK-SNAP",
    ],
    hardware: &["Machine shop trained", "3-D printing"],
};

/// Number of skill chips shown on the home page.
pub const HOME_SKILL_LIMIT: usize = 15;

/// Home page chips: thermal software followed by thermal languages, capped.
pub fn home_skills() -> Vec<&'static str> {
    THERMAL_RESUME_SKILLS
        .software
        .iter()
        .chain(THERMAL_RESUME_SKILLS.languages)
        .copied()
        .take(HOME_SKILL_LIMIT)
        .collect()
}
