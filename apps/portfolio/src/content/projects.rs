use crate::models::project::{ProjectCategory, ProjectItem};

/// Every tag a visitor can ever select, in chip display order.
pub const TAG_VOCABULARY: &[&str] = &[
    "Thermal Analysis",
    "Thermal Test",
    "Machine Learning",
    "Blue Origin",
    "University of Washington",
    "University of Maryland",
    "Computational Fluid Dynamics",
    "Personal Projects",
];

/// Projects still underway; their cards carry an "In Progress" badge.
pub const IN_PROGRESS_IDS: &[&str] = &["uw2", "uw3", "pers1"];

/// Technologies shown on a gallery card before truncation.
pub const CARD_TECHNOLOGY_LIMIT: usize = 3;

pub const PROJECTS: &[ProjectItem] = &[
    ProjectItem {
        id: "uw1",
        title: "Optimizing surfaces to enhance cryogenic boiling for space applications",
        subheader: "UW Thermal Lab & Blue Origin",
        description: None,
        technologies: &["Machining", "LabView", "Cryogenic Systems"],
        category: ProjectCategory::Uw,
        tags: &[
            "University of Washington",
            "Thermal Analysis",
            "Thermal Test",
            "Blue Origin",
        ],
        link: None,
        github: None,
    },
    ProjectItem {
        id: "uw2",
        title: "Designing a Liquid Acquisition Device for improved cryogenic propellant transfer",
        subheader: "UW Thermal Lab & Blue Origin",
        description: None,
        technologies: &["Machining", "LabView", "Cryogenic Systems"],
        category: ProjectCategory::Uw,
        tags: &[
            "University of Washington",
            "Thermal Analysis",
            "Thermal Test",
            "Blue Origin",
        ],
        link: None,
        github: None,
    },
    ProjectItem {
        id: "uw3",
        title: "Laplacian Dynamic Smoothing Algorithm for improved CFD runtime and fidelity",
        subheader: "UW Medicine",
        description: None,
        technologies: &["MATLAB", "Bash", "Linux"],
        category: ProjectCategory::Uw,
        tags: &[
            "University of Washington",
            "Machine Learning",
            "Computational Fluid Dynamics",
        ],
        link: None,
        github: None,
    },
    ProjectItem {
        id: "bo1",
        title: "Surface Access System Thermal Model for Crewed MK2 Lunar Lander",
        subheader: "Blue Origin",
        description: None,
        technologies: &["Thermal Desktop"],
        category: ProjectCategory::BlueOrigin,
        tags: &["Blue Origin", "Thermal Analysis"],
        link: None,
        github: None,
    },
    ProjectItem {
        id: "bo2",
        title: "Thermal Optimization Trade of Avionics Ring for Crewed MK2 Lunar Lander",
        subheader: "Blue Origin",
        description: None,
        technologies: &["Ansys Icepak", "Python"],
        category: ProjectCategory::BlueOrigin,
        tags: &["Blue Origin", "Thermal Analysis"],
        link: None,
        github: None,
    },
    ProjectItem {
        id: "bo3",
        title: "Lunar Thermal Properties Database",
        subheader: "Blue Origin",
        description: None,
        technologies: &["Python", "Pandas"],
        category: ProjectCategory::BlueOrigin,
        tags: &["Blue Origin"],
        link: None,
        github: None,
    },
    ProjectItem {
        id: "umd1",
        title: "Lunar South Pole Rover design with NASA Goddard",
        subheader: "University of Maryland",
        description: None,
        technologies: &["Thermal Desktop"],
        category: ProjectCategory::Umd,
        tags: &["University of Maryland", "Thermal Analysis"],
        link: None,
        github: None,
    },
    ProjectItem {
        id: "umd2",
        title: "Rocket Nozzle Thermal Analysis",
        subheader: "University of Maryland",
        description: None,
        technologies: &["MATLAB"],
        category: ProjectCategory::Umd,
        tags: &["University of Maryland", "Thermal Analysis"],
        link: None,
        github: None,
    },
    ProjectItem {
        id: "usda1",
        title: "Machine Learning Pipeline to Predict Crop Yield based on Soil Nitrogen Levels for Water Conservation",
        subheader: "United States Department of Agriculture",
        description: None,
        technologies: &["Python", "Pytorch", "Sci-Kit Learn", "Machine Learning"],
        category: ProjectCategory::Usda,
        tags: &["Machine Learning"],
        link: None,
        github: None,
    },
    ProjectItem {
        id: "pers1",
        title: "Atrial Fibrillation Prediction from Wearable ECG Data",
        subheader: "Personal",
        description: None,
        technologies: &["Machine Learning", "Python"],
        category: ProjectCategory::Personal,
        tags: &["Machine Learning", "Personal Projects"],
        link: None,
        github: None,
    },
];
