use crate::models::experience::{ExperienceItem, ExperienceType, ResumeMode};

const BOTH: &[ResumeMode] = &[ResumeMode::Thermal, ResumeMode::Ml];
const THERMAL: &[ResumeMode] = &[ResumeMode::Thermal];
const ML: &[ResumeMode] = &[ResumeMode::Ml];

pub const EXPERIENCE: &[ExperienceItem] = &[
    ExperienceItem {
        id: "c2",
        role: "Research Assistant",
        organization: "UW Medicine Cardiovascular Lab",
        period: "Aug. 2025 - Present",
        kind: ExperienceType::Research,
        description: "Developing AI-driven computational pipeline to predict atrial fibrillation-induced thrombus formation.",
        bullets: &[
            "Developing AI-driven computational pipeline combining nnU-Net segmentation and TUCAN simulations to predict atrial fibrillation-induced thrombus formation risk in left atrial appendage",
            "Engineered adaptive meshing algorithm, increasing fidelity and reducing computational cost by 23%",
            "Trained deep learning segmentation model on 250+ cardiac CT/MRI datasets on Hyak supercomputer, manually validated and refined complex anatomical models in ITK-SNAP",
        ],
        technologies: &["nnU-Net", "Python", "Deep Learning", "ITK-SNAP"],
        resume_tags: BOTH,
        exclude_from_about: false,
    },
    ExperienceItem {
        id: "c1",
        role: "Research/Scientist Engineer 1",
        organization: "University of Washington Thermal Lab",
        period: "Aug. 2025 - Present",
        kind: ExperienceType::Career,
        description: "Leading Blue Origin-sponsored cryogenic testing program to characterize liquid acquisition device (LAD) performance.",
        bullets: &[
            "Leading Blue Origin-sponsored cryogenic testing program to characterize liquid acquisition device (LAD) performance in liquid nitrogen for propellant management systems",
            "Designed and executed cryogenic experiments using custom-machined aluminum test articles with embedded thermocouple arrays via LabVIEW data acquisition system",
            "Performed transient heat transfer analysis to optimize surface geometry, reducing vaporization rates through selection of micro-finned structures validated via high-speed camera visualization",
        ],
        technologies: &["LabVIEW", "Cryogenics", "Heat Transfer"],
        resume_tags: BOTH,
        exclude_from_about: false,
    },
    ExperienceItem {
        id: "c3",
        role: "Thermal Engineer",
        organization: "Blue Origin",
        period: "Jul. 2023 - Aug. 2024",
        kind: ExperienceType::Career,
        description: "Modeled and simulated NASA Artemis V crewed lunar lander systems.",
        bullets: &[
            "Modeled and simulated NASA Artemis V crewed lunar lander radiator, surface access system, and docking system in Thermal Desktop, validated results against human-rated temperature limits",
            "Performed nodal reduction trades to reduce model runtime by 50%, ran optical and thermophysical property case studies to meet component temperature limits",
            "Conducted thermal spreading analysis on 104 electronic components in Ansys Icepak based on vehicle geometry and avionics heat loads, reducing passive thermal system mass by 53 kg",
            "Optimized cold plate design via Icepak to cut manufacturing and quality testing time by 40%, programmed scripts to reduce analysis time by 80%",
            "Analyzed cold plate design and avionics configuration to decide between brazen and additive manufacturing processes, progressing vertical integration initiative",
            "Led initiative to parse, clean, and organize over 2000 NASA and internal thermophysical and optical properties using Python into a central database used across Lunar teams",
        ],
        technologies: &["Thermal Desktop", "Ansys Icepak", "Python", "System Modeling"],
        resume_tags: THERMAL,
        exclude_from_about: false,
    },
    ExperienceItem {
        id: "bo-ml",
        role: "Thermal Engineer",
        organization: "Blue Origin",
        period: "Jul. 2023 - Aug. 2024",
        kind: ExperienceType::Career,
        description: "ML focused role description for Blue Origin",
        bullets: &[
            "Led cross-functional initiative to consolidate 2,000+ thermophysical and optical properties from NASA databases and internal testing into centralized database, establishing single source of truth used by 40+ engineers across Blue Moon program",
            "Engineered machine learning model using PyTorch and Scikit-learn to interpolate missing thermal property data across temperature ranges, reducing reliance on expensive material testing by predicting conductivity and emissivity values with <5% error vs. experimental validation",
            "Modeled and simulated NASA Artemis V crewed lunar lander radiator, surface access system, and docking system in Thermal Desktop, ensuring components met mission profiles in lunar environement",
        ],
        technologies: &["PyTorch", "Scikit-learn", "Python"],
        resume_tags: ML,
        exclude_from_about: true,
    },
    ExperienceItem {
        id: "c4",
        role: "Hardware Design Lead",
        organization: "New Ascent",
        period: "Jul. 2022 - May 2023",
        kind: ExperienceType::Career,
        description: "Developed ConOps and system architecture for mission to deploy and recover ChipSats.",
        bullets: &[
            "Developed ConOps and system architecture for mission to deploy and recover ChipSats",
            "Designed fixed antennae ground station via structural and thermal analysis, and electrical design for an uninterrupted solar power system",
            "Assembled bill of materials of store-bought parts to assemble antennae station",
            "Programmed C++ firmware to manage communication between Raspberry Pi ChipSats and RAK5146 ground nodes using LoRa and Node-RED",
        ],
        technologies: &["C++", "LoRa", "Node-RED", "Thermal Analysis"],
        resume_tags: THERMAL,
        exclude_from_about: false,
    },
    ExperienceItem {
        id: "c5",
        role: "Machine Learning Intern",
        organization: "USDA",
        period: "May 2021 - Aug. 2021",
        kind: ExperienceType::Career,
        description: "Developed neural network regression model using PyTorch to predict corn and soybean yields.",
        bullets: &[
            "Developed neural network regression model using PyTorch to predict corn and soybean yields based on soil nitrogen concentrations and weather data, achieving R\u{b2} = 0.72 across 500+ Nebraska farm plots, enabling data-driven fertilizer application recommendations",
            "Engineered automated data pipeline using Python and Pandas to extract, clean, and standardize agronomic data from 200+ PDF farm reports into unified database, reducing data entry time by 85%",
            "Created interactive data visualizations using Matplotlib to communicate nitrogen-yield response curves and cost-benefit analysis of precision agriculture techniques to USDA Agricultural Research scientists, incorporated model into production-ready decision support system (DSS)",
        ],
        technologies: &["PyTorch", "Sci-Kit", "Pandas", "Python", "Matplotlib"],
        resume_tags: ML,
        exclude_from_about: false,
    },
    ExperienceItem {
        id: "r1",
        role: "Wildfire Drone Principal Researcher",
        organization: "UMD Robotics Research Center",
        period: "Aug. 2022 - May 2023",
        kind: ExperienceType::Research,
        description: "Investigating wildfire fighting capabilities of modern drone systems.",
        bullets: &[
            "Started an original research project under Dr. Mumu Xu investigating wildfire fighting capabilities of modern drone systems, including consumer and professional drone kits",
            "Compiled current data into summary report outlining current research and areas for exploration",
            "Designed autonomous thermal imaging drone using store bought drone and FLIR thermal camera",
            "Programmed automatic fire detection system to guide drone to possible fires and relay imagery",
        ],
        technologies: &["Robotics", "FLIR", "Automation"],
        resume_tags: THERMAL,
        exclude_from_about: false,
    },
    ExperienceItem {
        id: "r2",
        role: "Spacesuit Cooling Backpack Principal Researcher",
        organization: "UMD Space Systems Lab",
        period: "Aug. 2022 - Dec. 2022",
        kind: ExperienceType::Research,
        description: "Developed a backpack water cooling system for NASA spacesuit for use in a proposed Mars mission.",
        bullets: &[
            "Developed a backpack water cooling system for NASA spacesuit for use in a proposed Mars mission",
            "Researched cooling techniques, running trades on cooling system, material properties, and power",
            "Analyzed cooling capabilities with Peltier module to reduce cooling package volume by 18 percent",
        ],
        technologies: &["Thermodynamics", "System Design"],
        resume_tags: THERMAL,
        exclude_from_about: false,
    },
    ExperienceItem {
        id: "l1",
        role: "Thermal Systems Lead",
        organization: "NASA Goddard Lunar Rover Capstone",
        period: "Sep. 2022 - May 2023",
        kind: ExperienceType::Leadership,
        description: "Developed thermal architecture for compact lunar rover to survive 28-day South Pole mission.",
        bullets: &[
            "Developed thermal architecture for compact lunar rover to survive 28-day South Pole mission using thermoelectric heaters, lightweight RHUs, and foldable radiator",
            "Analyzed lunar thermal loads based on satellite data, sized radiators and heaters for polar mission",
            "Defended design decisions against NASA Goddard engineers at PDR and CDR",
        ],
        technologies: &["Thermal Architecture", "Leadership"],
        resume_tags: THERMAL,
        exclude_from_about: false,
    },
    ExperienceItem {
        id: "l2",
        role: "Thermal Subsystem Team Member",
        organization: "SEDS Rocket Team",
        period: "Sep. 2022 - May 2023",
        kind: ExperienceType::Leadership,
        description: "Designed 350 lbf NO2/ethanol liquid bipropellant rocket engine.",
        bullets: &[
            "Designed 350 lbf NO2/ethanol liquid bipropellant rocket engine",
            "Analyzed combustion chamber insulation options using RPA, landing on phenolic resin ablative",
            "Scripted thermal resistance network in MATLAB to find material temps and ensure engine safety",
        ],
        technologies: &["Propulsion", "MATLAB", "RPA"],
        resume_tags: THERMAL,
        exclude_from_about: false,
    },
    ExperienceItem {
        id: "e1",
        role: "M.S. Aerospace Engineering - Fluids",
        organization: "University of Washington",
        period: "March 2027",
        kind: ExperienceType::Academic,
        description: "",
        bullets: &[],
        technologies: &[],
        resume_tags: BOTH,
        exclude_from_about: false,
    },
    ExperienceItem {
        id: "e2",
        role: "B.S. Aerospace Engineering",
        organization: "University of Maryland",
        period: "May 2023",
        kind: ExperienceType::Academic,
        description: "",
        bullets: &[],
        technologies: &[],
        resume_tags: BOTH,
        exclude_from_about: false,
    },
];
