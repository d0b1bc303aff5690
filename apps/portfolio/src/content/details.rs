use crate::gallery::detail::{Block, DetailEntry, DetailRegistry, DetailSection, ProjectDetail};

/// Wires every written-up project into the registry. Projects missing here
/// render the "under construction" placeholder.
pub fn build_registry() -> DetailRegistry {
    let mut registry = DetailRegistry::new();
    registry
        .register("uw1", DetailEntry::Article(&CRYO_BOILING))
        .register("uw2", DetailEntry::Article(&LIQUID_ACQUISITION_DEVICE))
        .register("uw3", DetailEntry::Article(&LAPLACIAN_SMOOTHING))
        .register("bo1", DetailEntry::Article(&SURFACE_ACCESS_MODEL))
        .register("bo2", DetailEntry::Paged(&AVIONICS_TRADES))
        .register("bo3", DetailEntry::Article(&LUNAR_PROPERTIES_DATABASE))
        .register("umd1", DetailEntry::Article(&LUNAR_ROVER))
        .register("umd2", DetailEntry::Article(&ROCKET_NOZZLE))
        .register("usda1", DetailEntry::Article(&CROP_YIELD))
        .register("pers1", DetailEntry::Article(&AFIB_PREDICTION));
    registry
}

// ────────────────────────────────────────────────────────────────────────────
// University of Washington
// ────────────────────────────────────────────────────────────────────────────

static CRYO_BOILING: ProjectDetail = ProjectDetail {
    title: "Optimizing surfaces to enhance cryogenic boiling for space applications",
    summary: "Researching and testing micro-finned surface geometries to improve heat transfer \
efficiency in cryogenic propellant systems.",
    technologies: &["Machining", "LabView", "Cryogenic Systems", "Thermal Analysis"],
    info: "Role: Research Engineer \u{2022} Lab: UW Thermal Lab",
    sections: &[DetailSection {
        heading: "Project Overview",
        blocks: &[
            Block::Paragraph {
                text: "Premise: I conducted an experimental study on nucleate pool boiling in liquid \
nitrogen to evaluate how surface geometric modifications influence heat transfer in cryogenic \
propellants. Using a 1 mm grooved aluminum cylinder with embedded thermocouples and a cartridge \
heater, I developed a radial thermal model to estimate surface heat flux and boiling behavior under \
steady-state conditions.",
            },
            Block::Paragraph {
                text: "This project is a continuation of work done by Professor Jim Hermanson, Andrew \
Jacob and Shuba Murthy at the University of Washington in partnership with Blue Origin. Our findings \
will enable more efficient cryogenic cooling of critical components for both terrestrial and space \
applications, and more efficient boiling of other cryogenic liquids such as liquid oxygen.",
            },
            Block::Bullets {
                items: &[
                    "1 mm fin configuration requires precise and highly accurate lathe work",
                    "All data and experimental methods had to be cross-checked with previous data \
collection methods to stay consistent with earlier experiments",
                ],
            },
            Block::Gallery,
            Block::Paragraph {
                text: "Action: Using a lathe and 3-axis mill, I designed and machined an aluminum \
test cylinder with 1 mm grooves and precise thermocouple placement. I created a custom VI in LabVIEW, \
calibrated cryogenic thermocouples with redundancies, ran multiple LN2 tests and implemented a \
MATLAB-based thermal resistance model to compute convective heat transfer coefficients from the raw \
temperature data, mapping the nucleate boiling curve for 1 mm, 2 mm and 3 mm fin widths.",
            },
            Block::Callout {
                title: "Results",
                text: "Demonstrated that micro-scale surface features measurably alter boiling \
behavior and that an optimum fin width exists. The work will be presented at the American Society \
for Gravitational and Space Research in December 2025.",
            },
        ],
    }],
    images: &[
        "assets/onemm_photo_1.png",
        "assets/onemm_photo_2.png",
        "assets/onemm_photo_3.png",
    ],
};

static LIQUID_ACQUISITION_DEVICE: ProjectDetail = ProjectDetail {
    title: "Designing a Liquid Acquisition Device for improved cryogenic propellant transfer",
    summary: "Developing and testing LAD prototypes to ensure reliable fuel delivery in \
microgravity environments.",
    technologies: &["Machining", "LabView", "Cryogenic Systems", "Thermal Test"],
    info: "Role: Research Assistant (In Progress) \u{2022} Partners: University of Washington & Blue Origin",
    sections: &[
        DetailSection {
            heading: "Context",
            blocks: &[
                Block::Paragraph {
                    text: "This ongoing project aims to improve the reliability of Liquid Acquisition \
Devices (LADs), hardware used to move cryogenic propellants such as liquid oxygen, hydrogen and \
methane inside spacecraft under microgravity. Heat leaks and pressure differences can cause vapor \
bubbles to form inside the device, degrading performance.",
                },
                Block::Paragraph {
                    text: "While LADs have been used with storable propellants, their behavior with \
cryogenic fluids is poorly understood, creating uncertainty in propulsion system design for \
long-duration or in-space refueling missions.",
                },
                Block::Gallery,
            ],
        },
        DetailSection {
            heading: "Project Goals",
            blocks: &[Block::Bullets {
                items: &[
                    "Characterize how heat leaks generate vapor bubbles inside a cryogenic LAD.",
                    "Study how bubble motion, collapse, and re-absorption affect liquid delivery.",
                    "Evaluate how wall surface texture influences bubble formation and rewetting.",
                    "Identify pressure and operating limits that prevent vapor intrusion through the LAD screen.",
                    "Use insights to guide the design of next-generation cryogenic LADs for Blue Origin.",
                ],
            }],
        },
        DetailSection {
            heading: "Approach",
            blocks: &[Block::Paragraph {
                text: "I support the development of a cryogenic test platform that enables high-speed \
visualization, thermal modeling, and controlled testing with liquid nitrogen as an oxygen analog. \
Bubble dynamics, heat transfer behavior, and LAD flow stability will feed into a thermal resistance \
model and inform future LAD surface geometries.",
            }],
        },
        DetailSection {
            heading: "Potential Impact",
            blocks: &[Block::Paragraph {
                text: "This work will help reduce risks in cryogenic propulsion, in-space refueling, \
and long-duration propellant storage, and supports the advancement of LAD technology toward higher \
Technology Readiness Levels.",
            }],
        },
    ],
    images: &["assets/LAD_1.png", "assets/LAD_2.png", "assets/LAD_3.png"],
};

static LAPLACIAN_SMOOTHING: ProjectDetail = ProjectDetail {
    title: "Laplacian Dynamic Smoothing Algorithm for improved CFD runtime and fidelity",
    summary: "Developing algorithms to optimize mesh quality for computational fluid dynamics \
simulations.",
    technologies: &["MATLAB", "Bash", "Linux", "CFD", "Machine Learning"],
    info: "Role: Researcher \u{2022} Organization: UW Medicine",
    sections: &[DetailSection {
        heading: "Project Overview",
        blocks: &[
            Block::Paragraph {
                text: "Premise: CFD simulations often suffer from poor mesh quality in complex \
geometries. This project applies Laplacian smoothing techniques dynamically.",
            },
            Block::Bullets {
                items: &[
                    "Computational cost of remeshing.",
                    "Maintaining geometric fidelity.",
                ],
            },
            Block::Gallery,
            Block::Paragraph {
                text: "Action: Developed scripts in MATLAB and Bash to automate the smoothing process.",
            },
        ],
    }],
    images: &[
        "assets/cardio_photo_1.png",
        "assets/cardio_photo_2.png",
        "assets/cardio_photo_3.png",
    ],
};

// ────────────────────────────────────────────────────────────────────────────
// Blue Origin
// ────────────────────────────────────────────────────────────────────────────

static SURFACE_ACCESS_MODEL: ProjectDetail = ProjectDetail {
    title: "Surface Access System Thermal Model for Crewed MK2 Lunar Lander",
    summary: "Developed a high-fidelity, validated Thermal Desktop Model in under a week to \
accommodate critical design pivots on the crewed MK2 Lunar Lander for the NASA Artemis V mission.",
    technologies: &[
        "Thermal Desktop",
        "AutoCAD",
        "SINDA/FLUINT",
        "Orbital Mechanics",
        "Nodalization",
    ],
    info: "Project Duration: 1 Week \u{2022} Role: Lead Thermal Modeler",
    sections: &[
        DetailSection {
            heading: "The Challenge",
            blocks: &[Block::Paragraph {
                text: "One week prior to a critical presentation, the partner engineering firm \
(Honeybee Robotics) pivoted the design from a staircase to an elevator surface access system. The \
existing thermal data was rendered obsolete; I had to build a new validated model, integrate it into \
the full system, and generate updated results before the deadline.",
            }],
        },
        DetailSection {
            heading: "The Outcome",
            blocks: &[Block::Paragraph {
                text: "Completed the fully validated model in under one week. The team reran the \
system analysis in time for the presentation, and the model became the foundation for all future \
thermal trade studies on the access system.",
            }],
        },
        DetailSection {
            heading: "Technical Implementation",
            blocks: &[
                Block::Feature {
                    title: "Optimized Nodalization",
                    text: "Maintained a strict node count of <500 to preserve runtime speed without \
sacrificing fidelity on critical components. Reconstructed CAD geometry using polygonal shapes to \
allow for merged nodes.",
                },
                Block::Feature {
                    title: "Kinematics & Articulation",
                    text: "Implemented articulators and logic symbols (configuration_state) to cycle \
between Stowed, Partially Stowed, and Deployed states using exact numerical angles from CAD.",
                },
                Block::Feature {
                    title: "System Integration Strategy",
                    text: "Created domain tags for interface nodes and mapped connection points with \
the system model owner so the elevator model could be XREF'd into the parent assembly seamlessly.",
                },
                Block::Feature {
                    title: "Property Aliasing",
                    text: "Established unique aliases for optical and thermophysical properties, \
allowing rapid global modifications as materials were down-selected.",
                },
                Block::Callout {
                    title: "Validation Methodology",
                    text: "Ran the isolated elevator assembly in the mission-specific NRHO, performed \
a gradient analysis to identify connection faults and analyzed min/max temperatures to flag anomalies \
before hand-off.",
                },
            ],
        },
    ],
    images: &[],
};

static AVIONICS_TRADES: [ProjectDetail; 4] = [
    ProjectDetail {
        title: "Slow Thermal Spreading Trade",
        summary: "Streamlined a complex thermal trade study by developing an automated master \
spreadsheet, reducing analysis turnaround from 1 week to <1 day.",
        technologies: &[
            "Process Optimization",
            "Data Automation",
            "Thermal Analysis",
            "Cross-Functional Leadership",
        ],
        info: "Impact: 80% Time Reduction \u{2022} Role: Thermal Analyst",
        sections: &[
            DetailSection {
                heading: "The Challenge",
                blocks: &[Block::Paragraph {
                    text: "I was assigned to reconfigure the active cooling system for the avionics \
ring of over 100 electronics boxes onboard our MK2 lunar lander. The data was scattered across \
subteams, and a simple baseline analysis required 3-4 meetings over weeks.",
                }],
            },
            DetailSection {
                heading: "The Solution",
                blocks: &[Block::Paragraph {
                    text: "I created a master spreadsheet tool with automated tallying, drop-down \
menus, and an embedded 1D thermal resistance network, allowing immediate verification of component \
temperatures against limits.",
                }],
            },
            DetailSection {
                heading: "Technical Implementation",
                blocks: &[
                    Block::Feature {
                        title: "Stakeholder Discovery",
                        text: "Set up meetings with subteams to understand their design process and \
data storage, ensuring the solution addressed the root cause of the bottleneck.",
                    },
                    Block::Feature {
                        title: "Master Spreadsheet",
                        text: "Implemented version control and automated tallying of box counts and \
thermal mass. Used drop-downs to minimize data entry errors.",
                    },
                    Block::Feature {
                        title: "Embedded 1D Thermal Model",
                        text: "Programmed a 1D thermal resistance network directly into Excel, \
instantly flagging failing components.",
                    },
                    Block::Feature {
                        title: "Visual Communication",
                        text: "Created diagrams of proposed configurations so the design team could \
conduct structural analysis without further translation.",
                    },
                    Block::Callout {
                        title: "The Result",
                        text: "Analysis turnaround dropped from over a week to less than a day. The \
tool served as the 'one stop shop' for the trade.",
                    },
                ],
            },
        ],
        images: &[],
    },
    ProjectDetail {
        title: "Safety Factor Optimization: Cold Plate Consolidation",
        summary: "Achieved a 30% reduction in cold plate count to mitigate heat leak paths, directly \
supporting the vehicle's flight safety rating upgrade from 15 to 98.",
        technologies: &[
            "Ansys Icepak",
            "Thermal Spreading",
            "Safety Factor Analysis",
            "Flight Readiness",
        ],
        info: "Impact: 30% Count Reduction \u{2022} Role: Thermal Analyst",
        sections: &[
            DetailSection {
                heading: "The Challenge",
                blocks: &[Block::Paragraph {
                    text: "Over 100 electronics boxes used a 1:1 cold plate ratio, creating numerous \
potential heat leak paths. A crewed mission required a safety rating of 98; the design sat at ~15.",
                }],
            },
            DetailSection {
                heading: "The Outcome",
                blocks: &[Block::Paragraph {
                    text: "Reduced the overall cold plate count by 30% by engineering a 3:1 \
box-to-cold plate ratio configuration, moving the vehicle significantly closer to its \
flight-readiness target.",
                }],
            },
            DetailSection {
                heading: "Technical Implementation",
                blocks: &[
                    Block::Feature {
                        title: "High-Fidelity Icepak Modeling",
                        text: "Constructed thermal spreading models (Box \u{2192} TIM \u{2192} Adapter \
\u{2192} TIM \u{2192} Coldplate) accounting for variable TIM conductance, inlet temperatures, and \
contact resistance.",
                    },
                    Block::Feature {
                        title: "Fidelity Optimization",
                        text: "Refined the model to apply conductance only over the fluid channel area \
(~25% of surface), improving accuracy with negligible runtime impact.",
                    },
                    Block::Feature {
                        title: "Configuration Logic",
                        text: "Iterated through box-to-plate groupings toward a 3:1 ratio, balancing \
spreading penalties against fewer fluid connections.",
                    },
                    Block::Feature {
                        title: "Standardization",
                        text: "The spreading models became the standard for future electronic box \
performance iterations across the Lunar teams.",
                    },
                    Block::Callout {
                        title: "The Result",
                        text: "Validation of the reduced-count architecture was the key enabler for \
the vehicle's safety certification strategy.",
                    },
                ],
            },
        ],
        images: &[],
    },
    ProjectDetail {
        title: "Mass Optimization: Thermal Spreading Trade Study",
        summary: "Salvaged a critical thermal design trade by engineering a 53kg mass reduction \
through parametric analysis and hybrid configuration strategies, preserving vehicle safety margins.",
        technologies: &[
            "Parametric Analysis",
            "Mass Optimization",
            "Thermal Trade Studies",
            "Structural Integration",
            "Data Visualization",
        ],
        info: "Impact: 53kg Mass Reduction \u{2022} Role: Thermal Analyst",
        sections: &[
            DetailSection {
                heading: "The Challenge",
                blocks: &[Block::Paragraph {
                    text: "Near the end of the spreading trade, the improved design turned out 50 kg \
heavier than baseline and leadership prepared to scrap it.",
                }],
            },
            DetailSection {
                heading: "The Outcome",
                blocks: &[Block::Paragraph {
                    text: "Used Ansys Icepak to find a configuration that cut 53kg with fewer than 5 \
additional cold plates. The proposal reversed the decision and was integrated into the final design.",
                }],
            },
            DetailSection {
                heading: "Technical Implementation",
                blocks: &[
                    Block::Feature {
                        title: "Parametric Thickness Sizing",
                        text: "Parameterized adapter plate thickness from 0.25\u{201d} down to \
0.1\u{201d} in 0.025\u{201d} increments, validated with the structural team.",
                    },
                    Block::Feature {
                        title: "Hybrid Configuration Strategy",
                        text: "Decoupled surface-area-intensive units to 1:1 cold plate mappings, \
removing heavy adapter plate material.",
                    },
                    Block::Feature {
                        title: "Data-Driven Advocacy",
                        text: "Compared Baseline vs. Heavy vs. Optimized designs to show that <5 extra \
cold plates was a viable trade for 53kg.",
                    },
                    Block::Feature {
                        title: "Mission Safety Impact",
                        text: "Preserved the mass budget while keeping thermal reliability, \
contributing to the safety factor increase.",
                    },
                    Block::Callout {
                        title: "Trade Validation",
                        text: "Validated through iterative mass vs. performance analysis and \
cross-functional verification with the structural team.",
                    },
                ],
            },
        ],
        images: &[],
    },
    ProjectDetail {
        title: "Reducing Cold Plate Variety to Decrease Qual and Test Time",
        summary: "Optimized cold plate sizing lineup to cut manufacturing qualification time by 50% \
while maintaining thermal performance targets.",
        technologies: &[
            "Ansys Icepak",
            "Parametric Analysis",
            "Manufacturing Optimization",
            "Cost Reduction",
        ],
        info: "Impact: 50% Qual Time Reduction \u{2022} Role: Thermal Analyst",
        sections: &[
            DetailSection {
                heading: "The Challenge",
                blocks: &[Block::Paragraph {
                    text: "The baseline used 6 cold plate sizes, each needing a ~4 week qualification \
cycle: 24 weeks of testing.",
                }],
            },
            DetailSection {
                heading: "The Outcome",
                blocks: &[Block::Paragraph {
                    text: "Proposed a consolidated lineup of three sizes (9x6, 12x6, 15x6), cutting \
the timeline to 12 weeks with negligible thermal performance loss.",
                }],
            },
            DetailSection {
                heading: "Technical Implementation",
                blocks: &[
                    Block::Feature {
                        title: "Parametric Automation",
                        text: "Set up Icepak case runs cycling through cold plate sizes and HTC values \
across thousands of combinations.",
                    },
                    Block::Feature {
                        title: "Optimization Logic",
                        text: "Balanced tailored weight savings of high variety against the faster \
testing of low variety.",
                    },
                    Block::Feature {
                        title: "Decision Matrix",
                        text: "Mapped Electronics Unit vs. Cold Plate Size vs. Count vs. Pass/Fail to \
visualize the impact of consolidation.",
                    },
                    Block::Feature {
                        title: "Manufacturing Alignment",
                        text: "Quantified the time savings with the manufacturing team (4 weeks per \
variant).",
                    },
                    Block::Callout {
                        title: "Strategic Validation",
                        text: "Validated against thermal margins and confirmed by manufacturing \
stakeholders as a 12-week schedule saving.",
                    },
                ],
            },
        ],
        images: &[],
    },
];

static LUNAR_PROPERTIES_DATABASE: ProjectDetail = ProjectDetail {
    title: "Lunar Thermal Properties Database",
    summary: "Created a centralized, validated 'one stop shop' database for thermal properties, \
eliminating data discrepancies and establishing a single source of truth for the entire business unit.",
    technologies: &["Python", "Pandas", "Blue Origin"],
    info: "Role: Thermal Engineer \u{2022} Organization: Blue Origin",
    sections: &[
        DetailSection {
            heading: "The Challenge",
            blocks: &[Block::Paragraph {
                text: "Engineers consulted disparate sources (Thermal Desktop files, internal Excel \
sheets, NASA lists), leading to duplicate properties with conflicting values and no standardized \
validation process.",
            }],
        },
        DetailSection {
            heading: "The Outcome",
            blocks: &[Block::Paragraph {
                text: "A centralized database consolidating over 2000 property sets, adopted across the \
entire business unit as the mandatory basis for all future thermal models.",
            }],
        },
        DetailSection {
            heading: "Technical Implementation",
            blocks: &[
                Block::Feature {
                    title: "Automated Data Aggregation",
                    text: "A Python/Pandas script parsed Thermal Desktop and Excel files, scraping \
over 2000 sets of data, scrubbing duplicates and merging entries.",
                },
                Block::Feature {
                    title: "Data Gap Interpolation",
                    text: "Linear regression interpolated property values between known temperature \
points, flagging derived data for transparency.",
                },
                Block::Feature {
                    title: "Robust Version Control",
                    text: "Generated database files were uploaded to Windchill under strict version \
control.",
                },
                Block::Feature {
                    title: "Process Governance",
                    text: "Established a Change Control Board of senior engineers and a standardized \
request sheet.",
                },
                Block::Callout {
                    title: "System Validation",
                    text: "The script emitted identical Excel and Thermal Desktop files, with source \
citations embedded for every property.",
                },
            ],
        },
    ],
    images: &[],
};

// ────────────────────────────────────────────────────────────────────────────
// University of Maryland
// ────────────────────────────────────────────────────────────────────────────

static LUNAR_ROVER: ProjectDetail = ProjectDetail {
    title: "Lunar South Pole Rover design with NASA Goddard",
    summary: "Developing the thermal architecture for a compact lunar rover to survive a 14-day \
mission in the extreme environment of the Lunar South Pole.",
    technologies: &[
        "Spacecraft Thermal Analysis",
        "Thermal Desktop",
        "Systems Engineering",
        "Crossteam Collaboration",
    ],
    info: "Role: Thermal Systems Lead \u{2022} Partner: NASA Goddard",
    sections: &[
        DetailSection {
            heading: "Premise",
            blocks: &[
                Block::Paragraph {
                    text: "A University of Maryland & NASA Goddard collaborative project to design a \
rover capable of operating at the Lunar South Pole, including excursions into permanently shadowed \
regions (PSRs) to search for water-ice using NASA's VIPER payload.",
                },
                Block::Paragraph {
                    text: "As Thermal Systems Lead I owned thermal architecture, analysis, sizing, and \
simulation of all active and passive thermal control elements, working with Seth Abramczyk and Vivek \
Dwivedi (GSFC) and the power and mission subteams.",
                },
            ],
        },
        DetailSection {
            heading: "Challenges",
            blocks: &[
                Block::Bullets {
                    items: &[
                        "Extreme temperature swings at the Lunar South Pole",
                        "Extended mission duration with periods of direct sunlight and deep shadow",
                        "Strict component temperature limits for avionics and VIPER-derived instruments",
                        "Tight mass and power budgets typical of small planetary rovers",
                        "Operation inside PSRs, where temperatures can drop below 40 K",
                    ],
                },
                Block::Gallery,
            ],
        },
        DetailSection {
            heading: "Action",
            blocks: &[
                Block::Paragraph {
                    text: "Starting from a requirements list and Concept of Operations built on LRO \
Diviner temperature data, I proposed an active-passive thermal system:",
                },
                Block::Bullets {
                    items: &[
                        "Dedicated radiators",
                        "Thermoelectric heaters",
                        "High conductivity copper heat straps for heat transport",
                    ],
                },
                Block::Paragraph {
                    text: "Foldable radiators and RHUs were investigated and ruled out for cost, low \
TRL, and complexity. Radiator area and heater power were sized by hand for hot and cold cases, then \
validated with a full Thermal Desktop model run through a South Pole sortie.",
                },
            ],
        },
        DetailSection {
            heading: "Results",
            blocks: &[Block::Callout {
                title: "Results",
                text: "Defended the design at PDR and CDR with NASA Goddard engineers and UMD faculty, \
demonstrating survival of a 13-day South Pole mission including PSR operations.",
            }],
        },
    ],
    images: &[
        "assets/rover_photo_1.png",
        "assets/rover_photo_2.png",
        "assets/rover_photo_3.png",
    ],
};

static ROCKET_NOZZLE: ProjectDetail = ProjectDetail {
    title: "Rocket Nozzle Thermal Analysis",
    summary: "Simulating thermal loads and cooling strategies for bipropellant rocket nozzles.",
    technologies: &["MATLAB", "Thermal Analysis", "Propulsion"],
    info: "Role: Student Engineer \u{2022} Organization: SEDS",
    sections: &[DetailSection {
        heading: "Project Overview",
        blocks: &[
            Block::Paragraph {
                text: "Premise: As part of the SEDS propulsion team, I contributed to the design and \
testing of a 350 lbf bipropellant liquid rocket engine, focusing on the thermal performance of the \
combustion chamber and nozzle during hot-fire operations.",
            },
            Block::Paragraph {
                text: "Challenges: Calculating the convective heat transfer coefficient of the film \
cooling layer. Working from Sutton and Huzel & Huang, I tried multiple Prandtl/Nusselt based methods \
and arrived at an HTC that closely matched Rocket Propulsion Analysis (RPA).",
            },
            Block::Gallery,
            Block::Paragraph {
                text: "Action: I built a 2-D thermal resistance network in MATLAB modelling combustion \
temperatures from NASA CEA data, convection, film layer cooling, and conduction through the ablative \
and metal outer wall, accounting for carbon sediment buildup.",
            },
            Block::Callout {
                title: "Results",
                text: "Comparing a non-ablative case with a phenolic resin ablative case verified that \
the system would survive hot fire with the phenolic resin ablative.",
            },
        ],
    }],
    images: &[
        "assets/SEDS_photo1.png",
        "assets/SEDS_photo2.png",
        "assets/SEDS_photo3.png",
    ],
};

// ────────────────────────────────────────────────────────────────────────────
// USDA & personal
// ────────────────────────────────────────────────────────────────────────────

static CROP_YIELD: ProjectDetail = ProjectDetail {
    title: "Machine Learning Pipeline to Predict Crop Yield based on Soil Nitrogen Levels",
    summary: "A data-driven approach to precision agriculture using neural networks to optimize \
fertilizer usage.",
    technologies: &["Python", "Pytorch", "Sci-Kit Learn", "Machine Learning"],
    info: "Role: ML Intern \u{2022} Organization: USDA",
    sections: &[DetailSection {
        heading: "Project Overview",
        blocks: &[
            Block::Paragraph {
                text: "Premise: Developed a neural network regression model using PyTorch to predict \
corn and soybean yields based on soil nitrogen concentrations and weather data.",
            },
            Block::Paragraph {
                text: "Challenges: Agronomic data existed in 200+ PDF farm reports, requiring \
significant cleaning and standardization to create a unified training database.",
            },
            Block::Gallery,
            Block::Paragraph {
                text: "Action: Engineered an automated Python/Pandas pipeline to extract and \
standardize the data, reducing data entry time by 85%, and used Matplotlib to communicate \
nitrogen-yield response curves to USDA Agricultural Research scientists.",
            },
            Block::Callout {
                title: "Results",
                text: "R\u{b2} = 0.72 across 500+ Nebraska farm plots; the model was incorporated into a \
production-ready decision support system.",
            },
        ],
    }],
    images: &[
        "assets/usda_photo_1.png",
        "assets/usda_photo_2.png",
        "assets/usda_photo_3.png",
    ],
};

static AFIB_PREDICTION: ProjectDetail = ProjectDetail {
    title: "Atrial Fibrillation Prediction from Wearable ECG Data",
    summary: "Developing ML models to detect early signs of Afib using consumer-grade wearable \
sensors.",
    technologies: &["Machine Learning", "Python", "Healthcare"],
    info: "Role: Independent Developer \u{2022} Category: Personal Project",
    sections: &[DetailSection {
        heading: "Project Overview",
        blocks: &[
            Block::Paragraph {
                text: "Premise: Get familiar with industry-standard machine learning pipelines, \
including data preparation and validation, model selection, fine-tuning, and interpretation of \
results.",
            },
            Block::Paragraph {
                text: "Challenges: Two PhysioNet databases of ECG data collected from patients with AF, \
used to compare different machine learning models and strategies.",
            },
            Block::Paragraph {
                text: "I'm still working on it, check back later for updates!",
            },
            Block::Gallery,
        ],
    }],
    images: &[
        "assets/af_project_photo1.png",
        "assets/af_project_photo2.png",
        "assets/af_project_photo3.png",
    ],
};
