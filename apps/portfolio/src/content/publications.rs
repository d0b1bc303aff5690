use crate::models::profile::PublicationItem;

pub const PUBLICATIONS: &[PublicationItem] = &[
    PublicationItem {
        id: "pub1",
        title: "Blue Origin LAD Paper",
        venue: Some("Upcoming"),
        status: "In Progress",
        description: "Characterization of Liquid Acquisition Device (LAD) performance in liquid \
nitrogen for propellant management systems, utilizing experimental cryogenic testing and transient \
heat transfer analysis.",
        link: None,
    },
    PublicationItem {
        id: "pub2",
        title: "UW Medicine ML/CFD Paper",
        venue: Some("Upcoming"),
        status: "In Progress",
        description: "Development of an AI-driven computational pipeline combining nnU-Net \
segmentation and TUCAN simulations to predict atrial fibrillation-induced thrombus formation risk.",
        link: None,
    },
];
