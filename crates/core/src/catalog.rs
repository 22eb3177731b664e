//! Static form catalogs served to the profile creation surfaces.

/// Industries selectable on both profile forms.
pub const TANZANIA_INDUSTRIES: [&str; 13] = [
    "Agriculture & Agribusiness",
    "Fintech & Financial Services",
    "Healthcare & Pharmaceuticals",
    "Education & EdTech",
    "Manufacturing",
    "Tourism & Hospitality",
    "Real Estate & Construction",
    "Logistics & Transportation",
    "Renewable Energy",
    "ICT & Software",
    "Mining & Natural Resources",
    "Retail & E-commerce",
    "Other",
];

/// Business stages with the labels shown on the entrepreneur form.
pub const BUSINESS_STAGES: [(&str, &str); 3] = [
    ("idea", "Idea Stage (no revenue yet)"),
    ("startup", "Startup (early revenue, <2 years)"),
    ("growth", "Growth Stage (established, 2+ years)"),
];
