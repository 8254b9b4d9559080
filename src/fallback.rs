//! Built-in sample directory.
//!
//! Used whenever the configured source cannot be fetched or parsed, so the
//! directory is always browsable.

use crate::person::Person;

/// Number of records in the sample directory.
pub const LEN: usize = 10;

const SAMPLE: [[&str; 5]; LEN] = [
    ["John Smith",      "University of Technology",       "Machine Learning",            "Computer Vision",    "Robotics"],
    ["Maria Garcia",    "Global Health Institute",        "Epidemiology",                "Public Health",      "Biostatistics"],
    ["Aisha Johnson",   "Center for AI Research",         "Natural Language Processing", "Machine Learning",   "AI Ethics"],
    ["Wei Chen",        "National Energy Laboratory",     "Renewable Energy",            "Battery Storage",    "Materials Science"],
    ["Priya Patel",     "Coastal Marine Institute",       "Oceanography",                "Climate Science",    "Marine Biology"],
    ["James Brown",     "University of Technology",       "Data Science",                "Statistics",         "Machine Learning"],
    ["Elena Rossi",     "European Policy Forum",          "Economics",                   "Public Policy",      "International Trade"],
    ["Kwame Mensah",    "African Development Institute",  "Agriculture",                 "Food Security",      "Sustainable Development"],
    ["Sofia Andersson", "Nordic School of Design",        "Human-Computer Interaction",  "User Experience",    "Accessibility"],
    ["Carlos Mendoza",  "Institute for Urban Studies",    "Urban Planning",              "Transportation",     "Public Policy"],
];

/// The sample directory, in fixed order.
pub fn records() -> Vec<Person> {
    SAMPLE
        .iter()
        .map(|[name, affiliation, k1, k2, k3]| Person::new(*name, *affiliation, *k1, *k2, *k3))
        .collect()
}
