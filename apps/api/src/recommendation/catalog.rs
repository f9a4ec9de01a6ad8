//! Career Catalog: the fixed, statically typed registry of careers the engine ranks.
//!
//! Declaration order of `Career::ALL` is significant: it is the iteration order of
//! the rule-based scorer and therefore the tie-break order when scores are equal.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Placeholder used for salary and growth when a career is not in the catalog.
pub const NOT_AVAILABLE: &str = "Not available";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Career {
    DataScientist,
    SoftwareEngineer,
    WebDeveloper,
    UxUiDesigner,
    ProductManager,
    AiEngineer,
    CybersecuritySpecialist,
    BusinessAnalyst,
    FinancialAnalyst,
    MarketingSpecialist,
}

impl Career {
    pub const ALL: [Career; 10] = [
        Career::DataScientist,
        Career::SoftwareEngineer,
        Career::WebDeveloper,
        Career::UxUiDesigner,
        Career::ProductManager,
        Career::AiEngineer,
        Career::CybersecuritySpecialist,
        Career::BusinessAnalyst,
        Career::FinancialAnalyst,
        Career::MarketingSpecialist,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Career::DataScientist => "Data Scientist",
            Career::SoftwareEngineer => "Software Engineer",
            Career::WebDeveloper => "Web Developer",
            Career::UxUiDesigner => "UX/UI Designer",
            Career::ProductManager => "Product Manager",
            Career::AiEngineer => "AI Engineer",
            Career::CybersecuritySpecialist => "Cybersecurity Specialist",
            Career::BusinessAnalyst => "Business Analyst",
            Career::FinancialAnalyst => "Financial Analyst",
            Career::MarketingSpecialist => "Marketing Specialist",
        }
    }

    /// Position in `ALL`, used to index dense per-career score arrays.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn record(self) -> &'static CareerRecord {
        &CATALOG[self.index()]
    }
}

impl fmt::Display for Career {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown career: {0}")]
pub struct UnknownCareer(pub String);

impl FromStr for Career {
    type Err = UnknownCareer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CATALOG
            .iter()
            .map(|record| record.career)
            .find(|career| career.name() == s)
            .ok_or_else(|| UnknownCareer(s.to_string()))
    }
}

/// Static metadata for one catalog career.
#[derive(Debug)]
pub struct CareerRecord {
    pub career: Career,
    pub salary: &'static str,
    pub growth: &'static str,
    pub skills: &'static [&'static str],
}

/// Owned metadata as it appears in a recommendation. Built from a `CareerRecord`,
/// or from placeholders when the name is not in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerMetadata {
    pub salary: String,
    pub growth: String,
    pub skills: Vec<String>,
}

impl From<&CareerRecord> for CareerMetadata {
    fn from(record: &CareerRecord) -> Self {
        Self {
            salary: record.salary.to_string(),
            growth: record.growth.to_string(),
            skills: record.skills.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl CareerMetadata {
    pub fn placeholder() -> Self {
        Self {
            salary: NOT_AVAILABLE.to_string(),
            growth: NOT_AVAILABLE.to_string(),
            skills: vec![],
        }
    }
}

// Indexed by `Career::index()`; the ordering test below keeps the two in step.
static CATALOG: [CareerRecord; 10] = [
    CareerRecord {
        career: Career::DataScientist,
        salary: "$90,000-$160,000",
        growth: "36%",
        skills: &[
            "Python",
            "R",
            "SQL",
            "Machine Learning",
            "Statistics",
            "Data Visualization",
        ],
    },
    CareerRecord {
        career: Career::SoftwareEngineer,
        salary: "$80,000-$150,000",
        growth: "22%",
        skills: &[
            "Python",
            "JavaScript",
            "Git",
            "APIs",
            "Data Structures",
            "Algorithms",
        ],
    },
    CareerRecord {
        career: Career::WebDeveloper,
        salary: "$70,000-$130,000",
        growth: "13%",
        skills: &[
            "HTML",
            "CSS",
            "JavaScript",
            "React",
            "Node.js",
            "Responsive Design",
        ],
    },
    CareerRecord {
        career: Career::UxUiDesigner,
        salary: "$75,000-$125,000",
        growth: "13%",
        skills: &[
            "User Research",
            "Wireframing",
            "Prototyping",
            "Figma",
            "Adobe XD",
            "UI Design",
        ],
    },
    CareerRecord {
        career: Career::ProductManager,
        salary: "$100,000-$170,000",
        growth: "10%",
        skills: &[
            "Product Strategy",
            "User Stories",
            "Roadmapping",
            "Agile",
            "Market Research",
            "Analytics",
        ],
    },
    CareerRecord {
        career: Career::AiEngineer,
        salary: "$100,000-$180,000",
        growth: "40%",
        skills: &[
            "Python",
            "TensorFlow",
            "PyTorch",
            "Machine Learning",
            "Deep Learning",
            "NLP",
        ],
    },
    CareerRecord {
        career: Career::CybersecuritySpecialist,
        salary: "$90,000-$160,000",
        growth: "33%",
        skills: &[
            "Network Security",
            "Penetration Testing",
            "Security Auditing",
            "Incident Response",
            "Cryptography",
            "Risk Assessment",
        ],
    },
    CareerRecord {
        career: Career::BusinessAnalyst,
        salary: "$70,000-$125,000",
        growth: "14%",
        skills: &[
            "Requirements Gathering",
            "Process Modeling",
            "SQL",
            "Data Analysis",
            "Visualization",
            "Documentation",
        ],
    },
    CareerRecord {
        career: Career::FinancialAnalyst,
        salary: "$70,000-$130,000",
        growth: "9%",
        skills: &[
            "Financial Modeling",
            "Excel",
            "Data Analysis",
            "Accounting",
            "Forecasting",
            "Valuation",
        ],
    },
    CareerRecord {
        career: Career::MarketingSpecialist,
        salary: "$60,000-$120,000",
        growth: "10%",
        skills: &[
            "Digital Marketing",
            "SEO",
            "Social Media",
            "Content Strategy",
            "Analytics",
            "CRM",
        ],
    },
];

/// Looks up a career by display name. Classifier labels are free-form strings,
/// so unknown names are expected and yield placeholder metadata instead of an error.
pub fn lookup(name: &str) -> CareerMetadata {
    name.parse::<Career>()
        .map(|career| CareerMetadata::from(career.record()))
        .unwrap_or_else(|_| CareerMetadata::placeholder())
}

/// Required skills for a career name, empty for unknown careers.
pub fn required_skills(name: &str) -> &'static [&'static str] {
    name.parse::<Career>()
        .map(|career| career.record().skills)
        .unwrap_or(&[])
}
