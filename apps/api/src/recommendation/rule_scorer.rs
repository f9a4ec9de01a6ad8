//! Rule-based profile scorer. Used whenever no trained classifier is configured,
//! and as the fallback when one fails.
//!
//! Algorithm:
//! 1. Every catalog career starts at 0 points.
//! 2. Field of study awards a large block to one career cluster (first matching rule only).
//! 3. Each technical skill, interest, and personality trait awards small points for
//!    every keyword group it matches (lower-cased substring containment).
//! 4. Points are normalized into a probability distribution (uniform if all zero).
//! 5. Optional jitter perturbs each probability, clamps to [0,1], and re-sorts.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::profile::UserProfile;
use crate::recommendation::catalog::Career;
use crate::recommendation::distribution::ScoreDistribution;

// ────────────────────────────────────────────────────────────────────────────
// Award tables
// ────────────────────────────────────────────────────────────────────────────

/// Points awarded to a set of careers when any keyword occurs in the signal text.
struct Award {
    keywords: &'static [&'static str],
    points: &'static [(Career, f64)],
}

use Career::*;

const FIELD_AWARDS: &[Award] = &[
    Award {
        keywords: &["computer", "software", "information"],
        points: &[
            (SoftwareEngineer, 30.0),
            (WebDeveloper, 25.0),
            (DataScientist, 20.0),
            (AiEngineer, 20.0),
            (CybersecuritySpecialist, 15.0),
        ],
    },
    Award {
        keywords: &["business", "management", "finance"],
        points: &[
            (BusinessAnalyst, 30.0),
            (FinancialAnalyst, 30.0),
            (ProductManager, 25.0),
            (MarketingSpecialist, 20.0),
        ],
    },
    Award {
        keywords: &["design", "art"],
        points: &[(UxUiDesigner, 40.0), (WebDeveloper, 20.0), (ProductManager, 15.0)],
    },
    Award {
        keywords: &["data", "statistics", "math"],
        points: &[(DataScientist, 40.0), (AiEngineer, 25.0), (BusinessAnalyst, 20.0)],
    },
];

// "r" is kept as a bare keyword, so any skill containing the letter r scores for data roles.
const SKILL_AWARDS: &[Award] = &[
    Award {
        keywords: &["python", "r", "statistics", "machine learning", "data"],
        points: &[(DataScientist, 5.0), (AiEngineer, 3.0)],
    },
    Award {
        keywords: &["java", "c++", "c#", "algorithms"],
        points: &[(SoftwareEngineer, 5.0)],
    },
    Award {
        keywords: &["javascript", "html", "css", "web"],
        points: &[(WebDeveloper, 5.0), (UxUiDesigner, 2.0)],
    },
    Award {
        keywords: &["design", "ui", "ux", "figma", "adobe"],
        points: &[(UxUiDesigner, 5.0)],
    },
    Award {
        keywords: &["security", "network", "cyber"],
        points: &[(CybersecuritySpecialist, 5.0)],
    },
];

const INTEREST_AWARDS: &[Award] = &[
    Award {
        keywords: &["technology", "coding", "software"],
        points: &[(SoftwareEngineer, 3.0), (WebDeveloper, 3.0)],
    },
    Award {
        keywords: &["data", "analysis", "ai", "machine learning"],
        points: &[(DataScientist, 3.0), (AiEngineer, 3.0)],
    },
    Award {
        keywords: &["design", "art", "creative"],
        points: &[(UxUiDesigner, 3.0)],
    },
    Award {
        keywords: &["business", "finance", "management"],
        points: &[
            (BusinessAnalyst, 3.0),
            (FinancialAnalyst, 3.0),
            (ProductManager, 3.0),
        ],
    },
];

const TRAIT_AWARDS: &[Award] = &[
    Award {
        keywords: &["analytical", "logical", "detail"],
        points: &[
            (DataScientist, 2.0),
            (FinancialAnalyst, 2.0),
            (BusinessAnalyst, 2.0),
        ],
    },
    Award {
        keywords: &["creative", "innovative"],
        points: &[(UxUiDesigner, 2.0), (ProductManager, 2.0)],
    },
    Award {
        keywords: &["social", "outgoing", "extrovert"],
        points: &[(MarketingSpecialist, 2.0), (ProductManager, 2.0)],
    },
];

impl Award {
    fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|k| text.contains(k))
    }

    fn apply(&self, points: &mut [f64; Career::ALL.len()]) {
        for (career, value) in self.points {
            points[career.index()] += value;
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Jitter
// ────────────────────────────────────────────────────────────────────────────

/// Random perturbation applied after normalization. Off unless configured.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Jitter {
    #[default]
    Disabled,
    /// Uniform noise in `[-amplitude, amplitude]`. With a seed, every request
    /// draws from a fresh RNG seeded identically, so output is reproducible.
    Uniform { amplitude: f64, seed: Option<u64> },
}

impl Jitter {
    fn rng(seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    fn apply(self, distribution: ScoreDistribution) -> ScoreDistribution {
        let Jitter::Uniform { amplitude, seed } = self else {
            return distribution;
        };
        if amplitude <= 0.0 {
            return distribution;
        }

        let mut rng = Self::rng(seed);
        distribution
            .entries()
            .iter()
            .map(|entry| {
                let noise = rng.gen_range(-amplitude..=amplitude);
                (entry.career.clone(), (entry.score + noise).clamp(0.0, 1.0))
            })
            .collect::<ScoreDistribution>()
            .sorted_desc()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scorer
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct ProfileScorer {
    jitter: Jitter,
}

impl ProfileScorer {
    pub fn new(jitter: Jitter) -> Self {
        Self { jitter }
    }

    /// Scores every catalog career, sorted descending. Ties keep catalog order.
    pub fn score(&self, profile: &UserProfile) -> ScoreDistribution {
        self.jitter.apply(probabilities(profile).sorted_desc())
    }
}

/// Raw points per career, in catalog order.
pub fn accumulate_points(profile: &UserProfile) -> [f64; Career::ALL.len()] {
    let mut points = [0.0; Career::ALL.len()];

    let field = profile.field_of_study.to_lowercase();
    if let Some(award) = FIELD_AWARDS.iter().find(|a| a.matches(&field)) {
        award.apply(&mut points);
    }

    let groups: [(&[String], &[Award]); 3] = [
        (&profile.technical_skills, SKILL_AWARDS),
        (&profile.interests, INTEREST_AWARDS),
        (&profile.personality_traits, TRAIT_AWARDS),
    ];
    for (signals, awards) in groups {
        for signal in signals {
            let text = signal.to_lowercase();
            for award in awards.iter().filter(|a| a.matches(&text)) {
                award.apply(&mut points);
            }
        }
    }

    points
}

/// Normalized, pre-jitter distribution in catalog order.
pub fn probabilities(profile: &UserProfile) -> ScoreDistribution {
    Career::ALL
        .iter()
        .zip(accumulate_points(profile))
        .map(|(career, points)| (career.name().to_string(), points))
        .collect::<ScoreDistribution>()
        .normalized()
}
