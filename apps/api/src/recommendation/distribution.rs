use serde::Serialize;

/// A scored career candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerScore {
    pub career: String,
    pub score: f64,
}

/// Ordered mapping from career name to probability.
///
/// Kept as a vector rather than a map so that ordering (and with it the
/// tie-break between equal scores) stays explicit.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreDistribution {
    entries: Vec<CareerScore>,
}

impl ScoreDistribution {
    pub fn new(entries: Vec<CareerScore>) -> Self {
        Self { entries }
    }

    /// Divides every score by the total. A zero total yields a uniform distribution.
    pub fn normalized(mut self) -> Self {
        let total: f64 = self.entries.iter().map(|e| e.score).sum();
        let uniform = 1.0 / self.entries.len().max(1) as f64;
        for entry in &mut self.entries {
            entry.score = if total > 0.0 {
                entry.score / total
            } else {
                uniform
            };
        }
        self
    }

    /// Sorts descending by score. The sort is stable: equal scores keep their
    /// current relative order.
    pub fn sorted_desc(mut self) -> Self {
        self.entries.sort_by(|a, b| b.score.total_cmp(&a.score));
        self
    }

    pub fn entries(&self) -> &[CareerScore] {
        &self.entries
    }

    pub fn top(&self, n: usize) -> &[CareerScore] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn best(&self) -> Option<&CareerScore> {
        self.entries.first()
    }

}

#[cfg(test)]
impl ScoreDistribution {
    pub fn get(&self, career: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.career == career)
            .map(|e| e.score)
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.score).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl FromIterator<(String, f64)> for ScoreDistribution {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(career, score)| CareerScore { career, score })
                .collect(),
        )
    }
}
