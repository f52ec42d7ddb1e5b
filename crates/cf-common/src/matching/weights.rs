/// Default factor weights for the overall compatibility score.
///
/// Skills and values dominate: a co-founder pair lives or dies on what they
/// can build together and whether they want the same company. The remaining
/// logistics factors share the rest evenly.
pub const DEFAULT_WEIGHTS: Weights = Weights {
    skills_complement: 0.25,
    values_alignment: 0.20,
    experience: 0.15,
    location: 0.10,
    availability: 0.10,
    commitment: 0.10,
    industry: 0.10,
};

#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub skills_complement: f64,
    pub values_alignment: f64,
    pub experience: f64,
    pub location: f64,
    pub availability: f64,
    pub commitment: f64,
    pub industry: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.skills_complement
            + self.values_alignment
            + self.experience
            + self.location
            + self.availability
            + self.commitment
            + self.industry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        assert!((DEFAULT_WEIGHTS.sum() - 1.0).abs() < 1e-9);
    }
}
