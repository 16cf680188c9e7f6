use crate::random::RandomSource;

/// Replays a fixed list of unit draws, cycling when exhausted
pub(crate) struct ScriptedRandom {
    draws: Vec<f64>,
    next: usize,
}

impl ScriptedRandom {
    pub(crate) fn new(draws: &[f64]) -> Self {
        Self {
            draws: draws.to_vec(),
            next: 0,
        }
    }

    /// Number of draws consumed so far
    pub(crate) fn consumed(&self) -> usize {
        self.next
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        let draw = self.draws[self.next % self.draws.len()];
        self.next += 1;
        draw
    }
}
