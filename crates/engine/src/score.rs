use blockfit_core::ScoreSink;
use blockfit_types::Difficulty;

/// Best final scores, per tier and overall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HighScores {
    per_tier: [u32; 3],
    all_time: u32,
}

fn tier_index(difficulty: Difficulty) -> usize {
    match difficulty {
        Difficulty::Easy => 0,
        Difficulty::Medium => 1,
        Difficulty::Hard => 2,
    }
}

impl HighScores {
    pub fn new(per_tier: [u32; 3], all_time: u32) -> Self {
        Self { per_tier, all_time }
    }

    pub fn best(&self, difficulty: Difficulty) -> u32 {
        self.per_tier[tier_index(difficulty)]
    }

    pub fn all_time(&self) -> u32 {
        self.all_time
    }

    pub fn per_tier(&self) -> [u32; 3] {
        self.per_tier
    }

    /// Best of both tables, tier by tier
    pub fn merged(&self, other: &HighScores) -> HighScores {
        let mut per_tier = self.per_tier;
        for (mine, theirs) in per_tier.iter_mut().zip(other.per_tier) {
            *mine = (*mine).max(theirs);
        }
        HighScores {
            per_tier,
            all_time: self.all_time.max(other.all_time),
        }
    }

    /// Record a finished game. Returns true if it beat the tier's best.
    pub fn record(&mut self, difficulty: Difficulty, score: u32) -> bool {
        self.all_time = self.all_time.max(score);
        let best = &mut self.per_tier[tier_index(difficulty)];
        if score > *best {
            *best = score;
            return true;
        }
        false
    }
}

/// Owner of the running score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreKeeper {
    current: u32,
    high: HighScores,
}

impl ScoreKeeper {
    pub fn new(high: HighScores) -> Self {
        Self { current: 0, high }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high
    }

    pub fn add(&mut self, points: u32) {
        self.current = self.current.saturating_add(points);
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }

    pub(crate) fn set_high_scores(&mut self, high: HighScores) {
        self.high = high;
    }

    pub(crate) fn set(&mut self, score: u32) {
        self.current = score;
    }

    /// Record the current score as a finished game
    pub fn record_final(&mut self, difficulty: Difficulty) -> bool {
        self.high.record(difficulty, self.current)
    }
}

impl ScoreSink for ScoreKeeper {
    fn restore_score(&mut self, score: u32) {
        self.current = score;
    }
}
