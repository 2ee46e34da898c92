use blockfit_types::{Difficulty, DEFAULT_MAX_UNDOS, GRID_HEIGHT, GRID_WIDTH};

/// Session tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub width: u8,
    pub height: u8,
    /// Undo budget granted at every game start
    pub max_undos: u32,
    /// Dealing seed; the same seed deals the same pieces
    pub seed: u32,
    pub difficulty: Difficulty,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            max_undos: DEFAULT_MAX_UNDOS,
            seed: 1,
            difficulty: Difficulty::Easy,
        }
    }
}

fn parse_dim(value: Option<String>, default: u8) -> u8 {
    value
        .and_then(|s| s.trim().parse::<u8>().ok())
        .filter(|&d| d > 0)
        .unwrap_or(default)
}

impl SessionConfig {
    /// Create from environment variables
    ///
    /// Reads `BLOCKFIT_WIDTH`, `BLOCKFIT_HEIGHT`, `BLOCKFIT_MAX_UNDOS`, `BLOCKFIT_SEED`
    /// and `BLOCKFIT_DIFFICULTY`. Missing or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SessionConfig::from_env`] with an injectable variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let width = parse_dim(lookup("BLOCKFIT_WIDTH"), defaults.width);
        let height = parse_dim(lookup("BLOCKFIT_HEIGHT"), defaults.height);

        let max_undos = lookup("BLOCKFIT_MAX_UNDOS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.max_undos);

        let seed = lookup("BLOCKFIT_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);

        let difficulty = lookup("BLOCKFIT_DIFFICULTY")
            .and_then(|s| Difficulty::from_str(&s))
            .unwrap_or(defaults.difficulty);

        Self {
            width,
            height,
            max_undos,
            seed,
            difficulty,
        }
    }
}
