use std::fmt;

/// Why a placement request was refused. The grid is never touched when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    NotPlayable,
    InvalidSlot,
    EmptySlot,
    Blocked,
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::NotPlayable => "not_playable",
            PlaceError::InvalidSlot | PlaceError::EmptySlot => "invalid_slot",
            PlaceError::Blocked => "invalid_place",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PlaceError::NotPlayable => "game is not playable",
            PlaceError::InvalidSlot => "slot index is outside the slate",
            PlaceError::EmptySlot => "slot has already been used",
            PlaceError::Blocked => "piece does not fit at the target cell",
        }
    }
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for PlaceError {}

/// Failure to decode or rebuild a saved session
#[derive(Debug)]
pub enum SaveError {
    Json(serde_json::Error),
    UnsupportedVersion(u32),
    UnknownDifficulty(String),
    UnknownShape(String),
    BadDimensions { width: u8, height: u8 },
    CellCount { expected: usize, found: usize },
    SlateSize { expected: usize, found: usize },
}

impl SaveError {
    pub fn code(&self) -> &'static str {
        match self {
            SaveError::Json(_) => "malformed_json",
            SaveError::UnsupportedVersion(_) => "unsupported_version",
            SaveError::UnknownDifficulty(_) | SaveError::UnknownShape(_) => "unknown_value",
            SaveError::BadDimensions { .. }
            | SaveError::CellCount { .. }
            | SaveError::SlateSize { .. } => "inconsistent_save",
        }
    }
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Json(e) => write!(f, "save is not valid JSON: {}", e),
            SaveError::UnsupportedVersion(v) => write!(f, "unsupported save version {}", v),
            SaveError::UnknownDifficulty(d) => write!(f, "unknown difficulty {:?}", d),
            SaveError::UnknownShape(name) => write!(f, "unknown shape {:?}", name),
            SaveError::BadDimensions { width, height } => {
                write!(f, "grid dimensions {}x{} out of range", width, height)
            }
            SaveError::CellCount { expected, found } => {
                write!(f, "expected {} cells, found {}", expected, found)
            }
            SaveError::SlateSize { expected, found } => {
                write!(f, "expected {} slate slots, found {}", expected, found)
            }
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SaveError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SaveError {
    fn from(e: serde_json::Error) -> Self {
        SaveError::Json(e)
    }
}
