//! Session engine - everything around the core that a frontend needs
//!
//! - [`session`]: the orchestrator that owns one grid, slate, undo manager and score keeper
//! - [`slate`]: the three pieces on offer and how they are dealt
//! - [`score`]: running score and high scores
//! - [`gesture`]: drag begin/update/end messages mapped onto session calls
//! - [`save`]: JSON save format
//! - [`config`]: session tuning, optionally from environment variables
//!
//! # Example
//!
//! ```
//! use blockfit_engine::{GameSession, SessionConfig, SessionState};
//! use blockfit_types::{Anchor, Difficulty};
//!
//! let mut session = GameSession::new(SessionConfig::default());
//! session.start(Difficulty::Easy);
//!
//! let outcome = session.place(0, Anchor::new(0, 0)).unwrap();
//! assert!(outcome.result.success);
//! assert!(session.score() > 0);
//!
//! assert!(session.undo());
//! assert_eq!(session.score(), 0);
//! assert_eq!(session.state(), SessionState::Playing);
//! ```

pub mod config;
pub mod error;
pub mod gesture;
pub mod save;
pub mod score;
pub mod session;
pub mod slate;

pub use config::SessionConfig;
pub use error::{PlaceError, SaveError};
pub use gesture::{DragEvent, GestureHandler, GestureOutcome};
pub use save::{SessionSave, SAVE_VERSION};
pub use score::{HighScores, ScoreKeeper};
pub use session::{GameSession, PlacementOutcome, Preview, SessionState};
pub use slate::{Slate, SlatePiece};
