use crate::engine::{AdaptiveEngine, Adjustment, DifficultyPolicy};
use crate::games::{
    BandAid, ColorMix, Feedback, FuelCount, GermCount, HabitatMatch, MiniGame, PatternNext,
    Question, ShapeSort, SizeCompare,
};
use clap::ValueEnum;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    Serialize,
    Deserialize,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum CareerPath {
    Doctor,
    Vet,
    Potions,
    Astronaut,
}

impl CareerPath {
    pub const ALL: [CareerPath; 4] = [
        CareerPath::Doctor,
        CareerPath::Vet,
        CareerPath::Potions,
        CareerPath::Astronaut,
    ];

    /// The games this path rotates through, in order
    pub fn games(&self) -> Vec<Box<dyn MiniGame>> {
        match self {
            CareerPath::Doctor => vec![Box::new(BandAid), Box::new(GermCount)],
            CareerPath::Vet => vec![Box::new(HabitatMatch), Box::new(SizeCompare)],
            CareerPath::Potions => vec![Box::new(ColorMix), Box::new(ShapeSort)],
            CareerPath::Astronaut => vec![Box::new(FuelCount), Box::new(PatternNext)],
        }
    }
}

/// Result of answering one question in a path session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundOutcome {
    pub feedback: Feedback,
    pub adjustment: Adjustment,
    pub level: u32,
}

/// One child playing one career path.
///
/// All games in the path share a single engine, so progress made in one
/// game carries into the next.
pub struct PathSession {
    path: CareerPath,
    engine: AdaptiveEngine,
    games: Vec<Box<dyn MiniGame>>,
    current: usize,
}

impl PathSession {
    pub fn new(path: CareerPath) -> Self {
        Self::with_engine(path, AdaptiveEngine::new())
    }

    pub fn with_policy(path: CareerPath, policy: DifficultyPolicy) -> Self {
        Self::with_engine(path, AdaptiveEngine::with_policy(policy))
    }

    pub fn with_engine(path: CareerPath, engine: AdaptiveEngine) -> Self {
        Self {
            path,
            engine,
            games: path.games(),
            current: 0,
        }
    }

    pub fn path(&self) -> CareerPath {
        self.path
    }

    pub fn engine(&self) -> &AdaptiveEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut AdaptiveEngine {
        &mut self.engine
    }

    pub fn level(&self) -> u32 {
        self.engine.level()
    }

    pub fn game_index(&self) -> usize {
        self.current
    }

    pub fn current_game(&self) -> &dyn MiniGame {
        self.games[self.current].as_ref()
    }

    pub fn next_question(&self, rng: &mut dyn RngCore) -> Question {
        self.current_game().generate(self.engine.level(), rng)
    }

    /// Score the child's choice, feed it to the engine and move on to the next game
    pub fn answer(&mut self, question: &Question, choice: usize) -> RoundOutcome {
        let feedback = question.check(choice);
        let adjustment = self.engine.record_answer(feedback.correct);
        self.advance();

        RoundOutcome {
            feedback,
            adjustment,
            level: self.engine.level(),
        }
    }

    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.games.len();
        debug!(path = %self.path, game = self.current_game().name(), "advanced to next game");
    }

    /// Throw away the accuracy window without touching the level
    pub fn reset_stats(&mut self) {
        self.engine.reset();
    }
}

impl std::fmt::Debug for PathSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathSession")
            .field("path", &self.path)
            .field("engine", &self.engine)
            .field("game", &self.current_game().name())
            .finish()
    }
}
