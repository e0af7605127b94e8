use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Correct/incorrect tally since the last reset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceWindow {
    pub correct: u64,
    pub incorrect: u64,
}

impl PerformanceWindow {
    pub fn total(&self) -> u64 {
        self.correct.saturating_add(self.incorrect)
    }

    /// Fraction of correct answers, 0.0 for an empty window
    pub fn accuracy(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.correct as f64 / total as f64,
        }
    }

    fn record(&mut self, correct: bool) {
        if correct {
            self.correct = self.correct.saturating_add(1);
        } else {
            self.incorrect = self.incorrect.saturating_add(1);
        }
    }
}

/// Thresholds the engine promotes and demotes on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyPolicy {
    /// Accuracy strictly above this promotes
    pub promote_above: f64,
    /// Accuracy strictly below this demotes (only while level > 0)
    pub demote_below: f64,
    /// Answers required since the last reset before any evaluation
    pub min_sample: u64,
}

impl Default for DifficultyPolicy {
    fn default() -> Self {
        Self {
            promote_above: 0.8,
            demote_below: 0.5,
            min_sample: 5,
        }
    }
}

/// What a single recorded answer did to the level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Adjustment {
    Promoted { from: u32, to: u32 },
    Demoted { from: u32, to: u32 },
    Unchanged,
}

impl Adjustment {
    pub fn changed_level(&self) -> bool {
        !matches!(self, Adjustment::Unchanged)
    }
}

impl fmt::Display for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Adjustment::Promoted { from, to } => write!(f, "level up {} -> {}", from, to),
            Adjustment::Demoted { from, to } => write!(f, "level down {} -> {}", from, to),
            Adjustment::Unchanged => write!(f, "unchanged"),
        }
    }
}

/// Passed to observers after a promotion or demotion has been applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelChange {
    pub previous: u32,
    pub current: u32,
}

pub type LevelObserver = Box<dyn FnMut(LevelChange) + Send>;

/// Tracks answer accuracy and raises or lowers the difficulty level.
///
/// Once at least `min_sample` answers have been recorded since the last
/// reset, every new answer re-evaluates the whole window. A level change
/// empties the window so each level is measured on its own. When accuracy
/// sits between the thresholds (or demotion is blocked at level 0) the
/// window is kept and keeps growing.
pub struct AdaptiveEngine {
    level: u32,
    window: PerformanceWindow,
    policy: DifficultyPolicy,
    observers: Vec<LevelObserver>,
}

impl AdaptiveEngine {
    pub fn new() -> Self {
        Self::with_policy(DifficultyPolicy::default())
    }

    pub fn with_policy(policy: DifficultyPolicy) -> Self {
        Self {
            level: 0,
            window: PerformanceWindow::default(),
            policy,
            observers: Vec::new(),
        }
    }

    /// Start from an arbitrary level with an empty window
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn window(&self) -> PerformanceWindow {
        self.window
    }

    pub fn policy(&self) -> &DifficultyPolicy {
        &self.policy
    }

    /// Register a callback run after every promotion or demotion
    pub fn on_level_change<F>(&mut self, observer: F)
    where
        F: FnMut(LevelChange) + Send + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Record one answer and apply the promotion/demotion policy
    pub fn record_answer(&mut self, correct: bool) -> Adjustment {
        self.window.record(correct);
        debug!(
            correct,
            window_correct = self.window.correct,
            window_incorrect = self.window.incorrect,
            level = self.level,
            "recorded answer"
        );

        let adjustment = self.adjust_level_if_needed();
        match adjustment {
            Adjustment::Promoted { from, to } | Adjustment::Demoted { from, to } => {
                info!(from, to, "difficulty level changed");
                let change = LevelChange {
                    previous: from,
                    current: to,
                };
                for observer in self.observers.iter_mut() {
                    observer(change);
                }
            }
            Adjustment::Unchanged => {}
        }
        adjustment
    }

    /// Clear the window. The level is left alone.
    pub fn reset(&mut self) {
        self.window = PerformanceWindow::default();
    }

    fn adjust_level_if_needed(&mut self) -> Adjustment {
        if self.window.total() < self.policy.min_sample {
            return Adjustment::Unchanged;
        }

        let accuracy = self.window.accuracy();
        let from = self.level;
        if accuracy > self.policy.promote_above {
            self.level = self.level.saturating_add(1);
            self.reset();
            if self.level == from {
                return Adjustment::Unchanged;
            }
            Adjustment::Promoted {
                from,
                to: self.level,
            }
        } else if accuracy < self.policy.demote_below && self.level > 0 {
            self.level -= 1;
            self.reset();
            Adjustment::Demoted {
                from,
                to: self.level,
            }
        } else {
            Adjustment::Unchanged
        }
    }
}

impl Default for AdaptiveEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AdaptiveEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdaptiveEngine")
            .field("level", &self.level)
            .field("window", &self.window)
            .field("policy", &self.policy)
            .field("observers", &self.observers.len())
            .finish()
    }
}
