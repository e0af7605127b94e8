pub mod astronaut;
pub mod doctor;
pub mod potions;
pub mod vet;

pub use astronaut::{FuelCount, PatternNext};
pub use doctor::{BandAid, GermCount};
pub use potions::{ColorMix, ShapeSort};
pub use vet::{HabitatMatch, SizeCompare};

use rand::seq::SliceRandom;
use rand::RngCore;
use serde::Serialize;

/// Produces questions for one mini-game, scaled by the current difficulty level
pub trait MiniGame: Send + Sync {
    fn name(&self) -> &'static str;

    fn generate(&self, level: u32, rng: &mut dyn RngCore) -> Question;
}

/// A single multiple-choice question
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    pub game: &'static str,
    pub prompt: String,
    /// Textual picture of what the child is looking at, if the game has one
    pub scene: Option<String>,
    pub options: Vec<String>,
    /// Index into `options`
    pub answer: usize,
    pub praise: String,
    pub correction: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub correct: bool,
    pub message: String,
}

impl Question {
    pub fn correct_label(&self) -> &str {
        &self.options[self.answer]
    }

    /// Choices outside the option list count as wrong
    pub fn check(&self, choice: usize) -> Feedback {
        let correct = choice == self.answer;
        Feedback {
            correct,
            message: if correct {
                self.praise.clone()
            } else {
                self.correction.clone()
            },
        }
    }

    pub fn check_label(&self, label: &str) -> Feedback {
        let choice = self
            .options
            .iter()
            .position(|o| o.eq_ignore_ascii_case(label.trim()))
            .unwrap_or(usize::MAX);
        self.check(choice)
    }

    pub(crate) fn with_scene(mut self, scene: String) -> Self {
        self.scene = Some(scene);
        self
    }

    /// Any option other than the answer, if there is one
    pub fn wrong_choice(&self, rng: &mut dyn RngCore) -> Option<usize> {
        let wrong: Vec<usize> = (0..self.options.len())
            .filter(|&i| i != self.answer)
            .collect();
        wrong.choose(rng).copied()
    }
}

/// Builds a question whose options are shuffled around the correct one
pub(crate) fn shuffled_question(
    game: &'static str,
    prompt: String,
    correct: String,
    distractors: Vec<String>,
    praise: &str,
    correction: String,
    rng: &mut dyn RngCore,
) -> Question {
    let mut options = Vec::with_capacity(distractors.len() + 1);
    options.push(correct.clone());
    options.extend(distractors);
    options.shuffle(rng);
    let answer = options.iter().position(|o| *o == correct).unwrap_or(0);

    Question {
        game,
        prompt,
        scene: None,
        options,
        answer,
        praise: praise.to_string(),
        correction,
    }
}

/// Target and its two neighbours, kept inside `1..=max` and distinct
pub(crate) fn counting_choices(target: u32, max: u32) -> (u32, [u32; 2]) {
    let lower = if target > 1 { target - 1 } else { target + 2 };
    let upper = if target < max { target + 1 } else { target - 2 };
    (target, [lower, upper])
}

/// `min(base + level * step, cap)` without overflowing on absurd levels
pub(crate) fn scaled_count(base: u32, step: u32, level: u32, cap: u32) -> u32 {
    base.saturating_add(level.saturating_mul(step)).min(cap)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    pub fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    /// Checks the invariants every generated question must hold
    pub fn assert_well_formed(q: &Question) {
        assert!(!q.prompt.is_empty());
        assert!(q.options.len() >= 2, "{:?}", q);
        assert!(q.answer < q.options.len(), "{:?}", q);
        let distinct: HashSet<&String> = q.options.iter().collect();
        assert_eq!(distinct.len(), q.options.len(), "duplicate options in {:?}", q);
        assert!(q.check(q.answer).correct);
    }

    fn sample() -> Question {
        Question {
            game: "sample",
            prompt: "Pick b".to_string(),
            scene: None,
            options: vec!["a".into(), "B".into(), "c".into()],
            answer: 1,
            praise: "yay".into(),
            correction: "nope".into(),
        }
    }

    #[test]
    fn check_reports_praise_or_correction() {
        let q = sample();
        assert_eq!(
            q.check(1),
            Feedback {
                correct: true,
                message: "yay".into()
            }
        );
        assert_eq!(
            q.check(0),
            Feedback {
                correct: false,
                message: "nope".into()
            }
        );
    }

    #[test]
    fn out_of_range_choice_is_wrong() {
        assert!(!sample().check(17).correct);
    }

    #[test]
    fn check_label_ignores_case_and_whitespace() {
        let q = sample();
        assert!(q.check_label(" b ").correct);
        assert!(!q.check_label("a").correct);
        assert!(!q.check_label("zebra").correct);
        assert_eq!(q.correct_label(), "B");
    }

    #[test]
    fn wrong_choice_never_picks_answer() {
        let q = sample();
        let mut rng = rng();
        for _ in 0..20 {
            let choice = q.wrong_choice(&mut rng).unwrap();
            assert_ne!(choice, q.answer);
        }
    }

    #[test]
    fn counting_choices_stay_distinct_at_edges() {
        assert_eq!(counting_choices(5, 9), (5, [4, 6]));
        assert_eq!(counting_choices(9, 9), (9, [8, 7]));
        assert_eq!(counting_choices(1, 9), (1, [3, 2]));
    }

    #[test]
    fn scaled_count_caps() {
        assert_eq!(scaled_count(3, 2, 0, 9), 3);
        assert_eq!(scaled_count(3, 2, 2, 9), 7);
        assert_eq!(scaled_count(3, 2, 3, 9), 9);
        assert_eq!(scaled_count(3, 2, u32::MAX, 9), 9);
    }

    #[test]
    fn shuffled_question_tracks_answer() {
        let mut rng = rng();
        for _ in 0..10 {
            let q = shuffled_question(
                "t",
                "p".into(),
                "right".into(),
                vec!["w1".into(), "w2".into()],
                "ok",
                "no".into(),
                &mut rng,
            );
            assert_eq!(q.correct_label(), "right");
            assert_well_formed(&q);
        }
    }
}
