use super::{counting_choices, scaled_count, shuffled_question, MiniGame, Question};
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::RngCore;

const MAX_FUEL_CELLS: u32 = 10;

const SPACE_SYMBOLS: [&str; 5] = ["rocket", "moon", "star", "planet", "comet"];

/// Longest repeating unit a pattern question uses
const MAX_PERIOD: usize = 4;

/// Fuel the rocket: count the cells in the tank
pub struct FuelCount;

impl FuelCount {
    pub fn target(level: u32) -> u32 {
        scaled_count(2, 2, level, MAX_FUEL_CELLS)
    }
}

impl MiniGame for FuelCount {
    fn name(&self) -> &'static str {
        "fuel-count"
    }

    fn generate(&self, level: u32, rng: &mut dyn RngCore) -> Question {
        let (target, others) = counting_choices(Self::target(level), MAX_FUEL_CELLS);

        shuffled_question(
            self.name(),
            "How many fuel cells are in the tank?".to_string(),
            target.to_string(),
            others.iter().map(u32::to_string).collect(),
            "Ready for launch!",
            format!("Count again, there are {} cells.", target),
            rng,
        )
        .with_scene("▮".repeat(target as usize))
    }
}

/// What comes next in a repeating pattern of space things?
/// Patterns get a longer repeating unit as the level rises.
pub struct PatternNext;

impl PatternNext {
    pub fn period(level: u32) -> usize {
        (level as usize).saturating_add(2).min(MAX_PERIOD)
    }
}

impl MiniGame for PatternNext {
    fn name(&self) -> &'static str {
        "pattern-next"
    }

    fn generate(&self, level: u32, rng: &mut dyn RngCore) -> Question {
        let period = Self::period(level);
        let mut symbols = SPACE_SYMBOLS.to_vec();
        symbols.shuffle(rng);
        let (unit, spare) = symbols.split_at(period);

        // two full repeats, then all but the last element of a third
        let shown = unit
            .iter()
            .cycle()
            .take(period * 3 - 1)
            .chain(std::iter::once(&"?"))
            .join(" ");
        let next = unit[period - 1];

        shuffled_question(
            self.name(),
            "What comes next?".to_string(),
            next.to_string(),
            unit[..period - 1]
                .iter()
                .chain(spare.first())
                .map(|s| s.to_string())
                .collect(),
            "Stellar!",
            format!("The pattern continues with {}.", next),
            rng,
        )
        .with_scene(shown)
    }
}
