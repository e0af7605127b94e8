use super::{counting_choices, scaled_count, shuffled_question, MiniGame, Question};
use rand::{Rng, RngCore};

const MAX_GERMS: u32 = 9;

/// Preposition game: are the band-aids above or below the cabinet?
pub struct BandAid;

impl MiniGame for BandAid {
    fn name(&self) -> &'static str {
        "band-aid"
    }

    fn generate(&self, _level: u32, rng: &mut dyn RngCore) -> Question {
        let above = rng.gen_bool(0.5);
        let position = if above { "above" } else { "below" };

        Question {
            game: self.name(),
            prompt: "Where are the band-aids?".to_string(),
            scene: Some(format!("three band-aids {} the cabinet", position)),
            options: vec!["Above".to_string(), "Below".to_string()],
            answer: if above { 0 } else { 1 },
            praise: "Great job!".to_string(),
            correction: "Oops, try again!".to_string(),
        }
    }
}

/// Count the germs on a bandage. More germs at higher levels.
pub struct GermCount;

impl GermCount {
    pub fn target(level: u32) -> u32 {
        scaled_count(3, 2, level, MAX_GERMS)
    }
}

impl MiniGame for GermCount {
    fn name(&self) -> &'static str {
        "germ-count"
    }

    fn generate(&self, level: u32, rng: &mut dyn RngCore) -> Question {
        let (target, others) = counting_choices(Self::target(level), MAX_GERMS);

        shuffled_question(
            self.name(),
            "How many germs do you see?".to_string(),
            target.to_string(),
            others.iter().map(u32::to_string).collect(),
            "Well done!",
            "Try again!".to_string(),
            rng,
        )
        .with_scene("●".repeat(target as usize))
    }
}
