use super::{shuffled_question, MiniGame, Question};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

struct Mix {
    first: &'static str,
    second: &'static str,
    result: &'static str,
    distractors: [&'static str; 2],
}

static MIXES: [Mix; 3] = [
    Mix {
        first: "Red",
        second: "Blue",
        result: "Purple",
        distractors: ["Green", "Orange"],
    },
    Mix {
        first: "Red",
        second: "Yellow",
        result: "Orange",
        distractors: ["Purple", "Green"],
    },
    Mix {
        first: "Blue",
        second: "Yellow",
        result: "Green",
        distractors: ["Purple", "Orange"],
    },
];

/// (shape, number of sides)
const BOTTLES: [(&str, u32); 4] = [
    ("circle", 0),
    ("triangle", 3),
    ("square", 4),
    ("pentagon", 5),
];

/// Two primary colours in, which secondary colour comes out?
pub struct ColorMix;

impl MiniGame for ColorMix {
    fn name(&self) -> &'static str {
        "color-mix"
    }

    fn generate(&self, _level: u32, rng: &mut dyn RngCore) -> Question {
        let mix = &MIXES[rng.gen_range(0..MIXES.len())];

        shuffled_question(
            self.name(),
            format!("Mix {} and {}. What color do you get?", mix.first, mix.second),
            mix.result.to_string(),
            mix.distractors.iter().map(|d| d.to_string()).collect(),
            "Nice work!",
            format!("The correct color is {}.", mix.result),
            rng,
        )
        .with_scene(format!("{} + {}", mix.first, mix.second))
    }
}

/// Find the potion bottle with the asked-for number of sides.
/// The shelf gets one bottle wider per level, up to every shape.
pub struct ShapeSort;

impl ShapeSort {
    pub fn bottles_on_shelf(level: u32) -> usize {
        (level as usize).saturating_add(2).min(BOTTLES.len())
    }
}

impl MiniGame for ShapeSort {
    fn name(&self) -> &'static str {
        "shape-sort"
    }

    fn generate(&self, level: u32, rng: &mut dyn RngCore) -> Question {
        let shelf: Vec<(&str, u32)> = BOTTLES
            .choose_multiple(rng, Self::bottles_on_shelf(level))
            .copied()
            .collect();
        let answer = rng.gen_range(0..shelf.len());
        let (shape, sides) = shelf[answer];

        let prompt = match sides {
            0 => "Which potion bottle is round?".to_string(),
            n => format!("Which potion bottle has {} sides?", n),
        };

        Question {
            game: self.name(),
            prompt,
            scene: None,
            options: shelf.iter().map(|(s, _)| s.to_string()).collect(),
            answer,
            praise: "Sorted!".to_string(),
            correction: format!("That goes on another shelf. It was the {}.", shape),
        }
    }
}
