use super::{MiniGame, Question};
use rand::{Rng, RngCore};

const HABITATS: [&str; 3] = ["House", "Water", "Sky"];

const RESIDENTS: [(&str, &str); 3] = [("Cat", "House"), ("Fish", "Water"), ("Bird", "Sky")];

/// Larger number means larger animal
const ANIMAL_SIZES: [(&str, u32); 3] = [("Elephant", 3), ("Dog", 2), ("Mouse", 1)];

/// Match an animal to where it lives
pub struct HabitatMatch;

impl MiniGame for HabitatMatch {
    fn name(&self) -> &'static str {
        "habitat-match"
    }

    fn generate(&self, _level: u32, rng: &mut dyn RngCore) -> Question {
        let (animal, habitat) = RESIDENTS[rng.gen_range(0..RESIDENTS.len())];
        let answer = HABITATS.iter().position(|h| *h == habitat).unwrap_or(0);

        Question {
            game: self.name(),
            prompt: format!("Where does the {} live?", animal),
            scene: None,
            options: HABITATS.iter().map(|h| h.to_string()).collect(),
            answer,
            praise: "Yes!".to_string(),
            correction: format!("No, the {} lives in the {}.", animal, habitat.to_lowercase()),
        }
    }
}

/// Pick the bigger of two different animals
pub struct SizeCompare;

impl MiniGame for SizeCompare {
    fn name(&self) -> &'static str {
        "size-compare"
    }

    fn generate(&self, _level: u32, rng: &mut dyn RngCore) -> Question {
        let first = rng.gen_range(0..ANIMAL_SIZES.len());
        let mut second = rng.gen_range(0..ANIMAL_SIZES.len());
        while second == first {
            second = rng.gen_range(0..ANIMAL_SIZES.len());
        }

        let (first_name, first_size) = ANIMAL_SIZES[first];
        let (second_name, second_size) = ANIMAL_SIZES[second];
        let (answer, bigger) = if first_size >= second_size {
            (0, first_name)
        } else {
            (1, second_name)
        };

        Question {
            game: self.name(),
            prompt: "Which animal is bigger?".to_string(),
            scene: None,
            options: vec![first_name.to_string(), second_name.to_string()],
            answer,
            praise: "Correct!".to_string(),
            correction: format!("Not quite. {} is bigger.", bigger),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tests::{assert_well_formed, rng};

    #[test]
    fn habitat_answer_matches_animal() {
        let mut rng = rng();
        for _ in 0..20 {
            let q = HabitatMatch.generate(0, &mut rng);
            assert_well_formed(&q);
            let (animal, habitat) = RESIDENTS
                .iter()
                .find(|(a, _)| q.prompt.contains(a))
                .unwrap();
            assert_eq!(q.correct_label(), *habitat);
            let wrong = q.wrong_choice(&mut rng).unwrap();
            assert_eq!(
                q.check(wrong).message,
                format!("No, the {} lives in the {}.", animal, habitat.to_lowercase())
            );
        }
    }

    #[test]
    fn size_compare_picks_bigger_animal() {
        let size_of = |name: &str| {
            ANIMAL_SIZES
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, s)| *s)
                .unwrap()
        };
        let mut rng = rng();
        for _ in 0..30 {
            let q = SizeCompare.generate(0, &mut rng);
            assert_well_formed(&q);
            assert_eq!(q.options.len(), 2);
            let other = &q.options[1 - q.answer];
            assert!(size_of(q.correct_label()) > size_of(other));
            assert_eq!(
                q.check(1 - q.answer).message,
                format!("Not quite. {} is bigger.", q.correct_label())
            );
        }
    }
}
