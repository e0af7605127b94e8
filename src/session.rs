use crate::engine::Adjustment;
use crate::error::{Error, Result};
use crate::games::Question;
use crate::path::{CareerPath, PathSession};
use crate::trace::LevelPoint;
use chrono::{DateTime, Local};
use rand::{Rng, RngCore};
use serde::Serialize;
use tracing::info;

/// Decides which option a simulated child picks
pub trait Responder {
    /// Returns `None` when the responder has nothing more to say
    fn respond(&mut self, question: &Question, rng: &mut dyn RngCore) -> Option<usize>;
}

/// Turn an answer script like `"11010 0111"` into outcomes.
///
/// `1 y + c` mean correct, `0 n - x` mean incorrect. Whitespace and
/// commas are skipped.
pub fn parse_script(script: &str) -> Result<Vec<bool>> {
    let mut answers = Vec::new();
    for (position, token) in script.chars().enumerate() {
        match token.to_ascii_lowercase() {
            '1' | 'y' | '+' | 'c' => answers.push(true),
            '0' | 'n' | '-' | 'x' => answers.push(false),
            t if t.is_whitespace() || t == ',' => {}
            _ => return Err(Error::InvalidAnswerToken { token, position }),
        }
    }

    if answers.is_empty() {
        return Err(Error::EmptyScript);
    }
    Ok(answers)
}

/// Replays a fixed list of right/wrong answers
#[derive(Debug, Clone)]
pub struct ScriptedResponder {
    answers: std::vec::IntoIter<bool>,
}

impl ScriptedResponder {
    pub fn new(answers: Vec<bool>) -> Self {
        Self {
            answers: answers.into_iter(),
        }
    }

    pub fn from_script(script: &str) -> Result<Self> {
        parse_script(script).map(Self::new)
    }
}

impl Responder for ScriptedResponder {
    fn respond(&mut self, question: &Question, rng: &mut dyn RngCore) -> Option<usize> {
        let correct = self.answers.next()?;
        if correct {
            Some(question.answer)
        } else {
            question.wrong_choice(rng)
        }
    }
}

/// Answers correctly with a fixed probability
#[derive(Debug, Clone, Copy)]
pub struct RandomResponder {
    accuracy: f64,
}

impl RandomResponder {
    pub fn new(accuracy: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&accuracy) {
            return Err(Error::InvalidAccuracy(accuracy));
        }
        Ok(Self { accuracy })
    }
}

impl Responder for RandomResponder {
    fn respond(&mut self, question: &Question, rng: &mut dyn RngCore) -> Option<usize> {
        if rng.gen_bool(self.accuracy) {
            Some(question.answer)
        } else {
            question.wrong_choice(rng).or(Some(question.answer))
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundRecord {
    pub round: usize,
    pub game: &'static str,
    pub prompt: String,
    pub scene: Option<String>,
    pub chosen: String,
    pub correct: bool,
    pub message: String,
    pub adjustment: Adjustment,
    pub point: LevelPoint,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub path: CareerPath,
    pub started_at: DateTime<Local>,
    pub rounds: Vec<RoundRecord>,
    pub final_level: u32,
    pub peak_level: u32,
    pub correct: usize,
    pub incorrect: usize,
}

impl SessionReport {
    pub fn level_changes(&self) -> impl Iterator<Item = &RoundRecord> {
        self.rounds.iter().filter(|r| r.adjustment.changed_level())
    }
}

/// Play up to `rounds` questions, stopping early if the responder runs dry
pub fn run_session<R: Responder + ?Sized>(
    session: &mut PathSession,
    rounds: usize,
    responder: &mut R,
    rng: &mut dyn RngCore,
) -> SessionReport {
    let started_at = Local::now();
    let mut records = Vec::with_capacity(rounds);
    let mut peak_level = session.level();

    for round in 1..=rounds {
        let question = session.next_question(rng);
        let Some(choice) = responder.respond(&question, rng) else {
            break;
        };
        let outcome = session.answer(&question, choice);
        peak_level = peak_level.max(outcome.level);

        records.push(RoundRecord {
            round,
            game: question.game,
            chosen: question.options.get(choice).cloned().unwrap_or_default(),
            prompt: question.prompt,
            scene: question.scene,
            correct: outcome.feedback.correct,
            message: outcome.feedback.message,
            adjustment: outcome.adjustment,
            point: LevelPoint::new(round, outcome.level, session.engine().window().accuracy()),
        });
    }

    let correct = records.iter().filter(|r| r.correct).count();
    let report = SessionReport {
        path: session.path(),
        started_at,
        incorrect: records.len() - correct,
        correct,
        rounds: records,
        final_level: session.level(),
        peak_level,
    };
    info!(
        path = %report.path,
        rounds = report.rounds.len(),
        final_level = report.final_level,
        "session finished"
    );
    report
}
