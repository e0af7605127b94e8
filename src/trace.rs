use serde::Serialize;

/// Level and window accuracy right after a round was scored
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelPoint {
    pub round: usize,
    pub level: u32,
    pub accuracy: f64,
}

impl LevelPoint {
    pub fn new(round: usize, level: u32, accuracy: f64) -> Self {
        Self {
            round,
            level,
            accuracy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_named_fields() {
        let point = LevelPoint::new(7, 2, 0.75);
        let json = serde_json::to_value(point).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "round": 7, "level": 2, "accuracy": 0.75 })
        );
    }
}
