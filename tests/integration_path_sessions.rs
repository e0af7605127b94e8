use careerpaths::{
    games::MiniGame,
    session::{run_session, RandomResponder, ScriptedResponder},
    CareerPath, DifficultyPolicy, PathSession,
};
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn each_path_plays_a_full_session() {
    for path in CareerPath::ALL {
        let mut rng = StdRng::seed_from_u64(21);
        let mut session = PathSession::new(path);
        let mut responder = RandomResponder::new(0.7).unwrap();
        let report = run_session(&mut session, 30, &mut responder, &mut rng);

        assert_eq!(report.path, path);
        assert_eq!(report.rounds.len(), 30);
        assert_eq!(report.correct + report.incorrect, 30);
        assert!(report.peak_level >= report.final_level);

        let names: Vec<&str> = path.games().iter().map(|g| g.name()).collect();
        for record in &report.rounds {
            // games alternate, starting with the first
            assert_eq!(record.game, names[(record.round - 1) % names.len()]);
        }
    }
}

#[test]
fn sessions_on_different_paths_are_independent() {
    let mut rng = StdRng::seed_from_u64(22);
    let mut doctor = PathSession::new(CareerPath::Doctor);
    let mut vet = PathSession::new(CareerPath::Vet);

    let mut all_right = ScriptedResponder::from_script("11111 11111").unwrap();
    run_session(&mut doctor, 10, &mut all_right, &mut rng);

    let mut all_wrong = ScriptedResponder::from_script("00000").unwrap();
    run_session(&mut vet, 5, &mut all_wrong, &mut rng);

    assert_eq!(doctor.level(), 2);
    assert_eq!(vet.level(), 0);
    assert_eq!(vet.engine().window().incorrect, 5);
}

#[test]
fn harder_counting_after_promotion() {
    let mut rng = StdRng::seed_from_u64(23);
    let mut session = PathSession::new(CareerPath::Doctor);
    let mut responder = ScriptedResponder::from_script("11111").unwrap();
    run_session(&mut session, 5, &mut responder, &mut rng);
    assert_eq!(session.level(), 1);

    // after five rounds the rotation sits on the counting game
    assert_eq!(session.current_game().name(), "germ-count");
    let q = session.next_question(&mut rng);
    assert_eq!(q.correct_label(), "5");
}

#[test]
fn policy_is_configurable_per_session() {
    let policy = DifficultyPolicy {
        promote_above: 0.6,
        demote_below: 0.4,
        min_sample: 3,
    };
    let mut rng = StdRng::seed_from_u64(24);
    let mut session = PathSession::with_policy(CareerPath::Potions, policy);
    let mut responder = ScriptedResponder::from_script("111").unwrap();
    let report = run_session(&mut session, 3, &mut responder, &mut rng);
    assert_eq!(report.final_level, 1);
}
