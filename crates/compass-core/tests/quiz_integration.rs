//! Integration tests for quiz traversal.
//!
//! These tests drive sessions through both the built-in questionnaire and
//! hand-built trees of varying depth.

use compass_core::{
    builtin_tree, Catalog, CatalogMatcher, QuestionNode, QuestionTree, QuizEngine, QuizError,
    QuizSession, QuizState, Turn,
};
use proptest::prelude::*;
use std::sync::Arc;

fn scenario_a_engine() -> QuizEngine {
    let tree = QuestionTree::new(
        "root",
        vec![
            QuestionNode::new("root", "What are your main interests?", ["Engineering", "Medical"])
                .with_child("Engineering", "engineering"),
            QuestionNode::new("engineering", "Which branch?", ["CSE", "ECE"]),
        ],
    )
    .unwrap();
    QuizEngine::new(tree)
}

/// A straight chain of `depth` questions; every question offers "next" and "stop".
fn chain_engine(depth: usize) -> QuizEngine {
    let nodes = (0..depth)
        .map(|i| {
            let node = QuestionNode::new(format!("q{i}"), format!("Question {i}"), ["next", "stop"]);
            if i + 1 < depth {
                node.with_child("next", format!("q{}", i + 1))
            } else {
                node
            }
        })
        .collect();
    QuizEngine::new(QuestionTree::new("q0", nodes).unwrap())
}

#[test]
fn scenario_a_engineering_cse_with_generic_roadmap() {
    let engine = scenario_a_engine();
    let mut session = engine.new_session();
    engine.start(&mut session);

    engine.submit_answer(&mut session, "Engineering").unwrap();
    engine.submit_answer(&mut session, "CSE").unwrap();
    let label = engine.result(&session).unwrap();
    assert_eq!(label, "CSE");

    let matcher = CatalogMatcher::new(Arc::new(Catalog::default()));
    let roadmap = matcher.roadmap_for(label);
    assert!(roadmap.is_generic());
    assert_eq!(roadmap.steps.len(), 5);
    for index in [0, 1, 4] {
        assert!(roadmap.steps[index].contains("CSE"), "step {} lacks label", index + 1);
    }
}

#[test]
fn scenario_c_invalid_option_keeps_question() {
    let engine = scenario_a_engine();
    let mut session = engine.new_session();
    engine.start(&mut session);

    let before = engine.current_question(&session).unwrap();
    let err = engine.submit_answer(&mut session, "Law").unwrap_err();
    assert!(matches!(err, QuizError::InvalidOption { .. }));

    let after = engine.current_question(&session).unwrap();
    assert_eq!(before, after);
    assert!(session.answers().is_empty());

    // Retrying with a valid option works normally.
    engine.submit_answer(&mut session, "Medical").unwrap();
    assert_eq!(engine.result(&session).unwrap(), "Medical");
}

#[test]
fn scenario_e_result_before_terminal_is_not_ready() {
    let engine = scenario_a_engine();
    let mut session = engine.new_session();
    engine.start(&mut session);

    assert!(matches!(engine.result(&session), Err(QuizError::NotReady { .. })));
    engine.submit_answer(&mut session, "Engineering").unwrap();
    assert!(matches!(engine.result(&session), Err(QuizError::NotReady { .. })));
}

#[test]
fn current_question_before_start_is_invalid_state() {
    let engine = scenario_a_engine();
    let session = QuizSession::new();
    assert!(matches!(
        engine.current_question(&session),
        Err(QuizError::InvalidState(_))
    ));
}

#[test]
fn builtin_every_option_either_advances_or_resolves() {
    let tree = builtin_tree().unwrap();
    let engine = QuizEngine::new(tree.clone());

    for node in tree.nodes() {
        for option in &node.options {
            let mut session = engine.new_session();
            engine.start(&mut session);

            // Walk to `node` using the first path that reaches it.
            let path = path_to(&tree, tree.root_id(), &node.id).expect("node is reachable");
            for step in &path {
                engine.submit_answer(&mut session, step).unwrap();
            }

            let turn = engine.submit_answer(&mut session, option).unwrap();
            match (node.child_for(option), turn) {
                (Some(child), Turn::Question(next)) => {
                    assert_eq!(next.id, child);
                    assert!(!session.is_complete());
                }
                (None, Turn::Complete(label)) => {
                    assert_eq!(&label, option);
                    assert_eq!(session.resolved_label(), Some(option.as_str()));
                }
                (child, turn) => panic!("{}/{option}: child {child:?} but turn {turn:?}", node.id),
            }
        }
    }
}

fn path_to(tree: &QuestionTree, from: &str, target: &str) -> Option<Vec<String>> {
    if from == target {
        return Some(Vec::new());
    }
    let node = tree.node(from)?;
    for (option, child) in &node.children {
        if let Some(mut rest) = path_to(tree, child, target) {
            rest.insert(0, option.clone());
            return Some(rest);
        }
    }
    None
}

#[test]
fn builtin_quiz_resolves_after_two_answers() {
    let engine = QuizEngine::builtin().unwrap();
    let mut session = engine.new_session();
    engine.start(&mut session);

    assert_eq!(engine.state(&session).unwrap(), QuizState::AtRoot);
    engine.submit_answer(&mut session, "Medical").unwrap();
    assert_eq!(
        engine.state(&session).unwrap(),
        QuizState::AtIntermediate("medical".to_string())
    );
    engine.submit_answer(&mut session, "B.Sc. Nursing").unwrap();
    assert_eq!(
        engine.state(&session).unwrap(),
        QuizState::Terminal("B.Sc. Nursing".to_string())
    );
}

#[test]
fn trees_of_different_depths_resolve_after_matching_answer_counts() {
    for depth in [1, 3, 7] {
        let engine = chain_engine(depth);
        assert_eq!(engine.tree().depth(), depth);

        let mut session = engine.new_session();
        engine.start(&mut session);
        for _ in 0..depth - 1 {
            let turn = engine.submit_answer(&mut session, "next").unwrap();
            assert!(!turn.is_complete());
        }
        // "next" on the last question has no follow-up, so it is the label.
        let turn = engine.submit_answer(&mut session, "next").unwrap();
        assert_eq!(turn.label(), Some("next"));
        assert_eq!(session.answers().len(), depth);
    }
}

#[test]
fn sessions_are_independent() {
    let engine = QuizEngine::builtin().unwrap();
    let mut first = engine.new_session();
    let mut second = engine.new_session();
    engine.start(&mut first);
    engine.start(&mut second);

    engine.submit_answer(&mut first, "Commerce").unwrap();
    engine.submit_answer(&mut second, "Arts").unwrap();
    engine.submit_answer(&mut first, "BBA").unwrap();

    assert_eq!(engine.result(&first).unwrap(), "BBA");
    assert_eq!(
        engine.state(&second).unwrap(),
        QuizState::AtIntermediate("arts".to_string())
    );
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = Arc::new(QuizEngine::builtin().unwrap());
    let handles: Vec<_> = [("Engineering", "B.Tech"), ("Architecture", "B.Arch.")]
        .into_iter()
        .map(|(interest, course)| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || {
                let mut session = engine.new_session();
                engine.start(&mut session);
                engine.submit_answer(&mut session, interest).unwrap();
                engine.submit_answer(&mut session, course).unwrap();
                engine.result(&session).unwrap().to_string()
            })
        })
        .collect();

    let labels: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(labels, vec!["B.Tech", "B.Arch."]);
}

proptest! {
    /// Replaying the same answers after a restart yields the same transitions.
    #[test]
    fn restart_replays_deterministically(choices in prop::collection::vec(0usize..8, 0..6)) {
        let engine = QuizEngine::builtin().unwrap();
        let mut session = engine.new_session();

        let run = |session: &mut QuizSession| {
            let mut transitions = Vec::new();
            let mut turn = engine.restart(session);
            for &choice in &choices {
                let Turn::Question(node) = turn else { break };
                let option = node.options[choice % node.options.len()].clone();
                turn = engine.submit_answer(session, &option).unwrap();
                transitions.push((node.id.clone(), option, turn.clone()));
            }
            (transitions, session.position().clone(), session.answers().to_vec())
        };

        let first = run(&mut session);
        let second = run(&mut session);
        prop_assert_eq!(first, second);
    }

    /// Rejected answers never change a session.
    #[test]
    fn rejected_answers_do_not_mutate(garbage in "[a-z]{1,12}", progress in 0usize..2) {
        let engine = QuizEngine::builtin().unwrap();
        let mut session = engine.new_session();
        engine.start(&mut session);
        if progress == 1 {
            engine.submit_answer(&mut session, "Arts").unwrap();
        }

        let before = session.clone();
        let result = engine.submit_answer(&mut session, &garbage);
        prop_assert!(result.is_err());
        prop_assert_eq!(session, before);
    }
}
