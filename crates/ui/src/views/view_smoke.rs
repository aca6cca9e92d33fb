use dioxus::prelude::ReadableExt;

use quiz_core::model::Difficulty;
use services::{CompletionChoice, GamePhase};

use crate::vm::GameIntent;

use super::test_harness::{GameViewHarness, bank_of, setup_game_harness};

fn index_of_correct(harness: &GameViewHarness) -> usize {
    let vm = harness.handles.vm();
    let vm = vm.read();
    let correct = vm.correct_answer().expect("question dealt").to_owned();
    vm.options()
        .expect("options dealt")
        .iter()
        .position(|option| *option == correct)
        .expect("correct option present")
}

fn index_of_wrong(harness: &GameViewHarness) -> usize {
    let vm = harness.handles.vm();
    let vm = vm.read();
    let correct = vm.correct_answer().expect("question dealt").to_owned();
    vm.options()
        .expect("options dealt")
        .iter()
        .position(|option| *option != correct)
        .expect("wrong option present")
}

fn answer_current_correctly(harness: &mut GameViewHarness) {
    let index = index_of_correct(harness);
    harness.dispatch(GameIntent::Toggle(index));
    harness.dispatch(GameIntent::Submit);
}

#[test]
fn difficulty_screen_lists_all_levels() {
    let mut harness = setup_game_harness(bank_of(&[(Difficulty::Easy, 3)]));
    harness.rebuild();

    let html = harness.render();
    assert!(
        html.contains("Select difficulty level:"),
        "missing prompt in {html}"
    );
    for label in ["Easy", "Medium", "Hard"] {
        assert!(html.contains(label), "missing {label} in {html}");
    }
}

#[test]
fn choosing_a_level_deals_a_question() {
    let mut harness = setup_game_harness(bank_of(&[(Difficulty::Easy, 3)]));
    harness.rebuild();
    harness.dispatch(GameIntent::Choose(Difficulty::Easy));

    let html = harness.render();
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(html.contains("Submit Answer"), "missing submit in {html}");
    assert!(
        html.contains("Change Difficulty"),
        "missing change difficulty in {html}"
    );

    let vm = harness.handles.vm();
    let vm = vm.read();
    let text = vm.question_text().expect("question dealt").to_owned();
    assert!(html.contains(&text), "missing question text in {html}");
    for option in vm.options().expect("options dealt") {
        assert!(
            html.contains(option.as_str()),
            "missing option {option} in {html}"
        );
    }
}

#[test]
fn submitting_the_correct_answer_scores() {
    let mut harness = setup_game_harness(bank_of(&[(Difficulty::Easy, 3)]));
    harness.rebuild();
    harness.dispatch(GameIntent::Choose(Difficulty::Easy));

    answer_current_correctly(&mut harness);

    let html = harness.render();
    assert!(html.contains("Score: 1"), "missing updated score in {html}");
    assert_eq!(harness.handles.vm().read().phase(), GamePhase::Playing);
}

#[test]
fn a_wrong_answer_opens_the_retry_dialog() {
    let mut harness = setup_game_harness(bank_of(&[(Difficulty::Easy, 3)]));
    harness.rebuild();
    harness.dispatch(GameIntent::Choose(Difficulty::Easy));

    let wrong = index_of_wrong(&harness);
    harness.dispatch(GameIntent::Toggle(wrong));
    harness.dispatch(GameIntent::Submit);

    let correct = {
        let vm = harness.handles.vm();
        let vm = vm.read();
        vm.correct_answer().expect("question on display").to_owned()
    };
    let html = harness.render();
    let expected = format!(
        "Wrong answer! The correct answer was: {correct}. Do you want to retry the question or continue?"
    );
    assert!(html.contains(&expected), "missing dialog text in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
    assert!(html.contains("Continue"), "missing continue in {html}");
}

#[test]
fn a_short_level_ends_on_the_completion_prompt() {
    let mut harness = setup_game_harness(bank_of(&[(Difficulty::Easy, 1)]));
    harness.rebuild();
    harness.dispatch(GameIntent::Choose(Difficulty::Easy));

    answer_current_correctly(&mut harness);

    let html = harness.render();
    assert!(
        html.contains("You scored 1/10. Try again or select a different level."),
        "missing completion prompt in {html}"
    );
    assert!(html.contains("Time: 0:00"), "missing elapsed time in {html}");

    // No closes the prompt; the difficulty screen comes back via Change Difficulty.
    harness.dispatch(GameIntent::Completion(CompletionChoice::Dismiss));
    let html = harness.render();
    assert!(
        !html.contains("Try again or select a different level."),
        "prompt should close in {html}"
    );

    harness.dispatch(GameIntent::ChangeDifficulty);
    let html = harness.render();
    assert!(
        html.contains("Select difficulty level:"),
        "missing difficulty screen in {html}"
    );
}

#[test]
fn passing_a_level_offers_the_next_one() {
    let mut harness = setup_game_harness(bank_of(&[(Difficulty::Easy, 10)]));
    harness.rebuild();
    harness.dispatch(GameIntent::Choose(Difficulty::Easy));

    while harness.handles.vm().read().phase() == GamePhase::Playing {
        answer_current_correctly(&mut harness);
    }

    let html = harness.render();
    assert!(
        html.contains("Congratulations! You scored 10/10. Do you want to proceed to the next level?"),
        "missing pass prompt in {html}"
    );

    harness.dispatch(GameIntent::Completion(CompletionChoice::Advance));
    let html = harness.render();
    assert!(
        html.contains("Select difficulty level:"),
        "missing difficulty screen in {html}"
    );
    assert_eq!(harness.handles.vm().read().difficulty(), Difficulty::Medium);
}

#[test]
fn finishing_hard_shows_the_terminal_banner() {
    let mut harness = setup_game_harness(bank_of(&[(Difficulty::Hard, 10)]));
    harness.rebuild();
    harness.dispatch(GameIntent::Choose(Difficulty::Hard));

    while harness.handles.vm().read().phase() == GamePhase::Playing {
        answer_current_correctly(&mut harness);
    }
    harness.dispatch(GameIntent::Completion(CompletionChoice::Advance));

    let html = harness.render();
    assert!(
        html.contains("Congratulations! You have completed all levels!"),
        "missing terminal banner in {html}"
    );
    assert_eq!(harness.handles.vm().read().phase(), GamePhase::Complete);
}
