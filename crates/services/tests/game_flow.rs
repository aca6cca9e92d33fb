use std::sync::Arc;

use quiz_core::model::{Difficulty, Question, QuestionBank};
use quiz_core::time::fixed_clock;
use services::{CompletionChoice, GamePhase, QUESTIONS_PER_LEVEL, QuizGame, WrongAnswerChoice};

fn full_bank() -> Arc<QuestionBank> {
    let mut questions = Vec::new();
    for difficulty in Difficulty::ALL {
        for i in 0..QUESTIONS_PER_LEVEL {
            questions.push(Question::new(
                format!("{difficulty} question {i}"),
                format!("{difficulty} answer {i}"),
                [
                    format!("decoy a {i}"),
                    format!("decoy b {i}"),
                    format!("decoy c {i}"),
                ],
                difficulty,
            ));
        }
    }
    Arc::new(QuestionBank::new(questions))
}

fn play_level_perfectly(game: &mut QuizGame) {
    while game.phase() == GamePhase::Playing {
        let answer = game
            .current()
            .unwrap()
            .question()
            .correct_answer()
            .to_owned();
        game.submit_answer(&answer);
    }
}

#[test]
fn perfect_run_clears_all_three_levels() {
    let mut game = QuizGame::new(full_bank(), fixed_clock());

    for expected in Difficulty::ALL {
        assert_eq!(game.phase(), GamePhase::SelectingDifficulty);
        assert_eq!(game.difficulty(), expected);

        game.choose_difficulty(expected);
        play_level_perfectly(&mut game);

        assert_eq!(game.phase(), GamePhase::LevelComplete);
        let progress = game.progress();
        assert_eq!(progress.asked, QUESTIONS_PER_LEVEL);
        assert_eq!(progress.correct, QUESTIONS_PER_LEVEL);
        assert!(progress.is_complete);
        assert!(game.passed());

        game.resolve_level_complete(CompletionChoice::Advance);
    }

    assert_eq!(game.phase(), GamePhase::Complete);
}

#[test]
fn one_retried_miss_still_clears_the_level() {
    let mut game = QuizGame::new(full_bank(), fixed_clock());
    game.choose_difficulty(Difficulty::Easy);

    // Miss the first question, retry it, then get it right.
    let sheet = game.current().unwrap();
    let wrong = sheet
        .options()
        .iter()
        .find(|option| !sheet.is_correct(option))
        .cloned()
        .unwrap();
    game.submit_answer(&wrong);
    assert_eq!(game.phase(), GamePhase::WrongAnswer);
    game.resolve_wrong_answer(WrongAnswerChoice::Retry);

    play_level_perfectly(&mut game);

    assert_eq!(game.phase(), GamePhase::LevelComplete);
    assert_eq!(game.progress().correct, QUESTIONS_PER_LEVEL);
    assert!(game.passed());

    game.resolve_level_complete(CompletionChoice::Advance);
    assert_eq!(game.difficulty(), Difficulty::Medium);
}
