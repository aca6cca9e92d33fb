use dioxus::prelude::*;

use quiz_core::model::Difficulty;
use services::{CompletionChoice, GamePhase, WrongAnswerChoice};

use crate::context::AppContext;
use crate::vm::{GameIntent, GameVm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn GameView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_signal(move || GameVm::new(ctx.new_game()));

    let dispatch_intent = use_callback(move |intent: GameIntent| {
        let mut vm = vm;
        vm.write().apply(intent);
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<GameTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let vm_guard = vm.read();
    let phase = vm_guard.phase();
    let score_label = format!("Score: {}", vm_guard.score());
    let level_label = vm_guard.difficulty().label();
    let question_text = vm_guard.question_text().map(str::to_owned);
    let options = vm_guard.options().cloned();
    let ticks: [bool; 4] = std::array::from_fn(|index| vm_guard.is_ticked(index));
    let correct_answer = vm_guard.correct_answer().map(str::to_owned);
    let score = vm_guard.score();
    let passed = vm_guard.passed();
    let acknowledged = vm_guard.completion_acknowledged();
    let elapsed = vm_guard.elapsed_label();

    rsx! {
        div { class: "page game-page",
            match phase {
                GamePhase::SelectingDifficulty => rsx! {
                    DifficultyPicker { on_intent: dispatch_intent }
                },
                GamePhase::Complete => rsx! {
                    div { class: "game-complete",
                        h2 { class: "game-complete__title",
                            "Congratulations! You have completed all levels!"
                        }
                    }
                },
                // Playing, the wrong-answer prompt, and the completion prompt
                // all keep the question panel on screen underneath.
                _ => rsx! {
                    header { class: "game-header",
                        span { class: "game-header__score", "{score_label}" }
                        span { class: "game-header__level", "{level_label}" }
                        button {
                            class: "btn btn-secondary",
                            id: "game-change-difficulty",
                            r#type: "button",
                            onclick: move |_| dispatch_intent.call(GameIntent::ChangeDifficulty),
                            "Change Difficulty"
                        }
                    }
                    if let Some(text) = question_text {
                        div { class: "question-panel",
                            h2 { class: "question-panel__text", "{text}" }
                            if let Some(options) = options {
                                div { class: "answer-options",
                                    for (index, option) in options.iter().enumerate() {
                                        OptionRow {
                                            key: "{index}",
                                            index,
                                            label: option.clone(),
                                            ticked: ticks[index],
                                            on_intent: dispatch_intent,
                                        }
                                    }
                                }
                            }
                            button {
                                class: "btn btn-primary",
                                id: "game-submit",
                                r#type: "button",
                                onclick: move |_| dispatch_intent.call(GameIntent::Submit),
                                "Submit Answer"
                            }
                        }
                    }
                    if phase == GamePhase::WrongAnswer {
                        if let Some(correct_answer) = correct_answer {
                            WrongAnswerDialog { correct_answer, on_intent: dispatch_intent }
                        }
                    }
                    if phase == GamePhase::LevelComplete && !acknowledged {
                        LevelCompleteDialog {
                            score,
                            passed,
                            elapsed,
                            on_intent: dispatch_intent,
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn DifficultyPicker(on_intent: EventHandler<GameIntent>) -> Element {
    rsx! {
        div { class: "dialog difficulty-picker", role: "dialog", aria_modal: "true",
            h3 { class: "dialog__title", "Difficulty Selection" }
            p { class: "dialog__message", "Select difficulty level:" }
            div { class: "dialog__actions",
                DifficultyButton { label: "Easy", difficulty: Difficulty::Easy, on_intent }
                DifficultyButton { label: "Medium", difficulty: Difficulty::Medium, on_intent }
                DifficultyButton { label: "Hard", difficulty: Difficulty::Hard, on_intent }
            }
        }
    }
}

#[component]
fn DifficultyButton(
    label: &'static str,
    difficulty: Difficulty,
    on_intent: EventHandler<GameIntent>,
) -> Element {
    let id = match difficulty {
        Difficulty::Easy => "difficulty-easy",
        Difficulty::Medium => "difficulty-medium",
        Difficulty::Hard => "difficulty-hard",
    };
    rsx! {
        button {
            class: "btn difficulty-btn",
            id: "{id}",
            r#type: "button",
            onclick: move |_| on_intent.call(GameIntent::Choose(difficulty)),
            "{label}"
        }
    }
}

#[component]
fn OptionRow(
    index: usize,
    label: String,
    ticked: bool,
    on_intent: EventHandler<GameIntent>,
) -> Element {
    rsx! {
        label { class: "option-row",
            input {
                r#type: "checkbox",
                id: "answer-option-{index}",
                checked: ticked,
                onchange: move |_| on_intent.call(GameIntent::Toggle(index)),
            }
            span { class: "option-row__label", "{label}" }
        }
    }
}

#[component]
fn WrongAnswerDialog(correct_answer: String, on_intent: EventHandler<GameIntent>) -> Element {
    rsx! {
        div { class: "dialog-overlay",
            div { class: "dialog", role: "dialog", aria_modal: "true",
                h3 { class: "dialog__title", "Wrong Answer" }
                p { class: "dialog__message",
                    "Wrong answer! The correct answer was: {correct_answer}. Do you want to retry the question or continue?"
                }
                div { class: "dialog__actions",
                    button {
                        class: "btn btn-primary",
                        id: "wrong-answer-retry",
                        r#type: "button",
                        onclick: move |_| {
                            on_intent.call(GameIntent::WrongAnswer(WrongAnswerChoice::Retry));
                        },
                        "Retry"
                    }
                    button {
                        class: "btn btn-secondary",
                        id: "wrong-answer-continue",
                        r#type: "button",
                        onclick: move |_| {
                            on_intent.call(GameIntent::WrongAnswer(WrongAnswerChoice::Continue));
                        },
                        "Continue"
                    }
                }
            }
        }
    }
}

#[component]
fn LevelCompleteDialog(
    score: usize,
    passed: bool,
    elapsed: Option<String>,
    on_intent: EventHandler<GameIntent>,
) -> Element {
    let message = if passed {
        format!("Congratulations! You scored {score}/10. Do you want to proceed to the next level?")
    } else {
        format!("You scored {score}/10. Try again or select a different level.")
    };

    rsx! {
        div { class: "dialog-overlay",
            div { class: "dialog", role: "dialog", aria_modal: "true",
                h3 { class: "dialog__title", "Level Completed" }
                p { class: "dialog__message", "{message}" }
                if let Some(elapsed) = elapsed {
                    p { class: "dialog__note", "{elapsed}" }
                }
                div { class: "dialog__actions",
                    button {
                        class: "btn btn-primary",
                        id: "level-complete-yes",
                        r#type: "button",
                        onclick: move |_| {
                            on_intent.call(GameIntent::Completion(CompletionChoice::Advance));
                        },
                        "Yes"
                    }
                    button {
                        class: "btn btn-secondary",
                        id: "level-complete-no",
                        r#type: "button",
                        onclick: move |_| {
                            on_intent.call(GameIntent::Completion(CompletionChoice::Dismiss));
                        },
                        "No"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct GameTestHandles {
    dispatch: Rc<RefCell<Option<Callback<GameIntent>>>>,
    vm: Rc<RefCell<Option<Signal<GameVm>>>>,
}

#[cfg(test)]
impl GameTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<GameIntent>, vm: Signal<GameVm>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<GameIntent> {
        (*self.dispatch.borrow()).expect("game dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<GameVm> {
        (*self.vm.borrow()).expect("game vm registered")
    }
}
