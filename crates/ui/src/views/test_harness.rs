use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;

use quiz_core::Clock;
use quiz_core::model::{Difficulty, Question, QuestionBank};
use quiz_core::time::fixed_clock;

use crate::context::{UiApp, build_app_context};
use crate::views::GameView;
use crate::views::game::GameTestHandles;
use crate::vm::GameIntent;

struct TestApp {
    bank: Arc<QuestionBank>,
}

impl UiApp for TestApp {
    fn question_bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }
}

#[derive(Props, Clone)]
struct GameHarnessProps {
    app: Arc<TestApp>,
    handles: GameTestHandles,
}

impl PartialEq for GameHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for GameHarnessProps {}

#[component]
fn GameHarness(props: GameHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { GameView {} }
}

pub struct GameViewHarness {
    pub dom: VirtualDom,
    pub handles: GameTestHandles,
}

impl GameViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn dispatch(&mut self, intent: GameIntent) {
        self.handles.dispatch().call(intent);
        drive_dom(&mut self.dom);
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn question(text: &str, answer: &str, difficulty: Difficulty) -> Question {
    Question::new(
        text,
        answer,
        [
            format!("{text} decoy one"),
            format!("{text} decoy two"),
            format!("{text} decoy three"),
        ],
        difficulty,
    )
}

pub fn bank_of(counts: &[(Difficulty, usize)]) -> QuestionBank {
    let mut questions = Vec::new();
    for &(difficulty, count) in counts {
        for i in 0..count {
            questions.push(question(
                &format!("{difficulty} nr {i}"),
                &format!("{difficulty} nr {i} answer"),
                difficulty,
            ));
        }
    }
    QuestionBank::new(questions)
}

pub fn setup_game_harness(bank: QuestionBank) -> GameViewHarness {
    let handles = GameTestHandles::default();
    let app = Arc::new(TestApp {
        bank: Arc::new(bank),
    });

    let dom = VirtualDom::new_with_props(
        GameHarness,
        GameHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    GameViewHarness { dom, handles }
}
