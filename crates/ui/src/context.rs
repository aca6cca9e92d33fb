use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::model::QuestionBank;
use services::QuizGame;

/// What the composition root provides to the views.
pub trait UiApp: Send + Sync {
    fn question_bank(&self) -> Arc<QuestionBank>;
    fn clock(&self) -> Clock;
}

#[derive(Clone)]
pub struct AppContext {
    bank: Arc<QuestionBank>,
    clock: Clock,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            bank: app.question_bank(),
            clock: app.clock(),
        }
    }

    #[must_use]
    pub fn question_bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    /// A fresh game over the loaded question bank.
    #[must_use]
    pub fn new_game(&self) -> QuizGame {
        QuizGame::new(Arc::clone(&self.bank), self.clock)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
