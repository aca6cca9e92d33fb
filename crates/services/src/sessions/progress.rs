/// Aggregated view of level progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelProgress {
    pub asked: usize,
    pub correct: usize,
    pub remaining: usize,
    pub is_complete: bool,
}
