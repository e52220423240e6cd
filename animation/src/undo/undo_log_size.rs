///
/// Used to tell the UI how many steps are available for undo and redo
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct UndoLogSize {
    pub undo_depth: usize,
    pub redo_depth: usize,
}
