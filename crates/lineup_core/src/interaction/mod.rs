// Drag-and-drop interaction: controller state machine and conflict resolution

pub mod conflict;
pub mod drag;

pub use conflict::{ConflictResolution, ConflictSide, DuplicateConflict};
pub use drag::{
    DragController, DragSession, DropOutcome, DropZone, InteractionState, ResolvedConflict,
    RosterMutation,
};
