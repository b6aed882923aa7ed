// Formation arrangement engine

pub mod arrangement;

pub use arrangement::{arrange_formation, FormationPlan, SlotAssignment};
