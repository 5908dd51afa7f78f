// ── Planning stages ──
//
// Each stage is a pure function over immutable inputs: coverage and
// capacity derive independent AP counts, the resolver reconciles them
// into a grid, the channel assigner colors it.

pub mod capacity;
pub mod channel;
pub mod coverage;
pub mod layout;

pub use capacity::plan_capacity;
pub use channel::{ChannelPlan, assign};
pub use coverage::plan_coverage;
pub use layout::resolve;
