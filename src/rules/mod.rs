//! Game rules.
//!
//! The reducer in `engine` is the only state transition. The other modules
//! hold one phase each plus the queries a client needs to render a position
//! (costs, legal placements, legal moves, running clocks, scores).

mod assign;
mod bidding;
mod clock;
pub mod engine;
mod movement;
mod placement;
mod scoring;

pub use assign::assignment_cost;
pub use bidding::auction_winner;
pub use clock::{ticking_mode, TickingMode};
pub use engine::{reduce, EndReason, Outcome};
pub use movement::{has_any_legal_move, stone_moves};
pub use placement::{can_place, legal_placements, square_cost};
pub use scoring::{compute_score_details, score_leader};
