//! Reversible tile editing for mapforge
//!
//! One user gesture (a drag-paint stroke, one flood fill) becomes one
//! `TileBatch` of `TileChange` records. Batches are committed to an
//! `EditHistory`, which replays them forward (redo) or in reverse (undo)
//! against the map. `EditSession` is the facade a UI layer drives:
//! it translates per-cell edits into recorded changes and owns the
//! in-flight batch and the history.

mod batch;
mod change;
mod fill;
mod history;
mod session;

pub use batch::TileBatch;
pub use change::TileChange;
pub use fill::flood_fill;
pub use history::EditHistory;
pub use session::EditSession;
