//! Heartbeat liveness transitions.
//!
//! ```text
//!  ALIVE ──(heartbeat request fails)──► DEAD   (terminal, shutdown notice shown)
//!    │
//!    └──(reply is not "true")──► heartbeat loop stops, view unchanged
//! ```

use crate::app::state::{Liveness, ViewModel};

/// Move the view to `Dead`. Returns true only on the first transition, so
/// the shutdown notice is rendered once.
pub fn backend_lost(view: &mut ViewModel) -> bool {
    if view.is_dead() {
        return false;
    }
    view.liveness = Liveness::Dead;
    true
}
