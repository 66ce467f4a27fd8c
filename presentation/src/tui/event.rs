//! Events delivered to the TUI loop from spawned effect tasks

use nationsense_application::Outcome;

#[derive(Debug)]
pub enum TuiEvent {
    /// An outcome to apply to the view controller
    Outcome(Outcome),
    /// The task running the named effect has ended
    EffectFinished(&'static str),
}
