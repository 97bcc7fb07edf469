//! Generator form state and the events that mutate it

mod events;
mod state;

pub use events::FormEvent;
pub use state::FormState;
