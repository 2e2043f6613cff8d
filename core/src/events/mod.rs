pub mod debounce;
pub mod signal;

pub use debounce::Debouncer;
pub use signal::{MutationSignal, SignalOptions};
