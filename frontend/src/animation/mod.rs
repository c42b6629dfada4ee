pub mod counter;
pub mod scroll;
pub mod typewriter;
