pub mod aggregate;
pub mod classify;
pub mod extract;
pub mod locate;
pub mod sync;
