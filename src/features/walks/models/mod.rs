mod walk;

pub use walk::Walk;
