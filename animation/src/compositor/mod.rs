mod compositor;
mod onion_skin;
#[cfg(test)] mod tests;

pub use self::compositor::*;
