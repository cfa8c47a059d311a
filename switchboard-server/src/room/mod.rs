mod directory;
mod member;

pub use directory::*;
pub use member::*;
