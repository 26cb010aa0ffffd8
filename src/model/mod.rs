//! Output data model.

mod outline;

pub use outline::{DocumentOutline, Heading, HeadingLevel};
