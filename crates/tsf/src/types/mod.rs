mod catalog;
mod location;
mod message;
mod status;

pub use catalog::{Catalog, Context, primary_subtag};
pub use location::Location;
pub use message::{Message, TranslationText};
pub use status::TranslationStatus;
