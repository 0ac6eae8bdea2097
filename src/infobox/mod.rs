mod error;
mod locate_infobox;

pub use error::LocateInfoboxError;
pub use locate_infobox::InfoboxLocator;
