mod cel_blob;
mod project_properties;

pub use self::cel_blob::*;
pub use self::project_properties::*;
