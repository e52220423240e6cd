mod main_layer;
mod cel_id;
mod render_options;
mod store_error;

pub use self::main_layer::*;
pub use self::cel_id::*;
pub use self::render_options::*;
pub use self::store_error::*;
