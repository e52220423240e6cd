use serde::{Serialize, Deserialize};

///
/// Response from a storage backend
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CelStorageResponse {
    /// The storage was updated
    Updated,

    /// The requested item could not be found
    NotFound,

    /// The serialized version of the project properties
    ProjectProperties(String),

    /// The encoded pixels of one stored cel
    Cel { layer: usize, color: String, frame: usize, data: Vec<u8> },
}
