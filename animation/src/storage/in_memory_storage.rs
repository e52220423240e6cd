use super::storage_command::*;
use super::storage_response::*;
use super::cel_storage::*;

use std::collections::{HashMap};

///
/// Provides an implementation of the storage API that keeps everything in memory
///
pub struct InMemoryStorage {
    /// The serialized project settings, if they have been written
    project_properties: Option<String>,

    /// Encoded cel data by (layer index, colour string, frame index)
    cels: HashMap<(usize, String, usize), Vec<u8>>,
}

impl InMemoryStorage {
    ///
    /// Creates a new empty in-memory storage
    ///
    pub fn new() -> InMemoryStorage {
        InMemoryStorage {
            project_properties: None,
            cels:               HashMap::new(),
        }
    }
}

impl CelStorage for InMemoryStorage {
    ///
    /// Runs a series of storage commands on this store
    ///
    fn run_commands(&mut self, commands: Vec<CelStorageCommand>) -> Vec<CelStorageResponse> {
        let mut response = vec![];

        for command in commands.into_iter() {
            use self::CelStorageCommand::*;

            match command {
                WriteProjectProperties(props) => {
                    self.project_properties = Some(props);
                    response.push(CelStorageResponse::Updated);
                }

                ReadProjectProperties => {
                    response.push(self.project_properties.as_ref()
                        .map(|props| CelStorageResponse::ProjectProperties(props.clone()))
                        .unwrap_or(CelStorageResponse::NotFound));
                }

                WriteCel { layer, color, frame, data } => {
                    self.cels.insert((layer, color, frame), data);
                    response.push(CelStorageResponse::Updated);
                }

                ReadCel { layer, color, frame } => {
                    response.push(self.cels.get(&(layer, color.clone(), frame))
                        .map(|data| CelStorageResponse::Cel { layer, color, frame, data: data.clone() })
                        .unwrap_or(CelStorageResponse::NotFound));
                }

                DeleteCel { layer, color, frame } => {
                    response.push(match self.cels.remove(&(layer, color, frame)) {
                        Some(_) => CelStorageResponse::Updated,
                        None    => CelStorageResponse::NotFound,
                    });
                }

                ReadAllCels => {
                    for ((layer, color, frame), data) in self.cels.iter() {
                        response.push(CelStorageResponse::Cel {
                            layer:  *layer,
                            color:  color.clone(),
                            frame:  *frame,
                            data:   data.clone(),
                        });
                    }
                }

                DeleteEverything => {
                    self.project_properties = None;
                    self.cels.clear();
                    response.push(CelStorageResponse::Updated);
                }
            }
        }

        response
    }
}
