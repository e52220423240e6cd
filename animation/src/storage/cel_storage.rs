use super::storage_command::*;
use super::storage_response::*;

///
/// A backend that can store a project
///
/// Commands are processed in order. Every command produces exactly one response
/// except `ReadAllCels`, which produces one `Cel` response per stored cel.
///
pub trait CelStorage: Send {
    ///
    /// Runs a batch of storage commands and returns their responses
    ///
    fn run_commands(&mut self, commands: Vec<CelStorageCommand>) -> Vec<CelStorageResponse>;
}
