use serde::{Serialize, Deserialize};

use std::fmt;

///
/// Errors from the storage API
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum StorageError {
    /// General failure
    General,

    /// The storage could not be initialised
    FailedToInitialise,

    /// The storage cannot continue because of an earlier error
    CannotContinueAfterError,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::StorageError::*;

        match self {
            General                     => write!(f, "storage operation failed"),
            FailedToInitialise          => write!(f, "storage could not be initialised"),
            CannotContinueAfterError    => write!(f, "storage cannot continue after an earlier error"),
        }
    }
}

impl std::error::Error for StorageError { }
