#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use std::sync::{Mutex, MutexGuard};

use liftplan_domain as domain;

pub mod json_file;
pub mod memory;

pub use json_file::JsonFile;
pub use memory::InMemory;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("object not found")]
    ObjectNotFound,
    #[error("lock poisoned")]
    Poisoned,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<StoreError> for domain::StorageError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::ObjectNotFound => domain::StorageError::NotFound,
            err => domain::StorageError::Other(Box::new(err)),
        }
    }
}

macro_rules! impl_from_store_error {
    ($($error: ident),*) => {
        $(
            impl From<StoreError> for domain::$error {
                fn from(value: StoreError) -> Self {
                    domain::$error::Storage(value.into())
                }
            }
        )*
    };
}

impl_from_store_error!(ReadError, CreateError, UpdateError, DeleteError);

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, StoreError> {
    mutex.lock().map_err(|_| StoreError::Poisoned)
}
