use crate::common::error::TakeOfferError;
use std::{fs, path::Path};

pub fn persist(json: String, path: impl AsRef<Path>) -> Result<(), TakeOfferError> {
    fs::write(path.as_ref(), json)?;
    Ok(())
}

pub fn restore(path: impl AsRef<Path>) -> Result<String, TakeOfferError> {
    let json = fs::read_to_string(path.as_ref())?;
    Ok(json)
}
