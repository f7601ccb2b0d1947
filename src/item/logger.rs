use std::fmt::Debug;

use log::info;

use crate::core::item::{ItemWriter, ItemWriterResult};

/// Diagnostic sink that logs every item at `info` level instead of writing it.
#[derive(Default)]
pub struct LoggerWriter {}

impl<T> ItemWriter<T> for LoggerWriter
where
    T: Debug,
{
    fn write(&self, item: &T) -> ItemWriterResult {
        info!("Record:{:?}", item);
        Ok(())
    }
}
