//! Non-graphical objects: dictionaries, image definitions and XRecords

pub mod dictionary;
pub mod image_definition;
pub mod xrecord;

pub use dictionary::{Dictionary, DictionaryEntry};
pub use image_definition::ImageDefinition;
pub use xrecord::{XRecordData, XRecordValue};
