/// Reader and writer traits shared by every item source and sink.
pub mod item;

/// The caller-owned row buffer exchanged with the codec.
pub mod row;
