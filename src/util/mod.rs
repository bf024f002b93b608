//! Browser glue: localStorage access and the third-party map embed.

pub mod map;
pub mod storage;
