// File I/O for mark-list pipelines

pub mod entities;
pub mod export;
pub mod text;
