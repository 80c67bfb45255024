//! Block-level parsing
//!
//! Groups a document's classified lines into typed blocks. Inline parsing
//! of paragraph contents is a separate stage; see
//! [`inlines`](crate::quill::inlines) and
//! [`pipeline`](crate::quill::pipeline).

pub mod blocks;

pub use blocks::segment;
