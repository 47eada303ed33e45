// Paper resolution: arXiv link handling, PDF retrieval, abstract extraction.

pub mod extract;
pub mod resolver;
pub mod source;
