// Similarity scoring: cosine over TF-IDF vectors, banded for display.

pub mod band;
pub mod cosine;

pub use band::SimilarityBand;
pub use cosine::cosine;
