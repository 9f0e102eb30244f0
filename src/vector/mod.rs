// Vector-space construction over a two-document corpus.

pub mod tfidf;

pub use tfidf::{build_pair, VectorConfig, VectorError, VectorPair};
