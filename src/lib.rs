// Carbon: plagiarism detection for text documents.
//
// This is the library root. Each module corresponds to one stage of the
// scoring pipeline, plus the thin I/O shell around it. Data flows strictly
// forward: raw text -> normalized text -> token sequence -> joint vector
// pair -> scalar score.

pub mod config;
pub mod files;
pub mod normalize;
pub mod output;
pub mod pipeline;
pub mod segment;
pub mod similarity;
pub mod tokens;
pub mod vector;
