// Word segmentation: the trait seam plus the default jieba backend.

pub mod jieba;
pub mod traits;

pub use jieba::JiebaSegmenter;
pub use traits::{Segmenter, WhitespaceSegmenter};
