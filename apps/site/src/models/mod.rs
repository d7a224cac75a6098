pub mod index;
pub mod resume;

pub use index::{ResumeIndex, ResumeIndexEntry};
pub use resume::Resume;
