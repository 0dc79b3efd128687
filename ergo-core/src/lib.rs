pub mod dashboard;
pub mod error;
pub mod figures;
pub mod sample;
pub mod summary;
pub mod videos;

pub use dashboard::Dashboard;
pub use error::DashError;
pub use sample::{SampleParams, SampleRow, SampleTable};
pub use videos::{select_video, VideoCatalog, VideoEntry, VideoPanel};
