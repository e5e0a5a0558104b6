pub mod category;
pub mod video;
