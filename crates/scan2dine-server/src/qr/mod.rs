pub mod generator;

pub use generator::{data_url, download_filename, render_png, QrError, QrOptions};
