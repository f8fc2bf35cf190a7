pub mod frame_input;
pub mod log_text;
pub mod render;
