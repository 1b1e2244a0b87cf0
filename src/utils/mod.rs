pub mod environment;
pub mod paths;
pub mod terminal;

pub use environment::get_dict_dir;
pub use paths::{expand_tilde, format_path_with_tilde};
pub use terminal::sanitize_for_display;
