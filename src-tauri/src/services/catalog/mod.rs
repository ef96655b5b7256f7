mod scanner;
mod selector;

pub use scanner::scan_images;
pub use selector::Selector;
