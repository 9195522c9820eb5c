pub mod diagnostic;
pub mod render;
pub mod theme;

pub use theme::{Icon, Theme};

pub fn warn(message: impl AsRef<str>) {
    eprintln!("{} {}", Theme::warning("⚠️"), message.as_ref());
}

pub fn error(message: impl AsRef<str>) {
    eprintln!("{} {}", Theme::error(Icon::Cross), message.as_ref());
}

pub fn success(message: impl AsRef<str>) {
    println!("{} {}", Theme::success(Icon::Check), message.as_ref());
}
