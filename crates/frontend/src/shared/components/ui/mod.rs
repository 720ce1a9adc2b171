pub mod textarea;

pub use textarea::Textarea;
