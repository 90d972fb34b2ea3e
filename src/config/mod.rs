pub mod load;
pub mod types;

pub use types::{
    Config, FileTypeTable, Language, UserSettings, has_extension_in, normalize_extension,
};
