pub mod addon;
pub mod curseforge;
pub mod settings;
