pub mod features;
pub mod profile;
