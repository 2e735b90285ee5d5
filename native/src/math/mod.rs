pub mod color_parse;
pub mod composite;
pub mod hex;
pub mod movement;
pub mod rgba;
pub mod wcag;
