pub mod draw;
pub mod icon_gen;
