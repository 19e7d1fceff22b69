// Smart car dashboard client - sensor history charts, device control, theme
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
