pub mod local_player;
pub mod metadata;
pub mod source;
