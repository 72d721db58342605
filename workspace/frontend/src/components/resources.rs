pub mod info_card;
pub mod resource_card;
pub mod video;
