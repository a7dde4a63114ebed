pub mod card_grid;
pub mod dashboard;
pub mod not_found;
pub mod quiz;
pub mod summary;
