pub mod health;
pub mod images;
pub mod items;
pub mod metrics;
pub mod orders;
