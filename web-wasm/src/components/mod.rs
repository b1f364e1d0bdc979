pub mod dashboard;
pub mod header;
pub mod result_card;
pub mod stats_cards;
pub mod toast;
pub mod upload_area;
pub mod upload_view;
