pub mod chat_panel;
pub mod movie_card;
pub mod movie_detail;
pub mod search_bar;
