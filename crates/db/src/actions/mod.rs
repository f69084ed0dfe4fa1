pub mod genre_actions;
pub mod movie_actions;
