pub mod artist_inference;
pub mod artist_tally;
pub mod song_index;
