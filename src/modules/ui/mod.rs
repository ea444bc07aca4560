pub mod track_length;
