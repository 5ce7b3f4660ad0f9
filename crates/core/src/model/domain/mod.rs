pub mod frame;
pub mod object;
pub mod track_set;
pub mod validation;
