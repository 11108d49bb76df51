pub mod not_found;
pub mod status_map;
