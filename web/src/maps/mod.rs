pub mod adapter;
pub mod bindings;
pub mod loader;

pub use adapter::GoogleMapAdapter;
pub use loader::load_sdk;
