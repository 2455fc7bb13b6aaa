pub mod effect_client;
pub mod http_client;

pub use effect_client::*;
pub use http_client::*;
