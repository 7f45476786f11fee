pub mod contact;
mod service;

pub use contact::EmailDelivery;
pub use service::*;
