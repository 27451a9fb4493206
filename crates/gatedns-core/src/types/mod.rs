mod app;
mod dns;
mod request;

pub use app::*;
pub use dns::*;
pub use request::*;
