// Domain layer: response models and the ports the client is built on.

pub(crate) mod de;
pub mod model;
pub mod ports;
pub mod product;
pub mod question;
pub mod review;
pub mod statistics;
