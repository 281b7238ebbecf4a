pub mod dispatch;
pub mod shared;

pub mod animal;
pub mod calf;
pub mod log;
pub mod owner;
pub mod pen;
pub mod user;
