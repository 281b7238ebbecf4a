mod animal;
mod calf;
mod log;
mod owner;
mod pen;
mod user;

pub use animal::AnimalCommands;
pub use calf::CalfCommands;
pub use log::LogCommands;
pub use owner::OwnerCommands;
pub use pen::PenCommands;
pub use user::UserCommands;
