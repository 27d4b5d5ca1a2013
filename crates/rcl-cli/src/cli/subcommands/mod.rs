mod key;
mod log;
mod participant;
mod reference;

pub use key::KeyCommands;
pub use log::LogCommands;
pub use participant::ParticipantCommands;
pub use reference::ReferenceCommands;
