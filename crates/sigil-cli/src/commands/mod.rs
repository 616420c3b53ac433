pub mod defaults;
pub mod issue;
pub mod verify;
