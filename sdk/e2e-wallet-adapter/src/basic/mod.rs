pub mod adapter;
pub mod events;
pub mod reject;
