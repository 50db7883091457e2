pub mod recovery;
pub mod store;
