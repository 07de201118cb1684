mod memory;
mod mysql;
mod store;

pub use memory::InMemoryStore;
pub use mysql::MySqlStore;
pub use store::Store;
