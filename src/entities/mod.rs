pub mod entry;

pub use entry::Entity as Entry;
