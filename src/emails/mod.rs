mod account_imported;
pub use account_imported::*;
