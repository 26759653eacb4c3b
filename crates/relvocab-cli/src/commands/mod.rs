//! Command implementations.

pub mod kill_chain;
pub mod locale;
pub mod relations;
pub mod status;
pub mod table;
pub mod targets;

pub use self::kill_chain::execute_kill_chain;
pub use self::locale::execute_locale;
pub use self::relations::execute_relations;
pub use self::status::execute_status;
pub use self::table::execute_table;
pub use self::targets::execute_targets;
