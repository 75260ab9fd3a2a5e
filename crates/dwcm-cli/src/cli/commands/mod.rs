//! CLI command handlers. Each command is in its own file for clarity.

mod basis_of_record;
mod classify;
mod mime;
mod split;
mod typified_name;

pub use basis_of_record::run_basis_of_record;
pub use classify::run_classify;
pub use mime::run_mime;
pub use split::run_split;
pub use typified_name::run_typified_name;
