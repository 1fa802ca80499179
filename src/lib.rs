pub mod analysis;
pub mod args;
pub mod domain;
pub mod group_files;
pub mod reporters;
pub mod table;
pub mod validate;

pub use args::parse_args;
pub use domain::Element;
pub use table::CayleyTable;
pub use validate::{find_identity, find_inverse, get_elements, is_valid_group};
