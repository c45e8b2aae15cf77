pub mod taxonomy;
pub mod validate;
