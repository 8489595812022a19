pub mod table;

pub use table::{TableDisplay, TypeCheckRow};
