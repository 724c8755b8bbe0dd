pub mod convert;
pub mod node_table;
pub mod report;
pub mod tree_file;
