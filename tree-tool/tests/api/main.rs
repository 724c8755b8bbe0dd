mod conversion;
mod helpers;
mod node_tables;
mod reports;
