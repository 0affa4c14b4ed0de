pub mod entity_store;
pub mod stores;
pub mod report_normalizer;
pub mod view_filter;
pub mod in_flight;
pub mod scan_console;
