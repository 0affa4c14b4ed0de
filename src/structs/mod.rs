pub mod activity_entry;
pub mod api_response;
pub mod config;
pub mod dashboard_stats;
pub mod entity_id;
pub mod fetch_ticket;
pub mod new_project;
pub mod project;
pub mod report;
pub mod report_key;
pub mod report_record;
pub mod report_stats;
pub mod scan;
pub mod scan_request;
pub mod scan_start_ack;
pub mod scan_upload;
pub mod sourced;
pub mod store_change;
pub mod store_snapshot;
pub mod view_criteria;
pub mod view_snapshot;
