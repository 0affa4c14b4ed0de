pub mod scan_type;
pub mod scan_status;
pub mod severity;
pub mod provenance;
pub mod store_status;
pub mod entity_kind;
pub mod fetch_outcome;
pub mod dialog_state;
pub mod upload_state;
pub mod sort_order;
pub mod status_filter;
pub mod severity_filter;
pub mod change_reason;
pub mod confirmation_state;
