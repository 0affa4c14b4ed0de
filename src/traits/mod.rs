pub mod entity;
pub mod filterable;
pub mod scan_api;
pub mod dialog_form;
