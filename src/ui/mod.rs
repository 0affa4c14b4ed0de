pub mod dialog;
pub mod forms;
pub mod confirmation;
pub mod upload_flow;
