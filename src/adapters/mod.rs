pub mod http_scan_api;
