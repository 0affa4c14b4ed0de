mod common;
mod gateway_tests;
mod interaction_tests;
mod view_filter_tests;
