pub mod api_error;
pub mod scenario_controller;
