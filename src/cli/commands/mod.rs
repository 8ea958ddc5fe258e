// Commands module - One type per sub-command
pub mod get_status;
pub mod list_controllers;
pub mod set_pc_control;

pub use get_status::GetStatus;
pub use list_controllers::ListControllers;
pub use set_pc_control::SetPcControl;
