pub mod menu_bar;
pub mod notifications;
pub mod status;
pub mod toolbar;
pub mod viewport;
