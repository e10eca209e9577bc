pub mod chart_renderer;
pub mod confirm;
pub mod console;
pub mod notifier;
