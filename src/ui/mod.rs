//! UI module - menus, HUD, and the gizmo view of the simulation.

mod hud;
mod menu;
mod plugin;
mod view;

pub use hud::HudRoot;
pub use plugin::UiPlugin;
pub use view::ExplosionFlashes;
