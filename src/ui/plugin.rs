//! UI plugin - screens, HUD and the entity view.

use bevy::prelude::*;

use super::{hud, menu, view};

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        menu::setup_menu_systems(app);
        hud::setup_hud_systems(app);
        view::setup_view_systems(app);

        app.insert_resource(ClearColor(Color::srgb(0.08, 0.09, 0.1)));
    }
}
