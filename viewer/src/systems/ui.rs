use bevy::prelude::*;
use interaction::{FlatButton, LoadGeneration, ViewerContext};

use crate::{
    components::FlatButtonKey,
    constants::*,
    markers::{DwellBarUIMarker, FlatUiMarker, ModeTitleUIMarker, ReticleUIMarker},
    systems::content::SceneHostParam,
};

const fn rgba_color(rgba: [f32; 4]) -> Color {
    Color::srgba(rgba[0], rgba[1], rgba[2], rgba[3])
}

// ============================================================================
// UI Setup System
// ============================================================================

pub fn setup_ui_system(mut commands: Commands) {
    // Create flat-screen button bar along the bottom edge
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(0.0),
            bottom: Val::Px(20.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            column_gap: Val::Px(10.0),
            ..default()
        },
        FlatUiMarker,
    ));

    // Create mode title in the upper left corner
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: FLAT_FONT_SIZE * 1.5,
            ..default()
        },
        TextColor(rgba_color(MODE_TITLE_COLOR)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            ..default()
        },
        ModeTitleUIMarker,
    ));

    // Create gaze reticle (hidden until a session starts)
    let reticle_color = rgba_color(RETICLE_COLOR);
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Percent(50.0),
                top: Val::Percent(50.0),
                width: Val::Px(0.0),
                height: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            Visibility::Hidden,
            ReticleUIMarker,
        ))
        .with_children(|parent| {
            // Horizontal line
            parent.spawn((
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(-RETICLE_SIZE / 2.0),
                    top: Val::Px(-RETICLE_THICKNESS / 2.0),
                    width: Val::Px(RETICLE_SIZE),
                    height: Val::Px(RETICLE_THICKNESS),
                    ..default()
                },
                BackgroundColor(reticle_color),
            ));
            // Vertical line
            parent.spawn((
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(-RETICLE_THICKNESS / 2.0),
                    top: Val::Px(-RETICLE_SIZE / 2.0),
                    width: Val::Px(RETICLE_THICKNESS),
                    height: Val::Px(RETICLE_SIZE),
                    ..default()
                },
                BackgroundColor(reticle_color),
            ));
            // Dwell progress, grows to full width as the gaze holds
            parent.spawn((
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(-DWELL_BAR_WIDTH / 2.0),
                    top: Val::Px(RETICLE_SIZE),
                    width: Val::Px(0.0),
                    height: Val::Px(DWELL_BAR_HEIGHT),
                    ..default()
                },
                BackgroundColor(reticle_color),
                DwellBarUIMarker,
            ));
        });
}

// ============================================================================
// UI Update Systems
// ============================================================================

// Show the flat UI on desktop and the reticle while immersed
pub fn ui_layers_system(
    ctx: Res<ViewerContext>,
    mut flat_ui: Single<&mut Visibility, (With<FlatUiMarker>, Without<ReticleUIMarker>)>,
    mut reticle: Single<&mut Visibility, (With<ReticleUIMarker>, Without<FlatUiMarker>)>,
) {
    if !ctx.is_changed() {
        return;
    }

    let ui = ctx.ui();
    **flat_ui = if ui.flat_visible {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    **reticle = if ui.immersive_visible {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
}

pub fn ui_dwell_bar_system(ctx: Res<ViewerContext>, mut bar: Single<&mut Node, With<DwellBarUIMarker>>) {
    bar.width = Val::Px(DWELL_BAR_WIDTH * ctx.gaze().progress());
}

// Rebuild the flat button bar after every mode switch
pub fn ui_flat_buttons_system(
    mut commands: Commands,
    ctx: Res<ViewerContext>,
    flat_ui: Single<Entity, With<FlatUiMarker>>,
    mut built: Local<Option<LoadGeneration>>,
    mut title: Single<&mut Text, With<ModeTitleUIMarker>>,
) {
    if *built == Some(ctx.generation()) {
        return;
    }
    *built = Some(ctx.generation());

    let mode = ctx.mode();
    title.0 = mode.label().to_string();

    commands.entity(*flat_ui).despawn_related::<Children>();
    let buttons: Vec<Entity> = FlatButton::offered_in(mode)
        .map(|button| spawn_flat_button(&mut commands, button, &button.label(mode)))
        .collect();
    commands.entity(*flat_ui).add_children(&buttons);
}

fn spawn_flat_button(commands: &mut Commands, button: FlatButton, label: &str) -> Entity {
    commands
        .spawn((
            Button,
            Node {
                width: Val::Px(FLAT_BUTTON_WIDTH),
                height: Val::Px(FLAT_BUTTON_HEIGHT),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(rgba_color(FLAT_BUTTON_COLOR)),
            FlatButtonKey(button),
            Name::new(button.key()),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(label),
                TextFont {
                    font_size: FLAT_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        })
        .id()
}

// Route flat-screen clicks into the viewer context
pub fn ui_flat_click_system(
    mut ctx: ResMut<ViewerContext>,
    mut host: SceneHostParam,
    mut buttons: Query<(&Interaction, &FlatButtonKey, &mut BackgroundColor), Changed<Interaction>>,
) {
    for (interaction, key, mut background) in &mut buttons {
        match interaction {
            Interaction::Pressed => {
                background.0 = rgba_color(FLAT_BUTTON_PRESSED_COLOR);
                ctx.flat_click(key.0, &mut host);
            }
            Interaction::Hovered => background.0 = rgba_color(FLAT_BUTTON_HOVER_COLOR),
            Interaction::None => background.0 = rgba_color(FLAT_BUTTON_COLOR),
        }
    }
}
