//! Bevy UI overlay: the scrolling page sections and a live stats line.
//!
//! | Node           | Schedule | Purpose                                     |
//! |----------------|----------|---------------------------------------------|
//! | `PageSection`  | Update   | Hero / about / footer, offset by scroll     |
//! | `StatsDisplay` | Update   | Breakpoint, bodies, scroll and gravity (F1) |

use crate::breakpoint::{Breakpoint, BreakpointState};
use crate::config::SceneConfig;
use crate::gravity::SceneGravity;
use crate::page::PageScroll;
use crate::scroll::ScrollKinematics;
use crate::viewport::Viewport;
use crate::world::WorldStats;
use bevy::prelude::*;

/// One full-viewport block of the page, `index` viewports from the top.
#[derive(Component, Debug, Clone, Copy)]
pub struct PageSection {
    pub index: u32,
}

#[derive(Component)]
pub struct StatsDisplay;

/// Section headings, top to bottom.  Sections beyond this list are blank.
const SECTION_TEXT: [(&str, &str); 3] = [("Hello RAPIER3D!", "↓"), ("", ""), ("Footer", "")];

/// Spawn one absolutely positioned node per page section.
pub fn setup_page_sections(mut commands: Commands, config: Res<SceneConfig>) {
    for index in 0..config.page_sections {
        let (title, hint) = SECTION_TEXT
            .get(index as usize)
            .copied()
            .unwrap_or(("", ""));
        commands
            .spawn((
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(0.0),
                    width: Val::Percent(100.0),
                    flex_direction: FlexDirection::Column,
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    row_gap: Val::Px(12.0),
                    ..default()
                },
                PageSection { index },
            ))
            .with_children(|parent| {
                if !title.is_empty() {
                    parent.spawn((
                        Text::new(title),
                        TextFont {
                            font_size: config.hero_font_size,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));
                }
                if !hint.is_empty() {
                    parent.spawn((
                        Text::new(hint),
                        TextFont {
                            font_size: config.hero_font_size * 0.6,
                            ..default()
                        },
                        TextColor(Color::srgb(0.75, 0.75, 0.8)),
                    ));
                }
            });
    }
    info!("[SETUP] {} page sections spawned", config.page_sections);
}

/// Spawn the stats line in the top-left corner.
pub fn setup_stats_text(mut commands: Commands, config: Res<SceneConfig>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(10.0),
                top: Val::Px(10.0),
                ..default()
            },
            StatsDisplay,
            Visibility::Visible,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: config.stats_font_size,
                    ..default()
                },
                TextColor(Color::srgb(0.0, 1.0, 1.0)),
            ));
        });
}

/// Offset of section `index` from the top of the window for the given scroll.
#[inline]
pub fn section_top(index: u32, viewport_height: f32, scroll: f32) -> f32 {
    index as f32 * viewport_height - scroll
}

/// Move every section with the page.
pub fn page_section_system(
    page: Res<PageScroll>,
    viewport: Res<Viewport>,
    mut sections: Query<(&PageSection, &mut Node)>,
) {
    if !page.is_changed() && !viewport.is_changed() {
        return;
    }
    for (section, mut node) in sections.iter_mut() {
        node.top = Val::Px(section_top(section.index, viewport.height, page.position));
        node.height = Val::Px(viewport.height);
    }
}

pub fn stats_line(
    breakpoint: Option<Breakpoint>,
    stats: &WorldStats,
    kinematics: &ScrollKinematics,
    gravity: &SceneGravity,
) -> String {
    format!(
        "{} | Bodies: {} | Scroll v: {:.0} px/s a: {:.0} px/s² | Gravity: {:.2} m/s²",
        breakpoint.map_or("NONE", Breakpoint::label),
        stats.body_count,
        kinematics.velocity,
        kinematics.acceleration,
        gravity.0.y
    )
}

/// Refresh the stats text each frame.
pub fn stats_display_system(
    state: Res<BreakpointState>,
    stats: Res<WorldStats>,
    kinematics: Res<ScrollKinematics>,
    gravity: Res<SceneGravity>,
    parent_query: Query<&Children, With<StatsDisplay>>,
    mut text_query: Query<&mut Text>,
) {
    for children in parent_query.iter() {
        for child in children.iter() {
            if let Ok(mut text) = text_query.get_mut(child) {
                *text = Text::new(stats_line(state.0, &stats, &kinematics, &gravity));
            }
        }
    }
}

/// F1 shows or hides the stats line.
pub fn toggle_stats_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut query: Query<&mut Visibility, With<StatsDisplay>>,
) {
    if !keys.just_pressed(KeyCode::F1) {
        return;
    }
    for mut visibility in query.iter_mut() {
        *visibility = match *visibility {
            Visibility::Hidden => Visibility::Visible,
            _ => Visibility::Hidden,
        };
    }
}
