use bevy::prelude::*;
use bevy::sprite::{Anchor, MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;

use crate::simulation::scenario::Scenario;
use crate::visualization::view::{
    display_scale, label_offset, parse_color, to_screen, BACKGROUND, FALLBACK_COLOR,
};

#[derive(Component)]
struct BodyIndex(pub usize);

#[derive(Component)]
struct LabelIndex(pub usize);

/// Pixels per meter, fixed for the lifetime of the window
#[derive(Resource)]
struct DisplayScale(f64);

/// Parsed display color per body, same order as `system.bodies`
#[derive(Resource)]
struct BodyColors(Vec<Color>);

const OUTLINE_WIDTH: f32 = 2.0;
const LABEL_FONT_SIZE: f32 = 12.0;

pub fn run_2d(scenario: Scenario) {
    let width = scenario.view.width as f32;
    let height = scenario.view.height as f32;
    let scale = display_scale(scenario.view.width, scenario.view.height, scenario.view.extent);

    App::new()
        .insert_resource(scenario)
        .insert_resource(DisplayScale(scale))
        .insert_resource(ClearColor(BACKGROUND))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "orbitsim".into(),
                resolution: (width, height).into(),
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, setup_bodies_system)
        .add_systems(
            Update,
            (
                controls_system,
                physics_step_system,
                sync_transforms_system,
                draw_traces_system,
            )
                .chain(),
        )
        .run();
}

fn setup_bodies_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    scale: Res<DisplayScale>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    info!(
        "starting 2D viewer: {} bodies, dt = {} s, {} ticks per frame",
        scenario.system.bodies.len(),
        scenario.parameters.dt.seconds(),
        scenario.parameters.steps_per_frame
    );

    commands.spawn(Camera2dBundle::default());

    let outline = materials.add(ColorMaterial::from(Color::BLACK));
    let mut colors = Vec::with_capacity(scenario.system.bodies.len());

    for (i, body) in scenario.system.bodies.iter().enumerate() {
        let color = match parse_color(body.color()) {
            Ok(c) => c,
            Err(e) => {
                warn!("{}: {:#}, using the fallback color", body.name(), e);
                FALLBACK_COLOR
            }
        };
        colors.push(color);

        let radius = body.radius() as f32;
        let screen = to_screen(body.position(), scale.0);

        commands
            .spawn((
                MaterialMesh2dBundle {
                    mesh: Mesh2dHandle(meshes.add(Circle::new(radius))),
                    material: materials.add(ColorMaterial::from(color)),
                    transform: Transform::from_xyz(screen.x, screen.y, 1.0),
                    ..default()
                },
                BodyIndex(i),
            ))
            .with_children(|parent| {
                // black ring drawn behind the fill
                parent.spawn(MaterialMesh2dBundle {
                    mesh: Mesh2dHandle(meshes.add(Circle::new(radius + OUTLINE_WIDTH))),
                    material: outline.clone(),
                    transform: Transform::from_xyz(0.0, 0.0, -0.5),
                    ..default()
                });
            });

        let offset = label_offset(body.radius()) as f32;
        commands.spawn((
            Text2dBundle {
                text: Text::from_section(
                    body.name(),
                    TextStyle {
                        font_size: LABEL_FONT_SIZE,
                        color: Color::BLACK,
                        ..default()
                    },
                ),
                text_anchor: Anchor::BottomLeft,
                transform: Transform::from_xyz(screen.x + offset, screen.y + offset, 2.0),
                ..default()
            },
            LabelIndex(i),
        ));
    }

    commands.insert_resource(BodyColors(colors));
}

fn controls_system(keys: Res<ButtonInput<KeyCode>>, mut scenario: ResMut<Scenario>) {
    if keys.just_pressed(KeyCode::Space) {
        if scenario.toggle_pause() {
            info!("paused at t = {:.0} s", scenario.system.t);
        } else {
            info!("resumed, integration restarted");
        }
    }

    if keys.just_pressed(KeyCode::KeyC) {
        scenario.system.clear_traces();
        info!("traces cleared");
    }

    if keys.just_pressed(KeyCode::KeyN) {
        scenario.system.normalize_to_barycenter();
        info!("moved to barycentric frame");
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    scenario.step_frame();
}

fn sync_transforms_system(
    scenario: Res<Scenario>,
    scale: Res<DisplayScale>,
    mut bodies: Query<(&BodyIndex, &mut Transform), Without<LabelIndex>>,
    mut labels: Query<(&LabelIndex, &mut Transform), Without<BodyIndex>>,
) {
    for (BodyIndex(i), mut transform) in &mut bodies {
        if let Some(b) = scenario.system.bodies.get(*i) {
            let p = to_screen(b.position(), scale.0);
            transform.translation.x = p.x;
            transform.translation.y = p.y;
        }
    }

    for (LabelIndex(i), mut transform) in &mut labels {
        if let Some(b) = scenario.system.bodies.get(*i) {
            let p = to_screen(b.position(), scale.0);
            let offset = label_offset(b.radius()) as f32;
            transform.translation.x = p.x + offset;
            transform.translation.y = p.y + offset;
        }
    }
}

fn draw_traces_system(
    scenario: Res<Scenario>,
    scale: Res<DisplayScale>,
    colors: Res<BodyColors>,
    mut gizmos: Gizmos,
) {
    for (b, color) in scenario.system.bodies.iter().zip(colors.0.iter()) {
        if b.trajectory().len() < 2 {
            continue;
        }
        gizmos.linestrip_2d(
            b.trajectory().as_polyline().map(|p| to_screen(p, scale.0)),
            *color,
        );
    }
}
