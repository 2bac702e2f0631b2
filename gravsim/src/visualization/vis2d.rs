use bevy::log::LogPlugin;
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use tracing::info;

use crate::simulation::scenario::Scenario;
use crate::simulation::simulator::BodyView;
use crate::simulation::states::{NVec2, Rgb};

#[derive(Component)]
struct BodyIndex(pub usize);

/// Plane size, used to map simulation coordinates onto the window
#[derive(Resource)]
struct PlaneBounds(NVec2);

const BACKGROUND: Color = Color::srgb(10.0 / 255.0, 10.0 / 255.0, 30.0 / 255.0);

/// Open a window sized to the plane and tick the scenario at `engine.tick_hz`
/// until the window closes (or `engine.max_ticks` is reached, after which
/// the last state stays on screen)
pub fn run_2d(scenario: Scenario) {
    let bounds = scenario.simulator.parameters().bounds;
    info!(
        bodies = scenario.simulator.bodies().len(),
        tick_hz = scenario.engine.tick_hz,
        "starting Bevy 2D viewer"
    );

    let window = Window {
        title: "gravsim".into(),
        resolution: (bounds.x as f32, bounds.y as f32).into(),
        ..default()
    };

    App::new()
        .insert_resource(ClearColor(BACKGROUND))
        .insert_resource(Time::<Fixed>::from_hz(scenario.engine.tick_hz))
        .insert_resource(PlaneBounds(bounds))
        .insert_resource(scenario)
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(window),
                    ..default()
                })
                // the binary already installed a tracing subscriber
                .disable::<LogPlugin>(),
        )
        .add_systems(Startup, setup_bodies_system)
        .add_systems(FixedUpdate, physics_step_system)
        .add_systems(Update, sync_bodies_system)
        .run();
}

fn to_color(c: Rgb) -> Color {
    let [r, g, b] = c.0;
    Color::srgb_u8(r, g, b)
}

/// Simulation plane has its origin top-left with y pointing down; the 2D
/// camera looks at the window center with y pointing up
fn to_screen(p: NVec2, bounds: NVec2) -> Vec3 {
    Vec3::new((p.x - bounds.x / 2.0) as f32, (bounds.y / 2.0 - p.y) as f32, 0.0)
}

fn place(view: &BodyView, bounds: NVec2, transform: &mut Transform) {
    transform.translation = to_screen(view.position, bounds);
    // radius 0 bodies still get a visible dot
    transform.scale = Vec3::splat(view.radius.max(1) as f32);
}

fn setup_bodies_system(mut commands: Commands, scenario: Res<Scenario>, bounds: Res<PlaneBounds>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    commands.spawn(Camera2dBundle::default());

    // one unit circle shared by every body, scaled by radius
    let circle = Mesh2dHandle(meshes.add(Circle::new(1.0)));

    for view in scenario.simulator.snapshot() {
        let mut transform = Transform::default();
        place(&view, bounds.0, &mut transform);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: circle.clone(),
                material: materials.add(ColorMaterial::from(to_color(view.color))),
                transform,
                ..default()
            },
            BodyIndex(view.id),
        ));
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    let Scenario {
        engine,
        simulator,
    } = &mut *scenario;

    if engine.finished(simulator.ticks()) {
        return;
    }
    simulator.tick();
}

fn sync_bodies_system(mut commands: Commands, scenario: Res<Scenario>, bounds: Res<PlaneBounds>, mut materials: ResMut<Assets<ColorMaterial>>, mut query: Query<(Entity, &BodyIndex, &mut Transform, &Handle<ColorMaterial>)>) {
    for (entity, BodyIndex(i), mut transform, material) in &mut query {
        match scenario.simulator.view(*i) {
            Some(view) => {
                place(&view, bounds.0, &mut transform);
                if let Some(m) = materials.get_mut(material) {
                    m.color = to_color(view.color);
                }
            }
            None => commands.entity(entity).despawn(),
        }
    }
}
