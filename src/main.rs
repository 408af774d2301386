use clap::Parser;
use hecs::World;
use tracing::info;
use tracing_subscriber::EnvFilter;

use scamper::components::{AnimationPlayer, Character, Transform};
use scamper::engine::input::{InputSnapshot, ScriptSegment, ScriptedInput};
use scamper::scene::test_scene::load_test_scene;
use scamper::systems::{
    animation_system, character_state_system, collision_system, hazard_system, physics_step,
    PHYSICS_DT,
};

#[derive(Parser)]
#[command(name = "scamper", about = "Headless character locomotion demo")]
struct Args {
    /// Maximum number of fixed simulation ticks to run
    #[arg(long, default_value_t = 1200)]
    ticks: u32,
    /// Stop early once the character dies
    #[arg(long)]
    until_death: bool,
}

/// Scripted run through the demo course: drop in, idle a beat, run right
/// into the spike strip, keep pushing until the hits add up.
fn demo_script() -> ScriptedInput {
    let neutral = InputSnapshot::default();
    let run_right = InputSnapshot {
        horizontal_axis: 1.0,
        ..Default::default()
    };
    let crouch = InputSnapshot {
        vertical_axis: -1.0,
        ..Default::default()
    };
    let slide = InputSnapshot {
        vertical_axis: -1.0,
        jump_held: true,
        ..Default::default()
    };
    ScriptedInput::new(vec![
        ScriptSegment { duration: 1.0, controls: neutral },
        ScriptSegment { duration: 0.5, controls: crouch },
        ScriptSegment { duration: 0.1, controls: slide },
        ScriptSegment { duration: 2.0, controls: neutral },
        ScriptSegment { duration: 30.0, controls: run_right },
    ])
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let mut world = World::new();
    let player = match load_test_scene(&mut world) {
        Ok(player) => player,
        Err(err) => {
            eprintln!("invalid character configuration: {err}");
            std::process::exit(1);
        }
    };

    let script = demo_script();
    let mut elapsed = 0.0_f32;

    for tick in 0..args.ticks {
        let controls = script.sample(elapsed);
        character_state_system(&mut world, &controls, PHYSICS_DT);
        physics_step(&mut world);
        let events = collision_system(&mut world);
        hazard_system(&mut world, &events);
        animation_system(&mut world);
        elapsed += PHYSICS_DT;

        let ch = world.get::<&Character>(player).unwrap();
        if args.until_death && ch.is_dead {
            info!(tick, "character died, stopping early");
            break;
        }
    }

    let ch = world.get::<&Character>(player).unwrap();
    let transform = world.get::<&Transform>(player).unwrap();
    let clip = world.get::<&AnimationPlayer>(player).unwrap();
    info!(
        state = ch.state().name(),
        life = ch.life,
        dead = ch.is_dead,
        clip = clip.current,
        x = transform.position.x,
        y = transform.position.y,
        "simulation finished"
    );
}
