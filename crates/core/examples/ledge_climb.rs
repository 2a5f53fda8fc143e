use hopbox_core::{Control, World};

// Scripted run toward the first ledge; prints a JSON summary line.
fn main() {
    let mut world = World::default();

    let mut jumped: u32 = 0;
    let mut landed: u32 = 0;
    let mut highest = world.entity.y;

    for frame in 0..240 {
        world.input.set(Control::MoveRight, frame >= 20 && frame < 60);
        world.input.set(Control::Jump, frame == 40);

        let ev = world.tick();
        jumped += ev.jumped as u32;
        landed += ev.landed as u32;
        highest = highest.min(world.entity.y);
    }

    let e = &world.entity;
    let summary = serde_json::json!({
        "x": e.x,
        "y": e.y,
        "dy": e.dy,
        "grounded": e.grounded,
        "highest_y": highest,
        "jumped": jumped,
        "landed": landed,
    });
    println!("{summary}");
}
