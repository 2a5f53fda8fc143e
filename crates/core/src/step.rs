use crate::{Control, Entity, InputState, Platform, Rect};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StepEvents {
    pub jumped: bool,
    pub landed: bool,
}

#[inline]
fn clamp(x: f32, lo: f32, hi: f32) -> f32 {
    x.max(lo).min(hi)
}

/// Swept landing test: the current dy widens the band below the platform's
/// top so a fast fall onto a thin platform is still caught.
#[inline]
fn lands_on(e: &Entity, p: &Rect) -> bool {
    let bottom = e.bottom();
    e.x < p.right() && e.x + e.width > p.x && bottom > p.y && bottom < p.bottom() + e.dy
}

/// One tick. The host calls this exactly once per frame.
pub fn step(
    entity: &mut Entity,
    input: &InputState,
    platforms: &[Platform],
    gravity: f32,
    field_width: f32,
) -> StepEvents {
    let mut ev = StepEvents::default();

    // Right is applied last, so it wins a simultaneous press.
    entity.dx = 0.0;
    if input.is_pressed(Control::MoveLeft) {
        entity.dx = -entity.speed;
    }
    if input.is_pressed(Control::MoveRight) {
        entity.dx = entity.speed;
    }

    if input.is_pressed(Control::Jump) && entity.grounded {
        entity.dy = -entity.jump_impulse;
        entity.grounded = false;
        ev.jumped = true;
        log::debug!("jump from ({}, {})", entity.x, entity.y);
    }

    // Applied even while grounded; the landing check below zeroes it again.
    entity.dy += gravity;

    entity.x += entity.dx;
    entity.y += entity.dy;

    // Walls only. Nothing bounds y except the platforms.
    entity.x = clamp(entity.x, 0.0, field_width - entity.width);

    // First match in declared order wins.
    if let Some((i, p)) = platforms
        .iter()
        .enumerate()
        .find(|(_, p)| lands_on(entity, &p.rect))
    {
        entity.y = p.rect.y - entity.height;
        entity.dy = 0.0;
        if !entity.grounded {
            ev.landed = true;
            log::debug!("landed on platform {i} at y={}", entity.y);
        }
        entity.grounded = true;
    }

    ev
}
