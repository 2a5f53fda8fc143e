use hopbox_core::{default_platforms, Config, Entity, InputState, Platform, StepEvents};

#[no_mangle]
pub extern "C" fn hopbox_default_config(out: *mut Config) {
    unsafe { *out = Config::default(); }
}

#[no_mangle]
pub extern "C" fn hopbox_spawn_entity(config: *const Config, out: *mut Entity) {
    let c = unsafe { &*config };
    unsafe { *out = Entity::spawn(&c.entity); }
}

/// Writes up to `cap` platforms into `out` and returns how many the level
/// has. Call with `cap == 0` to size the buffer.
#[no_mangle]
pub extern "C" fn hopbox_default_platforms(field_width: f32, out: *mut Platform, cap: usize) -> usize {
    let platforms = default_platforms(field_width);
    let n = platforms.len().min(cap);
    if n > 0 {
        let dst = unsafe { std::slice::from_raw_parts_mut(out, n) };
        dst.copy_from_slice(&platforms[..n]);
    }
    platforms.len()
}

#[no_mangle]
pub extern "C" fn hopbox_step(
    entity: *mut Entity,
    input_bits: u8,
    platforms: *const Platform,
    platforms_len: usize,
    gravity: f32,
    field_width: f32,
) -> StepEvents {
    let e = unsafe { &mut *entity };
    let platforms = if platforms_len == 0 {
        &[][..]
    } else {
        unsafe { std::slice::from_raw_parts(platforms, platforms_len) }
    };
    let input = InputState::from_bits(input_bits);

    hopbox_core::step(e, &input, platforms, gravity, field_width)
}
