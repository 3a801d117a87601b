//! Frame decoding at the JS boundary
//!
//! MediaPipe runs in JavaScript and hands over each frame as a flat
//! Float32Array of 99 values (33 landmarks x [x, y, z]). An empty array
//! is the "no pose detected" signal.

use crate::exercise::pose::{Landmark, LANDMARK_COUNT};

pub const FLOATS_PER_FRAME: usize = LANDMARK_COUNT * 3;

/// Decode one frame. `None` means no usable pose this frame: either the
/// caller's explicit no-pose signal (empty slice) or malformed input.
pub fn decode_frame(data: &[f32]) -> Option<[Landmark; LANDMARK_COUNT]> {
    if data.is_empty() {
        return None;
    }
    if data.len() != FLOATS_PER_FRAME {
        warn(&format!(
            "invalid landmark frame length: {} (expected {})",
            data.len(),
            FLOATS_PER_FRAME
        ));
        return None;
    }
    // A NaN or infinity would poison the angle filter's history and
    // freeze every threshold comparison downstream; drop the frame.
    if data.iter().any(|v| !v.is_finite()) {
        warn("non-finite value in landmark frame");
        return None;
    }

    let mut landmarks = [Landmark::default(); LANDMARK_COUNT];
    for (i, lm) in landmarks.iter_mut().enumerate() {
        *lm = Landmark {
            x: data[i * 3],
            y: data[i * 3 + 1],
            z: data[i * 3 + 2],
        };
    }
    Some(landmarks)
}

#[cfg(target_arch = "wasm32")]
fn warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn warn(_msg: &str) {}
