//! JS boundary: frame decoding and the session objects exported to the
//! front end.

mod landmarks;
mod session;

pub use landmarks::{decode_frame, FLOATS_PER_FRAME};
pub use session::{ExerciseSession, FrameResult};
