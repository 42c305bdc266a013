// Per-request adapter logic exports
pub mod emotion;
pub mod intake;
pub mod prompt;

pub use emotion::{reshape_emotions, EmotionReshapeError};
pub use intake::{decode_image, encode_jpeg, IntakeError};
pub use prompt::build_song_prompt;
