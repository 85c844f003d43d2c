//! UI components for the card.

mod audio_player;
mod audio_unlock;
mod floating_hearts;
mod letter_generator;
mod personalization_form;
mod relationship_timer;
mod secret_content;
mod secret_puzzle;
pub mod share_section;
mod song_title;

pub use audio_player::AudioPlayer;
pub use audio_unlock::AudioUnlock;
pub use floating_hearts::FloatingHearts;
pub use letter_generator::LetterGeneratorCard;
pub use personalization_form::PersonalizationForm;
pub use relationship_timer::RelationshipTimer;
pub use secret_content::SecretContent;
pub use secret_puzzle::SecretPuzzle;
pub use share_section::ShareSection;
pub use song_title::{LetterParagraph, SongTitle};
