//! Seams to external collaborators and pluggable strategies.

pub mod clock;
pub mod score_store;
pub mod strategies;
pub mod user_directory;

pub use clock::{Clock, SystemClock};
pub use score_store::IScoreStore;
pub use strategies::{
    DecayDistributor, EvenSplit, LinearSpread, LowercaseTrim, ModifierDistributor,
    TermNormalizer,
};
pub use user_directory::{IUserDirectory, PassthroughDirectory};
