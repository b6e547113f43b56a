//! Player system module
//!
//! - `Player` base entity with a position-derived skill set
//! - `PlayerFactory` building players and fixed rosters
//! - Decorators (`Captain`, `Injured`, `YoungTalent`) composed by wrapping
//! - Optional capability traits reachable through any decoration chain

pub mod decorators;
pub mod factory;
pub mod types;

pub use decorators::{Captain, Injured, YoungTalent};
pub use factory::PlayerFactory;
pub use types::{
    Developable, Footballer, Motivatable, Player, PlayerIdentity, Recoverable, RecoveryStatus,
};
