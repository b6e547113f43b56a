pub mod events;
pub mod match_info;
pub mod match_statistics;
pub mod position;

pub use events::{
    CardRecord, EventPayload, GoalRecord, LoggedEvent, MatchEndRecord, MatchEventKind,
    MatchStartRecord, Score, SubstitutionRecord, TeamSide, Winner,
};
pub use match_info::MatchInfo;
pub use match_statistics::MatchStatistics;
pub use position::Position;
