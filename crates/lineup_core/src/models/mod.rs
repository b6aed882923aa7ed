// Roster data model: teams, players, sports, users

pub mod player;
pub mod sport;
pub mod team;
pub mod user;

pub use player::{
    starters, substitutes, AvatarRef, Coordinate, NewPlayer, Player, PlayerEdit, PlayerId,
};
pub use sport::Sport;
pub use team::{Team, TeamId};
pub use user::{User, UserId};
