pub mod turn;

pub use turn::{ChatTurn, Role};
