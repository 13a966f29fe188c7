//! Static catalogs: the default lesson set, badge metadata and the
//! mini-game registry.

mod badges;
mod games;
mod lessons;

pub use badges::{BadgeMeta, badge_meta};
pub use games::{GAMES, GameDef, game};
pub use lessons::default_catalog;
