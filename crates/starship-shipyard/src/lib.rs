pub mod hulls;

pub use hulls::{build_starship, build_starship_with, StarshipLayout};
