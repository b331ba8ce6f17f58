pub mod dataset;
pub mod distance;
pub mod normalize;
pub mod recipe;
pub mod split;

pub use dataset::Dataset;
pub use normalize::ZScore;
pub use recipe::{DatasetRecipe, PrepareOptions, ValueMap};
pub use split::Fold;
