pub mod depth_feature;

pub use depth_feature::*;
