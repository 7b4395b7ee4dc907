pub mod bs;

pub use bs::{BlackScholes, CdfMethod, ThetaConvention};
