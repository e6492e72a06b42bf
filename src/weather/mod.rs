pub mod cache;
pub mod current;
pub mod irradiance;

pub use cache::CachedIrradianceSource;
pub use current::*;
pub use irradiance::*;
