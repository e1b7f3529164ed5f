pub mod linear_norm;
pub mod power;
pub mod scaler;
pub mod sigma;
pub mod windowed;

pub use linear_norm::LinearNormScaler;
pub use power::{ExponentialScaler, QuadraticScaler};
pub use scaler::{NullScaler, Scaler};
pub use sigma::SigmaScaler;
pub use windowed::WindowedScaler;
